use std::io;
use thiserror::Error;

/// Errors reported by the runtime when a tree is driven incorrectly or the terminal fails.
#[derive(Debug, Error)]
pub enum Error {
    /// The tree has already been unmounted.
    #[error("the tree has been unmounted")]
    Unmounted,

    /// No committed button carries the given label.
    #[error("no button labelled {0:?} in the committed tree")]
    ButtonNotFound(String),

    /// Reading terminal events or writing a frame failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A specialized [`Result`](std::result::Result) type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;
