//! # counter-demo
//!
//! `counter-demo` hosts a single counter component on a small React-like hooks runtime. The
//! component renders a button and two counters, writes to a console, and subscribes to the
//! window's scroll event from a mount-time effect.
//!
//! ```
//! use counter_demo::prelude::*;
//!
//! let props = CounterDemoProps::default();
//! let console = props.console.clone();
//! let mut tree = Tree::<CounterDemo>::mount(props);
//!
//! tree.click(BUTTON_LABEL).unwrap();
//! tree.settle();
//!
//! assert!(tree.canvas().to_string().contains("state: 1"));
//! assert_eq!(console.count("3"), 1);
//! ```

#![warn(missing_docs)]

// # Organization
//
// Code is organized into modules primarily for the benefit of the maintainers. Types will be
// re-exported in the root so that users of the library have a flat namespace to work with.
//
// The exception is the models that represent collections of types, namely hooks and components.
// Those types will remain in their modules for the public API.

mod canvas;
mod component;
mod console;
mod element;
mod error;
mod handler;
mod hook;
mod render;
mod terminal;
mod window;

mod flattened_exports {
    pub use crate::canvas::*;
    pub use crate::component::*;
    pub use crate::console::*;
    pub use crate::element::*;
    pub use crate::handler::*;
    pub use crate::hook::*;
    pub use crate::render::*;
    pub use crate::terminal::*;
    pub use crate::window::*;
}

pub use error::{Error, Result};
pub use flattened_exports::*;

/// Components for crafting your UI.
pub mod components;

/// Hooks for adding behavior to your components.
pub mod hooks;

/// By importing this module, you'll bring all of the crate's commonly used types into scope.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::flattened_exports::*;
    pub use crate::hooks::*;
}
