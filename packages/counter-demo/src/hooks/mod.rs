//! This module contains hooks that can be used to add behavior to components.
//!
//! Hooks are implemented as traits which extend the [`Hooks`](crate::Hooks) object that gets passed to your component.
//!
//! For example, if you want to create a hook that counts how many times a component has
//! rendered, you might define and use it like this:
//!
//! ```
//! # use counter_demo::prelude::*;
//! pub trait UseRenderCount {
//!     /// Returns how many times the component has rendered, including this time.
//!     fn use_render_count(&mut self) -> u64;
//! }
//!
//! #[derive(Default)]
//! struct RenderCount(u64);
//!
//! impl Hook for RenderCount {}
//!
//! impl UseRenderCount for Hooks<'_> {
//!     fn use_render_count(&mut self) -> u64 {
//!         let count = self.use_hook(RenderCount::default);
//!         count.0 += 1;
//!         count.0
//!     }
//! }
//! ```

mod use_effect;
pub use use_effect::*;
mod use_state;
pub use use_state::*;
