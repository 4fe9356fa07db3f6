mod button;
pub use button::*;
mod counter_demo;
pub use counter_demo::*;
mod fragment;
pub use fragment::*;
mod text;
pub use text::*;
