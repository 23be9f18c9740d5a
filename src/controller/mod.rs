//! Controller module - display state, UI surfaces and the lookup flow.

mod display;
mod lookup;
mod render;

pub use display::*;
pub use lookup::*;
pub use render::*;
