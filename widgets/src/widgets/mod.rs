//! Concrete widgets.
//!
//! Each widget lives in its own module with:
//! - `mod.rs` - state, accessors and the bind/unbind lifecycle
//! - `events.rs` - DOM event handling
//! - `render.rs` - markup fragments and DOM construction

pub mod checkbox;

pub use checkbox::{Checkbox, ServerUpdate};
