pub mod document;
pub mod event;
pub mod listener;
pub mod node;
pub mod style;

pub use document::Document;
pub use event::{DomEvent, EventType};
pub use listener::Listener;
pub use node::{Node, WeakNode};
pub use style::{text_style, StyleMap};
