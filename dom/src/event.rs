use std::fmt;

use crate::node::Node;

/// DOM event types the substrate can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    MouseDown,
    Focus,
    Blur,
}

impl EventType {
    /// The event name as it appears in markup and listener registration.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::MouseDown => "mousedown",
            EventType::Focus => "focus",
            EventType::Blur => "blur",
        }
    }

    /// Whether the event propagates from the target up through its ancestors.
    ///
    /// Focus and blur are delivered to the target only.
    pub fn bubbles(&self) -> bool {
        matches!(self, EventType::Click | EventType::MouseDown)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event being delivered to a listener.
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: EventType,
    /// Node the event was originally dispatched at.
    pub target: Node,
    /// Node whose listener is currently running.
    pub current_target: Node,
}
