use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::event::{DomEvent, EventType};

/// A DOM event listener.
///
/// Identity is the allocation: clones of one listener compare equal, two
/// listeners built from identical closures do not. Removal matches on that
/// identity, so keep a clone of whatever was registered.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&DomEvent)>);

impl Listener {
    pub fn new(f: impl Fn(&DomEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub(crate) fn call(&self, event: &DomEvent) {
        (self.0)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0))
    }
}

/// Listeners registered on a single node, keyed by event type.
#[derive(Debug, Default, Clone)]
pub(crate) struct ListenerStore {
    map: HashMap<EventType, Vec<Listener>>,
}

impl ListenerStore {
    /// Register a listener. Registering the same listener twice for one
    /// event type is ignored. Returns true if it was added.
    pub fn add(&mut self, event: EventType, listener: Listener) -> bool {
        let listeners = self.map.entry(event).or_default();
        if listeners.contains(&listener) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn remove(&mut self, event: EventType, listener: &Listener) -> bool {
        let Some(listeners) = self.map.get_mut(&event) else {
            return false;
        };

        if let Some(pos) = listeners.iter().position(|l| l == listener) {
            listeners.remove(pos);
            if listeners.is_empty() {
                self.map.remove(&event);
            }
            return true;
        }

        false
    }

    /// Snapshot of the listeners for an event type, in registration order.
    pub fn get(&self, event: EventType) -> Vec<Listener> {
        self.map.get(&event).cloned().unwrap_or_default()
    }

    pub fn count(&self, event: EventType) -> usize {
        self.map.get(&event).map_or(0, Vec::len)
    }
}
