//! Widget events and the observer bus they are fired on.
//!
//! Widgets never talk to a global dispatcher. Each widget is handed an
//! [`EventBus`] at construction and fires onto it; consumers subscribe to the
//! same bus.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::trace;

/// What happened to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// The checked state changed through a client-side cause.
    Check { checked: bool },
    /// The widget's control gained focus.
    Focus,
    /// The widget's control lost focus.
    Blur,
}

impl WidgetEventKind {
    /// Event name as used by the framework's wire protocol.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEventKind::Check { .. } => "onCheck",
            WidgetEventKind::Focus => "onFocus",
            WidgetEventKind::Blur => "onBlur",
        }
    }
}

/// An event fired by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    pub kind: WidgetEventKind,
    /// Uuid of the widget that fired the event.
    pub target: String,
}

impl WidgetEvent {
    pub fn new(kind: WidgetEventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// An observer callback.
pub type Observer = Rc<dyn Fn(&WidgetEvent)>;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct BusInner {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

/// Observer registry shared between widgets and their consumers.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for all events fired on this bus.
    pub fn subscribe(&self, observer: impl Fn(&WidgetEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.observers.push((id, Rc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(sid, _)| *sid != id);
        inner.observers.len() != before
    }

    /// Deliver an event to every observer, in subscription order.
    ///
    /// Observers are snapshotted first, so they may fire, subscribe or
    /// unsubscribe re-entrantly. Returns the number of observers notified.
    pub fn fire(&self, event: WidgetEvent) -> usize {
        let observers: Vec<Observer> = self
            .inner
            .borrow()
            .observers
            .iter()
            .map(|(_, o)| Rc::clone(o))
            .collect();
        trace!(
            "fire {} on '{}' to {} observers",
            event.kind.name(),
            event.target,
            observers.len()
        );
        for observer in &observers {
            observer(&event);
        }
        observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observer_count", &self.observer_count())
            .finish()
    }
}
