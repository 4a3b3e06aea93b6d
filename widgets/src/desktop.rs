//! The desktop a widget binds into.
//!
//! A desktop bundles the document, the widget configuration, and the registry
//! that maps element ids back to the widgets that own them. The registry only
//! holds weak references: a DOM node never keeps its widget alive.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use dom::{Document, DomEvent, Node};

use crate::config::{Platform, WidgetConfig};
use crate::widget::Widget;

/// Uuid → widget lookup for bound widgets.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: RefCell<HashMap<String, Weak<dyn Widget>>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget` under `uuid`, dropping entries whose widget is gone.
    pub fn register(&self, uuid: &str, widget: Weak<dyn Widget>) {
        let mut widgets = self.widgets.borrow_mut();
        widgets.retain(|_, w| w.strong_count() > 0);
        widgets.insert(uuid.to_string(), widget);
    }

    pub fn unregister(&self, uuid: &str) -> bool {
        self.widgets.borrow_mut().remove(uuid).is_some()
    }

    /// The live widget registered under `uuid`, if any.
    pub fn get(&self, uuid: &str) -> Option<Rc<dyn Widget>> {
        self.widgets.borrow().get(uuid).and_then(Weak::upgrade)
    }

    /// Number of live registered widgets.
    pub fn len(&self) -> usize {
        self.widgets
            .borrow()
            .values()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("widget_count", &self.len())
            .finish()
    }
}

#[derive(Debug)]
struct DesktopInner {
    document: Document,
    config: WidgetConfig,
    registry: WidgetRegistry,
}

/// Shared handle to a desktop. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Desktop {
    inner: Rc<DesktopInner>,
}

/// Non-owning desktop handle, for use inside DOM listeners.
#[derive(Debug, Clone)]
pub struct WeakDesktop(Weak<DesktopInner>);

impl WeakDesktop {
    pub fn upgrade(&self) -> Option<Desktop> {
        self.0.upgrade().map(|inner| Desktop { inner })
    }
}

impl Desktop {
    pub fn new(document: Document) -> Self {
        Self::with_config(document, WidgetConfig::default())
    }

    pub fn with_config(document: Document, config: WidgetConfig) -> Self {
        Self {
            inner: Rc::new(DesktopInner {
                document,
                config,
                registry: WidgetRegistry::new(),
            }),
        }
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }

    pub fn platform(&self) -> Platform {
        self.inner.config.platform
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.inner.registry
    }

    pub fn downgrade(&self) -> WeakDesktop {
        WeakDesktop(Rc::downgrade(&self.inner))
    }

    pub fn ptr_eq(&self, other: &Desktop) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Look up a bound widget by uuid.
    pub fn widget(&self, uuid: &str) -> Option<Rc<dyn Widget>> {
        self.inner.registry.get(uuid)
    }

    /// The widget owning `node`: the nearest node (itself or an ancestor)
    /// whose id maps to a bound widget.
    pub fn widget_for_node(&self, node: &Node) -> Option<Rc<dyn Widget>> {
        let mut current = Some(node.clone());
        while let Some(n) = current {
            if let Some(id) = n.id() {
                let owner = self
                    .inner
                    .config
                    .owner_candidates(&id)
                    .find_map(|uuid| self.widget(uuid));
                if owner.is_some() {
                    return owner;
                }
            }
            current = n.parent();
        }
        None
    }

    /// Resolve the widget that owns a DOM event.
    ///
    /// The search starts at the event's target. On hosts with the legacy
    /// event-target quirk the target handed to listeners cannot be trusted,
    /// so the search starts at the node the listener was registered on.
    pub fn resolve_widget(&self, event: &DomEvent) -> Option<Rc<dyn Widget>> {
        let start = if self.platform().legacy_event_target {
            &event.current_target
        } else {
            &event.target
        };
        self.widget_for_node(start)
    }
}
