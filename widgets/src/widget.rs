//! Shared widget behavior.
//!
//! Concrete widgets embed a [`WidgetBase`] and compose their own lifecycle
//! around it: `bind` runs the base step first and the widget's step after,
//! `unbind` runs the widget's step first and the base step last.
//!
//! The base step owns what every widget needs while mounted:
//! - the outer DOM node (`<uuid>`), resolved on bind
//! - registration in the desktop's widget registry, so DOM events can be
//!   traced back to the widget
//! - the event bus the widget fires onto
//! - cached listener proxies, so a handler keeps one identity across mounts

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;

use dom::{Listener, Node, StyleMap, WeakNode};
use log::debug;

use crate::desktop::Desktop;
use crate::error::WidgetError;
use crate::events::{EventBus, WidgetEvent, WidgetEventKind};

/// Object-safe view of a widget, as stored in the desktop registry.
pub trait Widget {
    /// The widget's unique id.
    fn uuid(&self) -> &str;

    /// Short type name, for logging.
    fn widget_name(&self) -> &'static str;

    /// Downcast support for event handlers that need the concrete type.
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
struct BaseState {
    desktop: Option<Desktop>,
    node: WeakNode,
    zclass: Option<String>,
    style: Option<String>,
    width: Option<String>,
    height: Option<String>,
    visible: bool,
}

impl Default for BaseState {
    fn default() -> Self {
        Self {
            desktop: None,
            node: WeakNode::new(),
            zclass: None,
            style: None,
            width: None,
            height: None,
            visible: true,
        }
    }
}

/// State and lifecycle shared by all widgets.
#[derive(Debug)]
pub struct WidgetBase {
    uuid: String,
    bus: EventBus,
    state: RefCell<BaseState>,
    proxies: RefCell<HashMap<&'static str, Listener>>,
}

/// Assign `value` to `slot`, returning whether it changed.
fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

impl WidgetBase {
    pub fn new(uuid: impl Into<String>, bus: EventBus) -> Self {
        Self {
            uuid: uuid.into(),
            bus,
            state: RefCell::new(BaseState::default()),
            proxies: RefCell::new(HashMap::new()),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// The desktop this widget is bound into, if any.
    pub fn desktop(&self) -> Option<Desktop> {
        self.state.borrow().desktop.clone()
    }

    pub fn is_bound(&self) -> bool {
        self.state.borrow().desktop.is_some()
    }

    /// The outer DOM node while bound.
    pub fn node(&self) -> Option<Node> {
        self.state.borrow().node.upgrade()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Base bind step: resolve the outer node and register `widget` under
    /// this uuid in the desktop's registry.
    pub fn bind(&self, desktop: &Desktop, widget: Weak<dyn Widget>) -> Result<Node, WidgetError> {
        if self.is_bound() {
            return Err(WidgetError::AlreadyBound {
                uuid: self.uuid.clone(),
            });
        }
        let node = desktop
            .document()
            .get_element_by_id(&self.uuid)
            .ok_or_else(|| WidgetError::NodeNotFound {
                id: self.uuid.clone(),
            })?;

        desktop.registry().register(&self.uuid, widget);
        {
            let mut state = self.state.borrow_mut();
            state.desktop = Some(desktop.clone());
            state.node = node.downgrade();
        }
        debug!("WidgetBase::bind '{}'", self.uuid);
        Ok(node)
    }

    /// Base unbind step. Safe to call when not bound.
    pub fn unbind(&self) {
        let desktop = {
            let mut state = self.state.borrow_mut();
            state.node = WeakNode::new();
            state.desktop.take()
        };
        if let Some(desktop) = desktop {
            desktop.registry().unregister(&self.uuid);
            debug!("WidgetBase::unbind '{}'", self.uuid);
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Fire an event from this widget onto its bus.
    pub fn fire(&self, kind: WidgetEventKind) -> usize {
        self.bus.fire(WidgetEvent::new(kind, self.uuid.as_str()))
    }

    /// Return the listener cached under `name`, creating it with `make` on
    /// first use.
    ///
    /// The same listener identity is handed out on every call, so a handler
    /// registered in one bind cycle can be removed in its unbind, and the
    /// next bind registers the very same listener again.
    pub fn proxy(&self, name: &'static str, make: impl FnOnce() -> Listener) -> Listener {
        self.proxies
            .borrow_mut()
            .entry(name)
            .or_insert_with(make)
            .clone()
    }

    /// Focus handler proxied onto the DOM.
    pub fn dom_focus(&self) {
        self.fire(WidgetEventKind::Focus);
    }

    /// Blur handler proxied onto the DOM.
    pub fn dom_blur(&self) {
        self.fire(WidgetEventKind::Blur);
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn zclass(&self) -> Option<String> {
        self.state.borrow().zclass.clone()
    }

    /// Returns true if the value changed.
    pub fn set_zclass(&self, zclass: Option<&str>) -> bool {
        let zclass = zclass.filter(|z| !z.is_empty()).map(str::to_string);
        replace_if_changed(&mut self.state.borrow_mut().zclass, zclass)
    }

    pub fn style(&self) -> Option<String> {
        self.state.borrow().style.clone()
    }

    /// Returns true if the value changed.
    pub fn set_style(&self, style: Option<&str>) -> bool {
        let style = style.filter(|s| !s.is_empty()).map(str::to_string);
        replace_if_changed(&mut self.state.borrow_mut().style, style)
    }

    pub fn width(&self) -> Option<String> {
        self.state.borrow().width.clone()
    }

    /// Returns true if the value changed.
    pub fn set_width(&self, width: Option<&str>) -> bool {
        let width = width.filter(|w| !w.is_empty()).map(str::to_string);
        replace_if_changed(&mut self.state.borrow_mut().width, width)
    }

    pub fn height(&self) -> Option<String> {
        self.state.borrow().height.clone()
    }

    /// Returns true if the value changed.
    pub fn set_height(&self, height: Option<&str>) -> bool {
        let height = height.filter(|h| !h.is_empty()).map(str::to_string);
        replace_if_changed(&mut self.state.borrow_mut().height, height)
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    /// Returns true if the value changed.
    pub fn set_visible(&self, visible: bool) -> bool {
        replace_if_changed(&mut self.state.borrow_mut().visible, visible)
    }

    /// The inline style of the outer node: the user style, then width and
    /// height, then `display:none` when hidden.
    pub fn dom_style(&self) -> String {
        let state = self.state.borrow();
        let mut style = state
            .style
            .as_deref()
            .map(StyleMap::parse)
            .unwrap_or_default();
        if let Some(width) = &state.width {
            style.set("width", width.as_str());
        }
        if let Some(height) = &state.height {
            style.set("height", height.as_str());
        }
        if !state.visible {
            style.set("display", "none");
        }
        style.to_string()
    }
}
