//! Checkbox widget - a two-state toggle mirrored onto a native checkbox input.

mod events;
mod render;
mod update;

pub use update::ServerUpdate;

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dom::{EventType, Listener, Node, WeakNode};
use log::debug;

use crate::config::WidgetConfig;
use crate::desktop::Desktop;
use crate::error::WidgetError;
use crate::events::{EventBus, WidgetEventKind};
use crate::widget::{Widget, WidgetBase};

/// Listeners registered on the real control for one bind cycle.
#[derive(Debug)]
struct RealBinding {
    node: WeakNode,
    click: Listener,
    focus: Listener,
    blur: Listener,
}

#[derive(Debug)]
struct CheckboxInner {
    checked: bool,
    disabled: bool,
    /// Form field name. Never `Some("")`.
    name: Option<String>,
    /// Tab order; negative means the platform default.
    tabindex: i32,
    label: Option<String>,
    real: Option<RealBinding>,
}

impl Default for CheckboxInner {
    fn default() -> Self {
        Self {
            checked: false,
            disabled: false,
            name: None,
            tabindex: -1,
            label: None,
            real: None,
        }
    }
}

impl CheckboxInner {
    fn real_node(&self) -> Option<Node> {
        self.real.as_ref().and_then(|r| r.node.upgrade())
    }
}

/// A checkbox widget.
///
/// The widget keeps its own `checked / disabled / name / tabindex` state and,
/// while bound, mirrors every change onto its real control node
/// (`<uuid>$real`). User clicks on that node flow back through
/// [`Checkbox::set_checked`] and are reported as `Check` events; changes
/// pushed down by the server go through [`Checkbox::set_checked_from_server`]
/// and are not echoed back.
///
/// Widgets are created behind an `Rc` so DOM listeners can refer back to them
/// weakly.
///
/// # Example
///
/// ```ignore
/// let desktop = Desktop::new(Document::new());
/// let bus = EventBus::new();
/// bus.subscribe(|event| println!("{:?}", event.kind));
///
/// let agree = Checkbox::new(bus);
/// agree.set_label(Some("I agree"));
/// agree.render_dom(&desktop, &desktop.document().body());
/// agree.bind(&desktop)?;
/// ```
#[derive(Debug)]
pub struct Checkbox {
    me: Weak<Checkbox>,
    base: WidgetBase,
    default_zclass: String,
    inner: RefCell<CheckboxInner>,
}

impl Checkbox {
    /// Create an unchecked checkbox with a generated uuid.
    pub fn new(bus: EventBus) -> Rc<Self> {
        Self::with_config(bus, &WidgetConfig::default())
    }

    /// Create an unchecked checkbox using `config` for its uuid and zclass.
    pub fn with_config(bus: EventBus, config: &WidgetConfig) -> Rc<Self> {
        Self::create(config.next_uuid(), bus, config.checkbox_zclass.clone())
    }

    /// Create an unchecked checkbox with an explicit uuid.
    pub fn with_uuid(uuid: impl Into<String>, bus: EventBus) -> Rc<Self> {
        Self::create(uuid.into(), bus, WidgetConfig::default().checkbox_zclass)
    }

    fn create(uuid: String, bus: EventBus, default_zclass: String) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            base: WidgetBase::new(uuid, bus),
            default_zclass,
            inner: RefCell::new(CheckboxInner::default()),
        })
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        let node = {
            let mut inner = self.inner.borrow_mut();
            if inner.disabled == disabled {
                return;
            }
            inner.disabled = disabled;
            inner.real_node()
        };
        if let Some(node) = node {
            node.set_disabled(disabled);
        }
    }

    pub fn is_checked(&self) -> bool {
        self.inner.borrow().checked
    }

    /// Set the checked state as a client-side change.
    ///
    /// While bound, the real control's live and default checked flags are
    /// updated and a `Check` event is fired.
    pub fn set_checked(&self, checked: bool) {
        self.apply_checked(checked, false);
    }

    /// Set the checked state as pushed down by the server.
    ///
    /// Same as [`set_checked`](Self::set_checked) but never fires `Check`:
    /// the server already knows.
    pub fn set_checked_from_server(&self, checked: bool) {
        self.apply_checked(checked, true);
    }

    fn apply_checked(&self, checked: bool, from_server: bool) {
        let node = {
            let mut inner = self.inner.borrow_mut();
            if inner.checked == checked {
                return;
            }
            inner.checked = checked;
            inner.real_node()
        };
        let Some(node) = node else {
            return;
        };
        node.set_checked(checked);
        node.set_default_checked(checked);
        if !from_server {
            self.base.fire(WidgetEventKind::Check { checked });
        }
    }

    /// The form field name. Only relevant to legacy form submission.
    pub fn name(&self) -> Option<String> {
        self.inner.borrow().name.clone()
    }

    /// Set the form field name. An empty name is the same as no name.
    pub fn set_name(&self, name: Option<&str>) {
        let name = name.filter(|n| !n.is_empty());
        let node = {
            let mut inner = self.inner.borrow_mut();
            if inner.name.as_deref() == name {
                return;
            }
            inner.name = name.map(str::to_string);
            inner.real_node()
        };
        if let Some(node) = node {
            node.set_name(name);
        }
    }

    /// The tab order. -1 (the default) means the platform default.
    pub fn tabindex(&self) -> i32 {
        self.inner.borrow().tabindex
    }

    pub fn set_tabindex(&self, tabindex: i32) {
        let node = {
            let mut inner = self.inner.borrow_mut();
            if inner.tabindex == tabindex {
                return;
            }
            inner.tabindex = tabindex;
            inner.real_node()
        };
        if let Some(node) = node {
            if tabindex >= 0 {
                node.set_tab_index(tabindex);
            } else {
                node.clear_tab_index();
            }
        }
    }

    pub fn label(&self) -> Option<String> {
        self.inner.borrow().label.clone()
    }

    /// Set the label text, updating the rendered label while bound.
    pub fn set_label(&self, label: Option<&str>) {
        let label = label.filter(|l| !l.is_empty());
        {
            let mut inner = self.inner.borrow_mut();
            if inner.label.as_deref() == label {
                return;
            }
            inner.label = label.map(str::to_string);
        }
        if let Some(node) = self.label_node() {
            node.set_text(label.unwrap_or_default());
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn is_bound(&self) -> bool {
        self.inner.borrow().real.is_some()
    }

    /// The real control node while bound.
    pub fn real_node(&self) -> Option<Node> {
        self.inner.borrow().real_node()
    }

    /// Mount the widget onto its rendered nodes.
    ///
    /// Runs the base bind, then resolves `<uuid>$real` and registers the
    /// click, focus and blur listeners on it. On error the widget is left
    /// unbound.
    pub fn bind(&self, desktop: &Desktop) -> Result<(), WidgetError> {
        if self.is_bound() {
            return Err(WidgetError::AlreadyBound {
                uuid: self.uuid().to_string(),
            });
        }
        let me: Weak<dyn Widget> = self.me.clone();
        self.base.bind(desktop, me)?;

        let real_id = desktop.config().sub_id(self.uuid(), "real");
        let Some(node) = desktop.document().get_element_by_id(&real_id) else {
            self.base.unbind();
            return Err(WidgetError::NodeNotFound { id: real_id });
        };

        let click = Self::click_listener(desktop);
        let focus = self.base.proxy("_fxFocus", || {
            let me = self.me.clone();
            Listener::new(move |_| {
                if let Some(checkbox) = me.upgrade() {
                    checkbox.base.dom_focus();
                }
            })
        });
        let blur = self.base.proxy("_fxBlur", || {
            let me = self.me.clone();
            Listener::new(move |_| {
                if let Some(checkbox) = me.upgrade() {
                    checkbox.base.dom_blur();
                }
            })
        });

        node.add_event_listener(EventType::Click, click.clone());
        node.add_event_listener(EventType::Focus, focus.clone());
        node.add_event_listener(EventType::Blur, blur.clone());

        self.inner.borrow_mut().real = Some(RealBinding {
            node: node.downgrade(),
            click,
            focus,
            blur,
        });
        debug!("Checkbox::bind '{}' -> {:?}", self.uuid(), node);
        Ok(())
    }

    /// Detach from the rendered nodes. Safe to call at any time.
    ///
    /// Removes exactly the listeners registered by the last `bind`, drops the
    /// node reference, then runs the base unbind.
    pub fn unbind(&self) {
        let real = self.inner.borrow_mut().real.take();
        if let Some(real) = real {
            if let Some(node) = real.node.upgrade() {
                node.remove_event_listener(EventType::Click, &real.click);
                node.remove_event_listener(EventType::Focus, &real.focus);
                node.remove_event_listener(EventType::Blur, &real.blur);
            }
            debug!("Checkbox::unbind '{}'", self.uuid());
        }
        self.base.unbind();
    }
}

impl Drop for Checkbox {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl Widget for Checkbox {
    fn uuid(&self) -> &str {
        self.base.uuid()
    }

    fn widget_name(&self) -> &'static str {
        "checkbox"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
