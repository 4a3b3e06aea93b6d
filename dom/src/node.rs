use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::event::{DomEvent, EventType};
use crate::listener::{Listener, ListenerStore};
use crate::style::StyleMap;

/// Tags whose default tab order is 0 (focusable in sequence).
const SEQUENTIALLY_FOCUSABLE: &[&str] = &["a", "button", "input", "select", "textarea"];

#[derive(Debug)]
struct NodeData {
    tag: String,
    id: Option<String>,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<Node>,
    attributes: Vec<(String, String)>,
    text: String,

    // Form control properties
    checked: bool,
    default_checked: bool,
    disabled: bool,
    name: Option<String>,
    tab_index: Option<i32>,

    style: StyleMap,
    listeners: ListenerStore,
}

/// Strong handle to an element in a document.
///
/// Handles are cheap to clone; all clones refer to the same element.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

/// Non-owning handle to an element. Does not keep the element alive.
#[derive(Clone, Default)]
pub struct WeakNode(Weak<RefCell<NodeData>>);

impl Node {
    pub(crate) fn new(tag: &str, id: Option<&str>) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            id: id.map(str::to_string),
            parent: Weak::new(),
            children: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            checked: false,
            default_checked: false,
            disabled: false,
            name: None,
            tab_index: None,
            style: StyleMap::default(),
            listeners: ListenerStore::default(),
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn downgrade(&self) -> WeakNode {
        WeakNode(Rc::downgrade(&self.0))
    }

    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // =========================================================================
    // Attributes and content
    // =========================================================================

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    pub fn set_attr(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let mut data = self.0.borrow_mut();
        match data
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value,
            None => data.attributes.push((name.to_ascii_lowercase(), value)),
        }
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.0.borrow_mut().text = text.into();
    }

    // =========================================================================
    // Form control properties
    // =========================================================================

    pub fn checked(&self) -> bool {
        self.0.borrow().checked
    }

    pub fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    pub fn default_checked(&self) -> bool {
        self.0.borrow().default_checked
    }

    pub fn set_default_checked(&self, checked: bool) {
        self.0.borrow_mut().default_checked = checked;
    }

    pub fn disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    pub fn name(&self) -> Option<String> {
        self.0.borrow().name.clone()
    }

    pub fn set_name(&self, name: Option<&str>) {
        self.0.borrow_mut().name = name.map(str::to_string);
    }

    /// Effective tab order: the explicit value if one was set, otherwise the
    /// platform default for the tag (0 for form controls and links, -1 else).
    pub fn tab_index(&self) -> i32 {
        let data = self.0.borrow();
        data.tab_index.unwrap_or_else(|| {
            if SEQUENTIALLY_FOCUSABLE.contains(&data.tag.as_str()) {
                0
            } else {
                -1
            }
        })
    }

    pub fn has_explicit_tab_index(&self) -> bool {
        self.0.borrow().tab_index.is_some()
    }

    pub fn set_tab_index(&self, tab_index: i32) {
        self.0.borrow_mut().tab_index = Some(tab_index);
    }

    /// Drop the explicit tab order, reverting to the platform default.
    pub fn clear_tab_index(&self) {
        self.0.borrow_mut().tab_index = None;
    }

    pub fn style(&self) -> StyleMap {
        self.0.borrow().style.clone()
    }

    pub fn set_style(&self, style: StyleMap) {
        self.0.borrow_mut().style = style;
    }

    // =========================================================================
    // Tree
    // =========================================================================

    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    /// Append `child` as the last child, detaching it from any previous parent.
    pub fn append_child(&self, child: &Node) {
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Detach this node from its parent. No-op for a detached node.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .0
            .borrow_mut()
            .children
            .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        self.0.borrow_mut().parent = Weak::new();
    }

    /// The root of the tree this node belongs to (itself when detached).
    pub fn root(&self) -> Node {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// First descendant (depth-first, document order) with the given tag.
    pub fn first_descendant_by_tag(&self, tag: &str) -> Option<Node> {
        for child in self.children() {
            if child.tag().eq_ignore_ascii_case(tag) {
                return Some(child);
            }
            if let Some(found) = child.first_descendant_by_tag(tag) {
                return Some(found);
            }
        }
        None
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Register a listener. Returns false if the same listener was already
    /// registered for this event type.
    pub fn add_event_listener(&self, event: EventType, listener: Listener) -> bool {
        self.0.borrow_mut().listeners.add(event, listener)
    }

    /// Remove a previously registered listener. Returns false if it was not
    /// registered for this event type.
    pub fn remove_event_listener(&self, event: EventType, listener: &Listener) -> bool {
        let removed = self.0.borrow_mut().listeners.remove(event, listener);
        if !removed {
            debug!("remove_event_listener: no {} listener on {:?}", event, self);
        }
        removed
    }

    pub fn listener_count(&self, event: EventType) -> usize {
        self.0.borrow().listeners.count(event)
    }

    /// Dispatch an event at this node.
    ///
    /// Listeners on the node run first, then (for bubbling events) listeners
    /// on each ancestor. Listener lists are snapshotted per node before
    /// invocation, so listeners may freely mutate the tree or registrations.
    /// Returns the number of listeners invoked.
    pub fn dispatch_event(&self, event_type: EventType) -> usize {
        trace!("dispatch {} at {:?}", event_type, self);

        let mut path = vec![self.clone()];
        if event_type.bubbles() {
            let mut current = self.parent();
            while let Some(node) = current {
                current = node.parent();
                path.push(node);
            }
        }

        let mut invoked = 0;
        for current_target in path {
            let listeners = current_target.0.borrow().listeners.get(event_type);
            if listeners.is_empty() {
                continue;
            }
            let event = DomEvent {
                event_type,
                target: self.clone(),
                current_target,
            };
            for listener in listeners {
                listener.call(&event);
                invoked += 1;
            }
        }
        invoked
    }

    /// Simulate a user click.
    ///
    /// Disabled nodes ignore the click. A checkbox input flips its live
    /// `checked` state before listeners run; `default_checked` is untouched.
    /// Returns false if the click was suppressed.
    pub fn click(&self) -> bool {
        if self.disabled() {
            trace!("click suppressed on disabled {:?}", self);
            return false;
        }
        let is_checkbox = self.tag() == "input"
            && self
                .attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
        if is_checkbox {
            let checked = self.checked();
            self.set_checked(!checked);
        }
        self.dispatch_event(EventType::Click);
        true
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => match &data.id {
                Some(id) => write!(f, "<{}#{}>", data.tag, id),
                None => write!(f, "<{}>", data.tag),
            },
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}

impl WeakNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upgrade(&self) -> Option<Node> {
        self.0.upgrade().map(Node)
    }
}

impl fmt::Debug for WeakNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(node) => write!(f, "WeakNode({node:?})"),
            None => f.write_str("WeakNode(<dropped>)"),
        }
    }
}
