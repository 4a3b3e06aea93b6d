use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::node::{Node, WeakNode};

#[derive(Debug)]
struct DocumentInner {
    body: Node,
    ids: HashMap<String, WeakNode>,
}

/// An in-memory document: a `body` root plus an id index.
///
/// The document owns the tree through `body`. Elements created but never
/// attached live only as long as some caller holds a [`Node`] for them.
#[derive(Debug, Clone)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DocumentInner {
                body: Node::new("body", None),
                ids: HashMap::new(),
            })),
        }
    }

    pub fn body(&self) -> Node {
        self.inner.borrow().body.clone()
    }

    /// Create a detached element without an id.
    pub fn create_element(&self, tag: &str) -> Node {
        Node::new(tag, None)
    }

    /// Create a detached element and index it under `id`.
    ///
    /// A later element created with the same id shadows the earlier one.
    pub fn create_element_with_id(&self, tag: &str, id: &str) -> Node {
        let node = Node::new(tag, Some(id));
        let previous = self
            .inner
            .borrow_mut()
            .ids
            .insert(id.to_string(), node.downgrade());
        if previous.and_then(|w| w.upgrade()).is_some() {
            debug!("create_element_with_id: id {id:?} now refers to a new element");
        }
        node
    }

    /// Look up a connected element by id.
    ///
    /// Elements that were dropped or are not attached under `body` are not
    /// found.
    pub fn get_element_by_id(&self, id: &str) -> Option<Node> {
        let node = {
            let mut inner = self.inner.borrow_mut();
            match inner.ids.get(id).and_then(WeakNode::upgrade) {
                Some(node) => node,
                None => {
                    inner.ids.remove(id);
                    return None;
                }
            }
        };
        if self.contains(&node) {
            Some(node)
        } else {
            None
        }
    }

    /// Whether `node` is attached to this document's tree.
    pub fn contains(&self, node: &Node) -> bool {
        node.root() == self.body()
    }
}
