use dom::{Document, StyleMap};

// ============================================================================
// Id lookup
// ============================================================================

#[test]
fn test_get_element_by_id_connected() {
    let doc = Document::new();
    let node = doc.create_element_with_id("input", "z_1$real");
    doc.body().append_child(&node);

    assert_eq!(doc.get_element_by_id("z_1$real"), Some(node));
}

#[test]
fn test_get_element_by_id_detached() {
    let doc = Document::new();
    let node = doc.create_element_with_id("input", "z_1$real");

    assert_eq!(doc.get_element_by_id("z_1$real"), None);

    doc.body().append_child(&node);
    assert!(doc.get_element_by_id("z_1$real").is_some());

    node.remove();
    assert_eq!(doc.get_element_by_id("z_1$real"), None);
}

#[test]
fn test_get_element_by_id_dropped() {
    let doc = Document::new();
    {
        let _node = doc.create_element_with_id("input", "gone");
    }
    assert_eq!(doc.get_element_by_id("gone"), None);
}

#[test]
fn test_weak_node_does_not_keep_element_alive() {
    let doc = Document::new();
    let node = doc.create_element_with_id("input", "cb");
    doc.body().append_child(&node);
    let weak = node.downgrade();
    drop(node);

    assert!(weak.upgrade().is_some());

    if let Some(node) = weak.upgrade() {
        node.remove();
    }
    assert!(weak.upgrade().is_none());
}

// ============================================================================
// Tree
// ============================================================================

#[test]
fn test_append_child_reparents() {
    let doc = Document::new();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    let child = doc.create_element("label");
    doc.body().append_child(&a);
    doc.body().append_child(&b);

    a.append_child(&child);
    b.append_child(&child);

    assert!(a.children().is_empty());
    assert_eq!(b.children(), vec![child.clone()]);
    assert_eq!(child.parent(), Some(b));
}

#[test]
fn test_first_descendant_by_tag() {
    let doc = Document::new();
    let outer = doc.create_element("span");
    let input = doc.create_element("input");
    let wrapper = doc.create_element("div");
    let label = doc.create_element("label");
    outer.append_child(&input);
    outer.append_child(&wrapper);
    wrapper.append_child(&label);

    assert_eq!(outer.first_descendant_by_tag("LABEL"), Some(label));
    assert_eq!(outer.first_descendant_by_tag("img"), None);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_tab_index_defaults() {
    let doc = Document::new();
    let input = doc.create_element("input");
    let span = doc.create_element("span");

    assert_eq!(input.tab_index(), 0);
    assert_eq!(span.tab_index(), -1);
    assert!(!input.has_explicit_tab_index());

    input.set_tab_index(4);
    assert_eq!(input.tab_index(), 4);
    assert!(input.has_explicit_tab_index());

    input.clear_tab_index();
    assert_eq!(input.tab_index(), 0);
}

#[test]
fn test_name_property() {
    let doc = Document::new();
    let input = doc.create_element("input");
    assert_eq!(input.name(), None);

    input.set_name(Some("agree"));
    assert_eq!(input.name().as_deref(), Some("agree"));

    input.set_name(None);
    assert_eq!(input.name(), None);
}

#[test]
fn test_style_property() {
    let doc = Document::new();
    let node = doc.create_element("span");
    node.set_style(StyleMap::parse("color: red"));
    assert_eq!(node.style().get("color"), Some("red"));
}
