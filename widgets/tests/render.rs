//! Tests for checkbox markup fragments, DOM construction and styling.

mod common;

use common::{fixture, fixture_with};
use widgets::prelude::*;

// ============================================================================
// Content attributes
// ============================================================================

#[test]
fn test_content_attrs_default_is_empty() {
    let checkbox = Checkbox::new(EventBus::new());
    assert_eq!(checkbox.content_attrs(), "");
}

#[test]
fn test_content_attrs_each_attribute() {
    let checkbox = Checkbox::new(EventBus::new());

    checkbox.set_name(Some("agree"));
    assert_eq!(checkbox.content_attrs(), " name=\"agree\"");
    checkbox.set_name(None);

    checkbox.set_disabled(true);
    assert_eq!(checkbox.content_attrs(), " disabled=\"disabled\"");
    checkbox.set_disabled(false);

    checkbox.set_checked(true);
    assert_eq!(checkbox.content_attrs(), " checked=\"checked\"");
    checkbox.set_checked(false);

    checkbox.set_tabindex(3);
    assert_eq!(checkbox.content_attrs(), " tabindex=\"3\"");
}

#[test]
fn test_content_attrs_order() {
    let checkbox = Checkbox::new(EventBus::new());
    checkbox.set_tabindex(0);
    checkbox.set_checked(true);
    checkbox.set_disabled(true);
    checkbox.set_name(Some("n"));

    assert_eq!(
        checkbox.content_attrs(),
        " name=\"n\" disabled=\"disabled\" checked=\"checked\" tabindex=\"0\""
    );
}

#[test]
fn test_content_attrs_negative_tabindex_omitted() {
    let checkbox = Checkbox::new(EventBus::new());
    checkbox.set_tabindex(5);
    checkbox.set_tabindex(-2);
    assert!(!checkbox.content_attrs().contains("tabindex"));
}

#[test]
fn test_content_attrs_escapes_name() {
    let checkbox = Checkbox::new(EventBus::new());
    checkbox.set_name(Some("a\"b<c>&'"));
    assert_eq!(
        checkbox.content_attrs(),
        " name=\"a&quot;b&lt;c&gt;&amp;&#39;\""
    );
}

// ============================================================================
// Label attributes
// ============================================================================

#[test]
fn test_label_attrs_without_style_is_empty() {
    let checkbox = Checkbox::new(EventBus::new());
    assert_eq!(checkbox.label_attrs(), "");

    checkbox.set_width(Some("100px"));
    assert_eq!(checkbox.label_attrs(), "");
}

#[test]
fn test_label_attrs_keeps_text_properties_only() {
    let checkbox = Checkbox::new(EventBus::new());
    checkbox.set_style(Some("color: red; margin: 4px; font-weight: bold"));
    assert_eq!(
        checkbox.label_attrs(),
        " style=\"color:red;font-weight:bold\""
    );
}

#[test]
fn test_label_attrs_escapes_style() {
    let checkbox = Checkbox::new(EventBus::new());
    checkbox.set_style(Some("font-family: \"Fira Sans\""));
    assert_eq!(
        checkbox.label_attrs(),
        " style=\"font-family:&quot;Fira Sans&quot;\""
    );
}

// ============================================================================
// DOM construction
// ============================================================================

#[test]
fn test_render_dom_structure() {
    let f = fixture();
    let checkbox = Checkbox::with_config(f.bus.clone(), f.desktop.config());
    checkbox.set_label(Some("Subscribe"));
    let outer = checkbox.render_dom(&f.desktop, &f.desktop.document().body());

    assert_eq!(outer.tag(), "span");
    assert_eq!(outer.id().as_deref(), Some(checkbox.uuid()));
    assert_eq!(outer.attr("class").as_deref(), Some("z-checkbox"));
    assert!(f.desktop.document().contains(&outer));

    let children = outer.children();
    assert_eq!(children.len(), 2);
    let real = &children[0];
    let label = &children[1];
    let real_id = format!("{}$real", checkbox.uuid());

    assert_eq!(real.tag(), "input");
    assert_eq!(real.id().as_deref(), Some(real_id.as_str()));
    assert_eq!(real.attr("type").as_deref(), Some("checkbox"));

    assert_eq!(label.tag(), "label");
    assert_eq!(label.attr("for").as_deref(), Some(real_id.as_str()));
    assert_eq!(label.attr("class").as_deref(), Some("z-checkbox-cnt"));
    assert_eq!(label.text(), "Subscribe");
}

#[test]
fn test_render_dom_initializes_from_state() {
    let f = fixture();
    let checkbox = Checkbox::with_config(f.bus.clone(), f.desktop.config());
    checkbox.set_checked(true);
    checkbox.set_disabled(true);
    checkbox.set_name(Some("opt"));
    checkbox.set_tabindex(4);
    checkbox.render_dom(&f.desktop, &f.desktop.document().body());
    let real = f.real_node(&checkbox);

    assert!(real.checked());
    assert!(real.default_checked());
    assert!(real.disabled());
    assert_eq!(real.name().as_deref(), Some("opt"));
    assert_eq!(real.tab_index(), 4);
}

#[test]
fn test_render_dom_replaces_previous_render() {
    let f = fixture();
    let checkbox = f.rendered();
    let body = f.desktop.document().body();
    checkbox.render_dom(&f.desktop, &body);

    assert_eq!(body.children().len(), 1);
}

#[test]
fn test_render_dom_uses_configured_separator() {
    let f = fixture_with(WidgetConfig::default().id_separator('-'));
    let checkbox = f.mounted();
    let real = f.real_node(&checkbox);

    assert_eq!(real.id(), Some(format!("{}-real", checkbox.uuid())));
    assert_eq!(checkbox.real_node(), Some(real));
}

// ============================================================================
// Style
// ============================================================================

#[test]
fn test_update_dom_style_applies_to_outer_and_label() {
    let f = fixture();
    let checkbox = f.mounted();
    let outer = checkbox.base().node().expect("outer");
    let label = outer.first_descendant_by_tag("label").expect("label");

    checkbox.set_style(Some("color:blue;border:1px solid"));
    assert_eq!(outer.style().get("color"), Some("blue"));
    assert_eq!(outer.style().get("border"), Some("1px solid"));
    assert_eq!(label.style().get("color"), Some("blue"));
    assert_eq!(label.style().get("border"), None);
}

#[test]
fn test_width_and_height_land_on_outer_node() {
    let f = fixture();
    let checkbox = f.mounted();
    let outer = checkbox.base().node().expect("outer");

    checkbox.set_width(Some("120px"));
    checkbox.set_height(Some("2em"));
    assert_eq!(outer.style().to_string(), "width:120px;height:2em");

    checkbox.set_width(None);
    assert_eq!(outer.style().to_string(), "height:2em");
}

#[test]
fn test_set_visible_hides_outer_node() {
    let f = fixture();
    let checkbox = f.mounted();
    let outer = checkbox.base().node().expect("outer");

    checkbox.set_visible(false);
    assert!(!checkbox.is_visible());
    assert_eq!(outer.style().get("display"), Some("none"));

    checkbox.set_visible(true);
    assert_eq!(outer.style().get("display"), None);
}

#[test]
fn test_style_set_before_render_is_applied() {
    let f = fixture();
    let checkbox = Checkbox::with_config(f.bus.clone(), f.desktop.config());
    checkbox.set_style(Some("font-size:12px"));
    let outer = checkbox.render_dom(&f.desktop, &f.desktop.document().body());
    let label = outer.first_descendant_by_tag("label").expect("label");

    assert_eq!(outer.style().get("font-size"), Some("12px"));
    assert_eq!(label.style().get("font-size"), Some("12px"));
}

// ============================================================================
// Zclass
// ============================================================================

#[test]
fn test_zclass_default_from_config() {
    let f = fixture_with(WidgetConfig::default().checkbox_zclass("my-check"));
    let checkbox = f.rendered();
    assert_eq!(checkbox.zclass(), "my-check");

    let outer = f
        .desktop
        .document()
        .get_element_by_id(checkbox.uuid())
        .expect("outer");
    assert_eq!(outer.attr("class").as_deref(), Some("my-check"));
}

#[test]
fn test_set_zclass_updates_bound_nodes() {
    let f = fixture();
    let checkbox = f.mounted();
    let outer = checkbox.base().node().expect("outer");
    let label = outer.first_descendant_by_tag("label").expect("label");

    checkbox.set_zclass(Some("fancy"));
    assert_eq!(checkbox.zclass(), "fancy");
    assert_eq!(outer.attr("class").as_deref(), Some("fancy"));
    assert_eq!(label.attr("class").as_deref(), Some("fancy-cnt"));

    checkbox.set_zclass(None);
    assert_eq!(checkbox.zclass(), "z-checkbox");
    assert_eq!(label.attr("class").as_deref(), Some("z-checkbox-cnt"));
}
