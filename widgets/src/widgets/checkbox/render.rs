//! Checkbox markup fragments, DOM construction and style updates.

use std::borrow::Cow;
use std::fmt::Write;

use dom::{text_style, Node, StyleMap};
use log::debug;

use crate::desktop::Desktop;

use super::Checkbox;

/// Escape a value for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

impl Checkbox {
    /// The style class: the explicit zclass, or the configured default.
    pub fn zclass(&self) -> String {
        self.base
            .zclass()
            .unwrap_or_else(|| self.default_zclass.clone())
    }

    pub fn set_zclass(&self, zclass: Option<&str>) {
        if !self.base.set_zclass(zclass) {
            return;
        }
        let zclass = self.zclass();
        if let Some(node) = self.base.node() {
            node.set_attr("class", zclass.as_str());
        }
        if let Some(label) = self.label_node() {
            label.set_attr("class", format!("{zclass}-cnt"));
        }
    }

    /// Attribute fragment for the real `<input>` element.
    ///
    /// Each attribute is emitted only when it carries information: `name`
    /// when set, `disabled` and `checked` when true, `tabindex` when not
    /// negative.
    pub fn content_attrs(&self) -> String {
        let inner = self.inner.borrow();
        let mut html = String::new();
        if let Some(name) = &inner.name {
            let _ = write!(html, " name=\"{}\"", escape_attr(name));
        }
        if inner.disabled {
            html.push_str(" disabled=\"disabled\"");
        }
        if inner.checked {
            html.push_str(" checked=\"checked\"");
        }
        if inner.tabindex >= 0 {
            let _ = write!(html, " tabindex=\"{}\"", inner.tabindex);
        }
        html
    }

    /// Attribute fragment for the `<label>` element: the text-related part of
    /// the widget's style, or nothing.
    pub fn label_attrs(&self) -> String {
        let style = text_style(&self.base.dom_style());
        if style.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", escape_attr(&style))
        }
    }

    /// Build the widget's DOM under `parent` and return the outer node.
    ///
    /// Produces `span#<uuid>` holding `input#<uuid>$real` (initialized from
    /// the current state) and a `label`. An existing element with the same
    /// uuid is removed first. A bound widget is unbound before its nodes are
    /// replaced; bind again afterwards.
    pub fn render_dom(&self, desktop: &Desktop, parent: &Node) -> Node {
        if self.is_bound() {
            debug!("Checkbox::render_dom '{}': unbinding before re-render", self.uuid());
            self.unbind();
        }
        let document = desktop.document();
        let uuid = self.uuid();
        let real_id = desktop.config().sub_id(uuid, "real");
        let zclass = self.zclass();

        if let Some(old) = document.get_element_by_id(uuid) {
            old.remove();
        }

        let outer = document.create_element_with_id("span", uuid);
        outer.set_attr("class", zclass.as_str());

        let real = document.create_element_with_id("input", &real_id);
        real.set_attr("type", "checkbox");
        {
            let inner = self.inner.borrow();
            real.set_checked(inner.checked);
            real.set_default_checked(inner.checked);
            real.set_disabled(inner.disabled);
            real.set_name(inner.name.as_deref());
            if inner.tabindex >= 0 {
                real.set_tab_index(inner.tabindex);
            }
        }

        let label = document.create_element("label");
        label.set_attr("for", real_id.as_str());
        label.set_attr("class", format!("{zclass}-cnt"));
        label.set_text(self.label().unwrap_or_default());

        outer.append_child(&real);
        outer.append_child(&label);
        parent.append_child(&outer);
        self.apply_dom_style(&outer);
        outer
    }

    /// Push the computed style onto the rendered nodes: the full style on the
    /// outer node, the text-related part on the label. No-op while unbound.
    pub fn update_dom_style(&self) {
        if let Some(node) = self.base.node() {
            self.apply_dom_style(&node);
        }
    }

    fn apply_dom_style(&self, outer: &Node) {
        let style = self.base.dom_style();
        outer.set_style(StyleMap::parse(&style));
        if let Some(label) = outer.first_descendant_by_tag("label") {
            label.set_style(StyleMap::parse(&text_style(&style)));
        }
    }

    pub(super) fn label_node(&self) -> Option<Node> {
        self.base.node()?.first_descendant_by_tag("label")
    }

    pub fn set_style(&self, style: Option<&str>) {
        if self.base.set_style(style) {
            self.update_dom_style();
        }
    }

    pub fn set_width(&self, width: Option<&str>) {
        if self.base.set_width(width) {
            self.update_dom_style();
        }
    }

    pub fn set_height(&self, height: Option<&str>) {
        if self.base.set_height(height) {
            self.update_dom_style();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.base.is_visible()
    }

    pub fn set_visible(&self, visible: bool) {
        if self.base.set_visible(visible) {
            self.update_dom_style();
        }
    }
}
