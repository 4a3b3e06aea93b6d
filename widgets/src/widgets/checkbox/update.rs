//! Property updates pushed down by the server.

use log::warn;
use serde::Deserialize;

use crate::error::WidgetError;

use super::Checkbox;

/// A single property update for a checkbox, as sent by the server.
///
/// On the wire this is `{"prop": "checked", "value": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "prop", content = "value", rename_all = "lowercase")]
pub enum ServerUpdate {
    Checked(bool),
    Disabled(bool),
    Name(Option<String>),
    Tabindex(i32),
    Label(Option<String>),
    Zclass(Option<String>),
    Style(Option<String>),
    Visible(bool),
}

fn parse_bool(property: &str, value: Option<&str>) -> Result<bool, WidgetError> {
    match value.map(str::trim) {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        other => Err(WidgetError::InvalidValue {
            property: property.to_string(),
            value: other.unwrap_or_default().to_string(),
            expected: "true or false",
        }),
    }
}

impl ServerUpdate {
    /// Build an update from a property name and its string-encoded value,
    /// the form used by attribute-style responses.
    pub fn from_attr(property: &str, value: Option<&str>) -> Result<Self, WidgetError> {
        let text = || value.map(str::to_string);
        match property {
            "checked" => Ok(Self::Checked(parse_bool(property, value)?)),
            "disabled" => Ok(Self::Disabled(parse_bool(property, value)?)),
            "visible" => Ok(Self::Visible(parse_bool(property, value)?)),
            "tabindex" => value
                .and_then(|v| v.trim().parse().ok())
                .map(Self::Tabindex)
                .ok_or_else(|| WidgetError::InvalidValue {
                    property: property.to_string(),
                    value: value.unwrap_or_default().to_string(),
                    expected: "an integer",
                }),
            "name" => Ok(Self::Name(text())),
            "label" => Ok(Self::Label(text())),
            "zclass" => Ok(Self::Zclass(text())),
            "style" => Ok(Self::Style(text())),
            _ => Err(WidgetError::UnknownProperty(property.to_string())),
        }
    }
}

impl Checkbox {
    /// Apply a server update.
    ///
    /// `checked` goes through the server path and does not fire `Check`.
    pub fn apply_server_update(&self, update: ServerUpdate) {
        match update {
            ServerUpdate::Checked(checked) => self.set_checked_from_server(checked),
            ServerUpdate::Disabled(disabled) => self.set_disabled(disabled),
            ServerUpdate::Name(name) => self.set_name(name.as_deref()),
            ServerUpdate::Tabindex(tabindex) => self.set_tabindex(tabindex),
            ServerUpdate::Label(label) => self.set_label(label.as_deref()),
            ServerUpdate::Zclass(zclass) => self.set_zclass(zclass.as_deref()),
            ServerUpdate::Style(style) => self.set_style(style.as_deref()),
            ServerUpdate::Visible(visible) => self.set_visible(visible),
        }
    }

    /// Apply a string-encoded property update addressed by name.
    pub fn set_attr(&self, property: &str, value: Option<&str>) -> Result<(), WidgetError> {
        let update = ServerUpdate::from_attr(property, value).inspect_err(|e| {
            warn!("Checkbox '{}': rejected server update: {}", self.uuid(), e);
        })?;
        self.apply_server_update(update);
        Ok(())
    }
}
