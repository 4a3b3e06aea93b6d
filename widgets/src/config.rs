//! Widget configuration types.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_UUID: AtomicUsize = AtomicUsize::new(0);

/// Host platform quirks that change how DOM events are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Platform {
    /// The host reports an unreliable `target` to listeners; the owning widget
    /// must be resolved from the event's current target instead.
    /// Old Gecko 2 builds behave this way.
    pub legacy_event_target: bool,
}

impl Platform {
    /// A standards-compliant host.
    pub fn modern() -> Self {
        Self::default()
    }

    /// A host with the legacy event-target quirk.
    pub fn legacy() -> Self {
        Self {
            legacy_event_target: true,
        }
    }
}

/// Desktop-wide widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Prefix for generated widget uuids.
    pub uuid_prefix: String,

    /// Separator between a widget's uuid and the name of one of its sub-nodes.
    /// The real control of a checkbox is `<uuid><sep>real`.
    pub id_separator: char,

    /// Style class for checkboxes created without an explicit zclass.
    pub checkbox_zclass: String,

    /// Event handling quirks of the host.
    pub platform: Platform,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            uuid_prefix: "z_".to_string(),
            id_separator: '$',
            checkbox_zclass: "z-checkbox".to_string(),
            platform: Platform::default(),
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uuid prefix.
    pub fn uuid_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.uuid_prefix = prefix.into();
        self
    }

    /// Set the sub-node id separator.
    pub fn id_separator(mut self, separator: char) -> Self {
        self.id_separator = separator;
        self
    }

    /// Set the default checkbox style class.
    pub fn checkbox_zclass(mut self, zclass: impl Into<String>) -> Self {
        self.checkbox_zclass = zclass.into();
        self
    }

    /// Set the host platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Generate a fresh widget uuid.
    pub fn next_uuid(&self) -> String {
        let n = NEXT_UUID.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.uuid_prefix, n)
    }

    /// Id of the sub-node `name` of the widget `uuid`.
    pub fn sub_id(&self, uuid: &str, name: &str) -> String {
        format!("{}{}{}", uuid, self.id_separator, name)
    }

    /// Uuids an element id may belong to, longest first: the id itself, then
    /// the id with one trailing `<sep><name>` segment stripped at a time.
    ///
    /// The separator may also occur inside a uuid (e.g. `z_4_real` with `_`),
    /// so the owner is whichever candidate is actually registered.
    pub fn owner_candidates<'a>(&self, id: &'a str) -> impl Iterator<Item = &'a str> {
        let separator = self.id_separator;
        std::iter::successors(Some(id), move |current| {
            current.rsplit_once(separator).map(|(head, _)| head)
        })
    }
}
