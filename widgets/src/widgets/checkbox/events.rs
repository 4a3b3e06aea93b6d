//! DOM event handling for the Checkbox widget.

use dom::{DomEvent, Listener};
use log::trace;

use crate::desktop::Desktop;

use super::Checkbox;

impl Checkbox {
    /// Build the click listener for one bind cycle.
    ///
    /// The listener holds the desktop weakly; the document owns the listener,
    /// and the desktop owns the document.
    pub(super) fn click_listener(desktop: &Desktop) -> Listener {
        let desktop = desktop.downgrade();
        Listener::new(move |event| {
            if let Some(desktop) = desktop.upgrade() {
                Checkbox::do_click(&desktop, event);
            }
        })
    }

    /// Handle a click on a checkbox's real control.
    ///
    /// Resolves the owning checkbox from the event and, if the control's live
    /// checked state differs from its committed (default) state, feeds it
    /// back through [`set_checked`](Checkbox::set_checked). Clicks that did
    /// not actually toggle the control are ignored.
    pub fn do_click(desktop: &Desktop, event: &DomEvent) {
        let Some(widget) = desktop.resolve_widget(event) else {
            trace!("Checkbox::do_click: no widget owns {:?}", event.target);
            return;
        };
        let Some(checkbox) = widget.as_any().downcast_ref::<Checkbox>() else {
            trace!(
                "Checkbox::do_click: '{}' is a {}, not a checkbox",
                widget.uuid(),
                widget.widget_name()
            );
            return;
        };
        let Some(node) = checkbox.real_node() else {
            return;
        };

        let checked = node.checked();
        if checked != node.default_checked() {
            checkbox.set_checked(checked);
        } else {
            trace!("Checkbox::do_click: '{}' unchanged", checkbox.uuid());
        }
    }
}
