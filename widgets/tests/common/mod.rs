//! Shared fixtures for widget integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use simplelog::{Config, LevelFilter, TestLogger};
use widgets::prelude::*;

static LOGGER: Once = Once::new();

pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}

/// A desktop, an event bus, and a recording of everything fired on the bus.
pub struct Fixture {
    pub desktop: Desktop,
    pub bus: EventBus,
    pub events: Rc<RefCell<Vec<WidgetEvent>>>,
}

pub fn fixture() -> Fixture {
    fixture_with(WidgetConfig::default())
}

pub fn fixture_with(config: WidgetConfig) -> Fixture {
    init_logging();
    let desktop = Desktop::with_config(Document::new(), config);
    let bus = EventBus::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        bus.subscribe(move |event| events.borrow_mut().push(event.clone()));
    }
    Fixture {
        desktop,
        bus,
        events,
    }
}

impl Fixture {
    /// A checkbox rendered into the document body but not bound.
    pub fn rendered(&self) -> Rc<Checkbox> {
        let checkbox = Checkbox::with_config(self.bus.clone(), self.desktop.config());
        checkbox.render_dom(&self.desktop, &self.desktop.document().body());
        checkbox
    }

    /// A checkbox rendered and bound.
    pub fn mounted(&self) -> Rc<Checkbox> {
        let checkbox = self.rendered();
        checkbox
            .bind(&self.desktop)
            .expect("bind rendered checkbox");
        checkbox
    }

    /// Real control node of a rendered checkbox, looked up by id.
    pub fn real_node(&self, checkbox: &Checkbox) -> Node {
        let id = self.desktop.config().sub_id(checkbox.uuid(), "real");
        self.desktop
            .document()
            .get_element_by_id(&id)
            .expect("rendered real node")
    }

    /// Payloads of all `Check` events fired so far.
    pub fn checks(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e.kind {
                WidgetEventKind::Check { checked } => Some(checked),
                _ => None,
            })
            .collect()
    }

    pub fn kinds(&self) -> Vec<WidgetEventKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }
}
