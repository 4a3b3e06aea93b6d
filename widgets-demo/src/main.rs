//! Scripted checkbox session.
//!
//! Renders a checkbox into an in-memory document, binds it, and plays a
//! short sequence of user clicks and server updates, printing every widget
//! event. Debug logs go to the cache directory (see [`paths`]).

mod paths;

use std::fs::{self, File};

use dom::{Document, EventType};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use widgets::prelude::*;

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("widgets-demo: cannot create {}: {}", path.display(), e),
    }
}

fn run() -> Result<(), WidgetError> {
    let desktop = Desktop::new(Document::new());
    let bus = EventBus::new();
    bus.subscribe(|event| println!("{:>8}  {:?}", event.kind.name(), event.kind));

    let agree = Checkbox::with_config(bus.clone(), desktop.config());
    agree.set_label(Some("I agree to the terms"));
    agree.set_name(Some("agree"));
    agree.set_tabindex(1);
    println!("<input type=\"checkbox\"{}/>", agree.content_attrs());

    agree.render_dom(&desktop, &desktop.document().body());
    agree.bind(&desktop)?;
    info!("bound '{}'", agree.uuid());

    let real = agree
        .real_node()
        .ok_or_else(|| WidgetError::NodeNotFound {
            id: desktop.config().sub_id(agree.uuid(), "real"),
        })?;

    real.dispatch_event(EventType::Focus);
    real.click();
    real.click();
    real.dispatch_event(EventType::Blur);

    // Server pushes: no Check events expected.
    agree.set_attr("checked", Some("true"))?;
    agree.set_attr("disabled", Some("true"))?;
    real.click();
    println!("checked={} disabled={}", agree.is_checked(), agree.is_disabled());

    agree.unbind();
    real.click();
    println!("after unbind: listeners={}", real.listener_count(EventType::Click));
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("demo failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
