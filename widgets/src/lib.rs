pub mod config;
pub mod desktop;
pub mod error;
pub mod events;
pub mod widget;
pub mod widgets;

pub use config::{Platform, WidgetConfig};
pub use desktop::{Desktop, WeakDesktop, WidgetRegistry};
pub use error::WidgetError;
pub use events::{EventBus, Observer, SubscriptionId, WidgetEvent, WidgetEventKind};
pub use widget::{Widget, WidgetBase};

pub mod prelude {
    pub use crate::config::{Platform, WidgetConfig};
    pub use crate::desktop::Desktop;
    pub use crate::error::WidgetError;
    pub use crate::events::{EventBus, WidgetEvent, WidgetEventKind};
    pub use crate::widget::Widget;
    pub use crate::widgets::{Checkbox, ServerUpdate};

    pub use dom::{Document, Node};
}
