//! Widget error types.

use thiserror::Error;

/// Errors from operations that touch the environment a widget lives in.
///
/// State setters never fail; only binding and server property updates do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// `bind` was called on a widget that is already bound.
    #[error("widget '{uuid}' is already bound")]
    AlreadyBound {
        /// The widget's uuid.
        uuid: String,
    },

    /// A node the widget needs is not in the document.
    #[error("no element with id '{id}' in the document")]
    NodeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A server update named a property the widget does not have.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// A server update carried a value of the wrong type.
    #[error("invalid value {value:?} for property '{property}': expected {expected}")]
    InvalidValue {
        property: String,
        value: String,
        expected: &'static str,
    },
}
