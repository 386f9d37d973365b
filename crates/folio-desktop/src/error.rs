//! Error types for the desktop state core
//!
//! Window and menu operations are total and never fail. Errors only
//! surface at the edges: catalog lookups, configuration and JSON
//! crossing the browser boundary.

/// Errors that can occur at the edges of the desktop core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No app with the given ID exists in the catalog
    UnknownApp(String),

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownApp(id) => write!(f, "unknown app: {}", id),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
