//! Error type shared by the control facades.
//!
//! Failures never reach the user: facades log them and drop them. The type
//! exists so backends can say *why* they failed.

use std::sync::Arc;

/// Error emitted by a brightness, audio or appearance backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// The interface is not present on this machine (missing framework,
    /// symbol, device or service).
    Unavailable { interface: &'static str },

    /// The OS call returned a non-success status code.
    Status { interface: &'static str, code: i32 },

    /// An external script could not be launched or exited with failure.
    Script { context: Arc<str> },

    /// Filesystem interaction failed.
    Filesystem { context: Arc<str> },

    /// A JSON document could not be parsed or produced.
    Json { context: Arc<str> },
}

impl std::fmt::Display for ControlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { interface } => write!(f, "{} is not available", interface),
            Self::Status { interface, code } => {
                write!(f, "{} returned status {}", interface, code)
            }
            Self::Script { context } => write!(f, "script failed: {}", context),
            Self::Filesystem { context } => write!(f, "filesystem error: {}", context),
            Self::Json { context } => write!(f, "invalid JSON: {}", context),
        }
    }
}

impl std::error::Error for ControlError {}

impl ControlError {
    fn arc_from(value: impl Into<String>) -> Arc<str> {
        Arc::<str>::from(value.into())
    }

    /// Create a script error with contextual information.
    pub fn script(context: impl Into<String>) -> Self {
        Self::Script {
            context: Self::arc_from(context),
        }
    }

    /// Create a filesystem error with contextual information.
    pub fn filesystem(context: impl Into<String>) -> Self {
        Self::Filesystem {
            context: Self::arc_from(context),
        }
    }

    /// Create a JSON error with contextual information.
    pub fn json(context: impl Into<String>) -> Self {
        Self::Json {
            context: Self::arc_from(context),
        }
    }

    /// Map an OS status code to `Ok` (zero) or `Status`.
    pub fn check(interface: &'static str, code: i32) -> Result<(), Self> {
        if code == 0 {
            Ok(())
        } else {
            Err(Self::Status { interface, code })
        }
    }
}

impl From<std::io::Error> for ControlError {
    fn from(value: std::io::Error) -> Self {
        ControlError::filesystem(value.to_string())
    }
}

impl From<serde_json::Error> for ControlError {
    fn from(value: serde_json::Error) -> Self {
        ControlError::json(value.to_string())
    }
}
