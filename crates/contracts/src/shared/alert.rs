use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    /// CSS modifier used by the alert box.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert--success",
            AlertKind::Error => "alert alert--error",
            AlertKind::Info => "alert alert--info",
        }
    }
}

/// Inline message shown above a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    /// Extra lines, e.g. row-level validation errors from the backend.
    #[serde(default)]
    pub details: Vec<String>,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}
