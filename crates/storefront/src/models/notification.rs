//! Flash notifications shown as toasts on the next rendered page.

use serde::{Deserialize, Serialize};

/// Toast style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier used as `alert-{kind}`.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A one-shot message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Full class attribute for the toast element.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.kind.css_class())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class() {
        assert_eq!(Notification::error("x").css_class(), "alert alert-error");
        assert_eq!(Notification::success("x").css_class(), "alert alert-success");
    }

    #[test]
    fn test_serialized_kind_is_lowercase() {
        let json = serde_json::to_string(&Notification::error("Salom")).unwrap();
        assert_eq!(json, r#"{"kind":"error","message":"Salom"}"#);
    }
}
