//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Where an order is in its lifecycle.
///
/// Receipts created at checkout start as [`OrderStatus::Pending`]; the later
/// states are set by staff once a back office exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Kutilmoqda",
            Self::Confirmed => "Tasdiqlandi",
            Self::InProgress => "Tayyorlanmoqda",
            Self::Ready => "Tayyor",
            Self::Delivered => "Yetkazildi",
            Self::Cancelled => "Bekor qilindi",
        }
    }

    /// Badge colour used when rendering the status.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "#f39c12",
            Self::Confirmed => "#3498db",
            Self::InProgress => "#9b59b6",
            Self::Ready => "#27ae60",
            Self::Delivered => "#2ecc71",
            Self::Cancelled => "#e74c3c",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_are_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_label_and_color() {
        assert_eq!(OrderStatus::Pending.label(), "Kutilmoqda");
        assert_eq!(OrderStatus::Pending.color(), "#f39c12");
    }

    #[test]
    fn test_display_matches_serde_key() {
        assert_eq!(OrderStatus::InProgress.to_string(), "in_progress");
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap_or_default(),
            "\"in_progress\""
        );
    }
}
