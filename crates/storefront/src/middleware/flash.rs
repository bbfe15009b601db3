//! Flash notifications kept in the session until the next page render.

use tower_sessions::Session;

use crate::models::{Notification, session_keys};

/// Queue a notification for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn push_notification(
    session: &Session,
    notification: Notification,
) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<Notification> = session
        .get(session_keys::NOTIFICATIONS)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    pending.push(notification);
    session.insert(session_keys::NOTIFICATIONS, pending).await
}

/// Remove and return every pending notification.
///
/// A session that cannot be read yields no notifications.
pub async fn take_notifications(session: &Session) -> Vec<Notification> {
    match session
        .remove::<Vec<Notification>>(session_keys::NOTIFICATIONS)
        .await
    {
        Ok(pending) => pending.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read notifications from session: {e}");
            Vec::new()
        }
    }
}
