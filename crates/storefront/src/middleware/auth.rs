//! Demo sign-in state and extractors.
//!
//! The signed-in user lives in the session under `currentUser`. There is no
//! account backend yet, so nothing is verified on the way in.

use axum::{extract::FromRequestParts, http::request::Parts};
use navoi_curtain_core::auth::CurrentUser;
use tower_sessions::Session;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::session::session_from_parts;
use crate::models::session_keys;

/// Read the current user from the session.
///
/// A missing or unreadable record means nobody is signed in.
pub async fn load_current_user(session: &Session) -> Option<CurrentUser> {
    match session.get::<CurrentUser>(session_keys::CURRENT_USER).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Failed to read current user from session: {e}");
            None
        }
    }
}

/// Extractor for the signed-in user with login and logout.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(users: UserStore) -> impl IntoResponse {
///     match users.current() {
///         Some(u) => format!("Salom, {}!", u.first_name),
///         None => "Salom!".to_string(),
///     }
/// }
/// ```
pub struct UserStore {
    session: Session,
    user: Option<CurrentUser>,
}

impl<S> FromRequestParts<S> for UserStore
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts)?;
        Ok(Self::load(session).await)
    }
}

impl UserStore {
    /// Load the store for a session.
    pub async fn load(session: Session) -> Self {
        let user = load_current_user(&session).await;
        Self { session, user }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Sign a user in, replacing whoever was signed in before.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn login(&mut self, user: CurrentUser) -> Result<(), tower_sessions::session::Error> {
        // New identity, new session id
        self.session.cycle_id().await?;
        self.session
            .insert(session_keys::CURRENT_USER, &user)
            .await?;
        set_sentry_user(&user.id, Some(&user.email));
        tracing::info!(user_id = %user.id, "User signed in");
        self.user = Some(user);
        Ok(())
    }

    /// Sign the current user out.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn logout(&mut self) -> Result<(), tower_sessions::session::Error> {
        self.session
            .remove::<CurrentUser>(session_keys::CURRENT_USER)
            .await?;
        clear_sentry_user();
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        Ok(())
    }
}
