//! Demo sign-in route handlers.
//!
//! Login accepts any non-empty credentials and registration only checks the
//! password confirmation. See `navoi_curtain_core::auth`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use navoi_curtain_core::auth::{LoginForm, RegisterForm};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::UserStore;
use crate::middleware::flash::push_notification;
use crate::models::Notification;
use crate::views::PageContext;

/// Shown after logging out.
pub const LOGGED_OUT_MESSAGE: &str = "Tizimdan chiqdingiz";

/// Delay before the login success page moves on, as a `refresh` value.
const LOGIN_REFRESH: &str = "1.5;url=/";

/// Delay before the register success page moves on, as a `refresh` value.
const REGISTER_REFRESH: &str = "2;url=/login";

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub username: String,
    pub error: Option<String>,
    pub success: bool,
    pub refresh: Option<&'static str>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub page: PageContext,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub error: Option<String>,
    pub success: bool,
    pub refresh: Option<&'static str>,
}

impl RegisterTemplate {
    fn with_form(page: PageContext, form: &RegisterForm) -> Self {
        Self {
            page,
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            error: None,
            success: false,
            refresh: None,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display login page.
#[instrument(skip(page))]
pub async fn login_page(page: PageContext) -> LoginTemplate {
    LoginTemplate {
        page,
        username: String::new(),
        error: None,
        success: false,
        refresh: None,
    }
}

/// Handle login form submission.
#[instrument(skip(session, users, form))]
pub async fn login(
    session: Session,
    mut users: UserStore,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match form.authenticate() {
        Ok(user) => {
            users.login(user).await?;
            Ok(LoginTemplate {
                page: PageContext::load(&session).await,
                username: String::new(),
                error: None,
                success: true,
                refresh: Some(LOGIN_REFRESH),
            }
            .into_response())
        }
        Err(e) => {
            tracing::debug!("Login rejected: {e}");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                LoginTemplate {
                    page: PageContext::load(&session).await,
                    username: form.username,
                    error: Some(e.to_string()),
                    success: false,
                    refresh: None,
                },
            )
                .into_response())
        }
    }
}

/// Display registration page.
#[instrument(skip(page))]
pub async fn register_page(page: PageContext) -> RegisterTemplate {
    RegisterTemplate::with_form(page, &RegisterForm::default())
}

/// Handle registration form submission.
///
/// Nothing is stored; a matching confirmation simply reports success.
#[instrument(skip(page, form))]
pub async fn register(page: PageContext, Form(form): Form<RegisterForm>) -> Response {
    let mut template = RegisterTemplate::with_form(page, &form);
    match form.validate() {
        Ok(()) => {
            tracing::info!("Demo registration accepted");
            template.success = true;
            template.refresh = Some(REGISTER_REFRESH);
            template.into_response()
        }
        Err(e) => {
            template.error = Some(e.to_string());
            (StatusCode::UNPROCESSABLE_ENTITY, template).into_response()
        }
    }
}

/// Handle logout.
#[instrument(skip(session, users))]
pub async fn logout(session: Session, mut users: UserStore) -> Result<Redirect> {
    users.logout().await?;
    push_notification(&session, Notification::success(LOGGED_OUT_MESSAGE)).await?;
    Ok(Redirect::to("/"))
}
