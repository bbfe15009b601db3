//! Contact page and FAQ route handlers.
//!
//! The contact form is a demo: submissions are logged, not delivered.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use navoi_curtain_core::Email;
use navoi_curtain_core::faq::{FAQ_ENTRIES, FaqState};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::views::PageContext;

const MISSING_FIELDS_MESSAGE: &str = "Ism va xabar kiritilishi shart";
const INVALID_EMAIL_MESSAGE: &str = "Email manzili noto'g'ri";

/// Contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Name and message are required; email is optional but must be valid.
    fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        let email = self.email.trim();
        if !email.is_empty() && Email::parse(email).is_err() {
            return Err(INVALID_EMAIL_MESSAGE);
        }
        Ok(())
    }
}

/// Contact page query.
#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    pub faq: Option<String>,
}

/// A FAQ entry as rendered.
#[derive(Clone)]
pub struct FaqItemView {
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub icon: &'static str,
    pub href: String,
}

fn faq_items(state: FaqState) -> Vec<FaqItemView> {
    FAQ_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| FaqItemView {
            index,
            question: entry.question,
            answer: entry.answer,
            open: state.is_open(index),
            icon: state.icon(index),
            href: state.toggle_href(index),
        })
        .collect()
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub faqs: Vec<FaqItemView>,
    pub form: ContactForm,
    pub error: Option<&'static str>,
    pub success: bool,
}

/// Display the contact page.
#[instrument(skip(page))]
pub async fn show(page: PageContext, Query(query): Query<ContactQuery>) -> ContactTemplate {
    ContactTemplate {
        page,
        faqs: faq_items(FaqState::from_param(query.faq.as_deref())),
        form: ContactForm::default(),
        error: None,
        success: false,
    }
}

/// Handle contact form submission.
#[instrument(skip(page, form))]
pub async fn submit(page: PageContext, Form(form): Form<ContactForm>) -> Response {
    let faqs = faq_items(FaqState::default());
    match form.validate() {
        Ok(()) => {
            tracing::info!(
                message_len = form.message.trim().chars().count(),
                has_email = !form.email.trim().is_empty(),
                has_phone = !form.phone.trim().is_empty(),
                "Contact message received"
            );
            ContactTemplate {
                page,
                faqs,
                form: ContactForm::default(),
                error: None,
                success: true,
            }
            .into_response()
        }
        Err(error) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                page,
                faqs,
                form,
                error: Some(error),
                success: false,
            },
        )
            .into_response(),
    }
}
