use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use portfolio_contact::{
    ContactForm, EMAIL_MAX, MESSAGE_MAX, MESSAGE_MIN, NAME_MAX, NAME_MIN, Notification,
    SUBJECT_MAX, SUBJECT_MIN, SubmitOutcome, UNEXPECTED_FAILURE_MESSAGE,
};

use crate::{routes::AppState, template::Template};

/// Field constraints mirrored into the form markup, so the browser applies
/// the same rules before the request leaves.
pub struct Limits {
    pub name_min: usize,
    pub name_max: usize,
    pub email_max: usize,
    pub subject_min: usize,
    pub subject_max: usize,
    pub message_min: usize,
    pub message_max: usize,
}

pub const LIMITS: Limits = Limits {
    name_min: NAME_MIN,
    name_max: NAME_MAX,
    email_max: EMAIL_MAX,
    subject_min: SUBJECT_MIN,
    subject_max: SUBJECT_MAX,
    message_min: MESSAGE_MIN,
    message_max: MESSAGE_MAX,
};

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "sagarpandey.in@gmail.com",
        href: "mailto:sagarpandey.in@gmail.com",
    },
    ContactInfo {
        label: "Phone",
        value: "+91 6280804215",
        href: "tel:+916280804215",
    },
    ContactInfo {
        label: "Location",
        value: "Bhagalpur, Bihar, India",
        href: "https://maps.google.com/?q=Bhagalpur,Bihar,India",
    },
];

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_path: &'static str,
    pub contact_info: &'static [ContactInfo],
    pub form: ContactForm,
    pub limits: Limits,
    pub toast: Option<Notification>,
    /// Shown by the page script when the request itself fails.
    pub failure_message: &'static str,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactForm,
    pub limits: Limits,
    pub toast: Option<Notification>,
    /// Shown by the page script when the request itself fails.
    pub failure_message: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        current_path: "contact",
        contact_info: CONTACT_INFO,
        form: ContactForm::new(),
        limits: LIMITS,
        toast: None,
        failure_message: UNEXPECTED_FAILURE_MESSAGE,
    })
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(mut form): Form<ContactForm>,
) -> impl IntoResponse {
    let toast = match form.submit(&app_state.gateway).await {
        SubmitOutcome::Completed(notification) => Some(notification),
        SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => None,
    };

    if template.is_partial() {
        return template.render(ContactFormTemplate {
            form,
            limits: LIMITS,
            toast,
            failure_message: UNEXPECTED_FAILURE_MESSAGE,
        });
    }

    template.render(ContactTemplate {
        current_path: "contact",
        contact_info: CONTACT_INFO,
        form,
        limits: LIMITS,
        toast,
        failure_message: UNEXPECTED_FAILURE_MESSAGE,
    })
}
