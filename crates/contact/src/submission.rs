use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 100;
pub const SUBJECT_MIN: usize = 5;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

/// A contact form entry.
///
/// This is the only definition of the form contract: the form collector
/// checks it before calling the gateway and the gateway checks it again
/// before anything reaches the mail transport. Missing keys decode to empty
/// strings so a malformed record ends up as a validation failure.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(length(min = (NAME_MIN as u64), max = (NAME_MAX as u64)))]
    pub name: String,
    #[validate(
        email,
        custom(function = "validate_mailbox"),
        length(max = (EMAIL_MAX as u64))
    )]
    pub email: String,
    #[validate(length(min = (SUBJECT_MIN as u64), max = (SUBJECT_MAX as u64)))]
    pub subject: String,
    #[validate(length(min = (MESSAGE_MIN as u64), max = (MESSAGE_MAX as u64)))]
    pub message: String,
}

/// Shapes the `email` rule lets through but the SMTP mailbox parser refuses:
/// dots at either end of the local part, consecutive dots, and `[ip]` domain
/// literals.
fn validate_mailbox(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    if local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
        || domain.starts_with('[')
    {
        return Err(ValidationError::new("email"));
    }

    Ok(())
}

impl ContactSubmission {
    /// Validate and translate failures into messages a visitor can act on.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|errors| self.field_errors(&errors))
    }

    pub fn field_errors(&self, errors: &ValidationErrors) -> FieldErrors {
        let mut fields = FieldErrors::default();

        for (field, errors) in errors.field_errors() {
            let field: &str = field.as_ref();
            for error in errors.iter() {
                fields.insert(field, self.describe(field, error.code.as_ref()));
            }
        }

        fields
    }

    fn describe(&self, field: &str, code: &str) -> String {
        let (label, value, min) = match field {
            "name" => ("Name", &self.name, NAME_MIN),
            "email" => ("Email", &self.email, 0),
            "subject" => ("Subject", &self.subject, SUBJECT_MIN),
            "message" => ("Message", &self.message, MESSAGE_MIN),
            other => return format!("{other} is invalid"),
        };

        match code {
            "email" => "Please enter a valid email address".to_owned(),
            "length" if value.chars().count() < min => {
                format!("{label} must be at least {min} characters")
            }
            "length" => format!("{label} is too long"),
            _ => format!("{label} is invalid"),
        }
    }
}

/// Human readable messages keyed by field name.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// First message reported for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}
