use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Deliberately permissive: anything of the shape `local@domain.tld`
/// passes. The server never re-checks the format, only presence.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// `+92` followed by exactly ten digits.
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+92\d{10}$").unwrap());

/// The values of the five form inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Phone,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldCheckError {
    #[error("{0}")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidFormat(&'static str),
}

impl FieldCheckError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField(message) | Self::InvalidFormat(message) => message,
        }
    }
}

/// One inline error annotation on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub error: FieldCheckError,
}

pub fn check_required(value: &str, message: &'static str) -> Result<(), FieldCheckError> {
    if value.trim().is_empty() {
        Err(FieldCheckError::MissingField(message))
    } else {
        Ok(())
    }
}

pub fn check_email(value: &str) -> Result<(), FieldCheckError> {
    check_required(value, "Email is required")?;
    if !EMAIL_REGEX.is_match(value.trim()) {
        return Err(FieldCheckError::InvalidFormat(
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

/// The phone field is optional; a blank value passes.
pub fn check_phone(value: &str) -> Result<(), FieldCheckError> {
    let value = value.trim();
    if !value.is_empty() && !PHONE_REGEX.is_match(value) {
        return Err(FieldCheckError::InvalidFormat(
            "Please enter a valid phone number (+92xxxxxxxxxx)",
        ));
    }
    Ok(())
}

/// Checks all fields and returns one error per failing field, in display
/// order.
pub fn validate(fields: &FormFields) -> Vec<FieldError> {
    let checks = [
        (
            FormField::FirstName,
            check_required(&fields.first_name, "First name is required"),
        ),
        (FormField::Email, check_email(&fields.email)),
        (
            FormField::Message,
            check_required(&fields.message, "Message is required"),
        ),
        (FormField::Phone, check_phone(&fields.phone)),
    ];

    checks
        .into_iter()
        .filter_map(|(field, result)| result.err().map(|error| FieldError { field, error }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            first_name: "Ana".into(),
            last_name: String::new(),
            phone: String::new(),
            email: "ana@example.com".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn valid_fields_pass() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn missing_required_fields() {
        let errors = validate(&FormFields::default());

        assert_eq!(
            errors
                .iter()
                .map(|x| (x.field, x.error.message()))
                .collect::<Vec<_>>(),
            [
                (FormField::FirstName, "First name is required"),
                (FormField::Email, "Email is required"),
                (FormField::Message, "Message is required"),
            ]
        );
    }

    #[test]
    fn whitespace_is_missing() {
        let errors = validate(&FormFields {
            first_name: "   ".into(),
            ..valid_fields()
        });

        assert_eq!(
            errors,
            [FieldError {
                field: FormField::FirstName,
                error: FieldCheckError::MissingField("First name is required"),
            }]
        );
    }

    #[test]
    fn email_format() {
        for valid in ["a@b.c", "ana@example.com", "a.b+c@mail.example.org"] {
            assert!(check_email(valid).is_ok(), "{valid}");
        }
        for invalid in ["ana", "ana@example", "ana example.com", "@example.com", "a@b."] {
            assert!(
                matches!(check_email(invalid), Err(FieldCheckError::InvalidFormat(_))),
                "{invalid}"
            );
        }
    }

    #[test]
    fn phone_boundaries() {
        // +92 followed by exactly ten digits
        assert!(check_phone("+921234567890").is_ok());
        assert!(check_phone("+92123").is_err());
        assert!(check_phone("+9212345678901").is_err());
        assert!(check_phone("0921234567890").is_err());
        // optional: blank passes
        assert!(check_phone("").is_ok());
        assert!(check_phone("   ").is_ok());
    }
}
