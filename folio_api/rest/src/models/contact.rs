use folio_models::contact::{
    ContactEmail, ContactMessageBody, ContactName, ContactPhone, ContactSubmission,
};
use serde::Deserialize;

/// The form-encoded submission payload.
///
/// Every field defaults to the empty string so that a missing required
/// field reaches the presence check (and its fixed 400 response) instead
/// of failing extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub first_name: ContactName,
    #[serde(default)]
    pub last_name: ContactName,
    #[serde(default)]
    pub phone: ContactPhone,
    #[serde(default)]
    pub email: ContactEmail,
    #[serde(default)]
    pub message: ContactMessageBody,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            email: value.email,
            message: value.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn field_names_are_camel_case() {
        let value = json!({
            "firstName": "Ana",
            "lastName": "Khan",
            "phone": "+921234567890",
            "email": "ana@example.com",
            "message": "Hi",
        });

        let submission: ContactSubmission =
            serde_json::from_value::<ApiContactSubmission>(value).unwrap().into();

        assert_eq!(submission.first_name.as_str(), "Ana");
        assert_eq!(submission.last_name.as_str(), "Khan");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let value = json!({
            "firstName": "Ana",
            "email": "ana@example.com",
            "message": "Hi",
        });

        let submission: ContactSubmission =
            serde_json::from_value::<ApiContactSubmission>(value).unwrap().into();

        assert_eq!(submission.last_name.as_str(), "");
        assert_eq!(submission.phone.as_str(), "");
        assert!(submission.missing_fields().is_empty());
    }

    #[test]
    fn missing_required_fields_still_decode() {
        let submission: ContactSubmission =
            serde_json::from_value::<ApiContactSubmission>(json!({})).unwrap().into();

        assert_eq!(submission.missing_fields().len(), 3);
    }
}
