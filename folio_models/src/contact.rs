use nutype::nutype;

/// One contact-form attempt carrying the five submitted fields.
///
/// Presence of the required fields (`first_name`, `email`, `message`) is
/// checked by the contact feature, not by these types: a submission decoded
/// from the wire may carry blank values and must still map to the fixed
/// 400 response instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub phone: ContactPhone,
    pub email: ContactEmail,
    pub message: ContactMessageBody,
}

impl ContactSubmission {
    /// Names of the required fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push(ContactField::FirstName);
        }
        if self.email.trim().is_empty() {
            missing.push(ContactField::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(ContactField::Message);
        }
        missing
    }
}

/// The five fields of a submission, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
    Email,
    Message,
}

#[nutype(
    validate(len_char_max = 100),
    default = "",
    derive(Debug, Clone, Default, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(len_char_max = 20),
    default = "",
    derive(Debug, Clone, Default, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactPhone(String);

#[nutype(
    validate(len_char_max = 254),
    default = "",
    derive(Debug, Clone, Default, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(
    validate(len_char_max = 4096),
    default = "",
    derive(Debug, Clone, Default, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactMessageBody(String);

/// Server-assigned identifier of a persisted submission.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize
))]
pub struct ContactMessageId(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_all_blank() {
        let submission = ContactSubmission::default();
        assert_eq!(
            submission.missing_fields(),
            [
                ContactField::FirstName,
                ContactField::Email,
                ContactField::Message
            ]
        );
    }

    #[test]
    fn missing_fields_whitespace_only() {
        let submission = ContactSubmission {
            first_name: "  ".try_into().unwrap(),
            email: "ana@example.com".try_into().unwrap(),
            message: "Hi".try_into().unwrap(),
            ..Default::default()
        };
        assert_eq!(submission.missing_fields(), [ContactField::FirstName]);
    }

    #[test]
    fn missing_fields_none() {
        let submission = ContactSubmission {
            first_name: "Ana".try_into().unwrap(),
            email: "ana@example.com".try_into().unwrap(),
            message: "Hi".try_into().unwrap(),
            ..Default::default()
        };
        assert!(submission.missing_fields().is_empty());
    }

    #[test]
    fn name_max_length() {
        assert!(ContactName::try_new("a".repeat(100)).is_ok());
        assert!(ContactName::try_new("a".repeat(101)).is_err());
    }
}
