use std::sync::LazyLock;

use folio_models::contact::ContactSubmission;

pub static SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    first_name: "Ana".try_into().unwrap(),
    last_name: "Khan".try_into().unwrap(),
    phone: "+921234567890".try_into().unwrap(),
    email: "ana@example.com".try_into().unwrap(),
    message: "Hi, I would like to get in touch about a project.".try_into().unwrap(),
});

/// The minimal valid submission: only the required fields are set.
pub static MINIMAL_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    first_name: "Ana".try_into().unwrap(),
    email: "ana@example.com".try_into().unwrap(),
    message: "Hi".try_into().unwrap(),
    ..Default::default()
});
