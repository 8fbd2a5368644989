use serde::Serialize;

pub mod blog;
pub mod contact;

/// Title/body pair rendered by the client into a status panel.
#[derive(Serialize)]
pub struct ApiMessage {
    pub title: &'static str,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn message_shape() {
        let message = ApiMessage {
            title: "Thank you!",
            body: "I'll get back to you shortly!",
        };

        assert_eq!(
            serde_json::to_value(message).unwrap(),
            json!({"title": "Thank you!", "body": "I'll get back to you shortly!"})
        );
    }
}
