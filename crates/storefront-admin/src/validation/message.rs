//! Message schema: `name`, `email` and `message` required, `subject` optional.
//!
//! `email` is trimmed and lower-cased before it is matched against [`EMAIL_PATTERN`].

use super::{FieldReader, ValidationErrors};
use crate::model::{MessageDraft, MessagePatch};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

const KIND: &str = "Message";

/// Accepted email shape: dotted local part, dotted domain, 2-7 letter top-level domain.
pub const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*@(?:[A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

const INVALID_EMAIL: &str = "Please fill a valid email address";

/// Validates a create body.
pub fn create(body: &Value) -> Result<MessageDraft, ValidationErrors> {
    let mut fields = FieldReader::new(KIND, body)?;
    let name = fields.required_text("name", true);
    let email = fields.required_text("email", true);
    let email = email.and_then(|raw| normalize_email(&mut fields, raw));
    let subject = fields.optional_text("subject").flatten();
    let message = fields.required_text("message", false);

    let draft = match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Some(MessageDraft {
            name,
            email,
            subject,
            message,
        }),
        _ => None,
    };
    fields.finish(draft)
}

/// Validates a general update body. `_id` and `createdAt` are ignored.
pub fn patch(body: &Value) -> Result<MessagePatch, ValidationErrors> {
    let mut fields = FieldReader::new(KIND, body)?;
    let name = fields.text_if_present("name", true);
    let email = fields
        .text_if_present("email", true)
        .and_then(|raw| normalize_email(&mut fields, raw));
    let patch = MessagePatch {
        name,
        email,
        subject: fields.optional_text("subject"),
        message: fields.text_if_present("message", false),
        is_read: fields.flag("isRead"),
        replied: fields.flag("replied"),
    };
    fields.finish(Some(patch))
}

fn normalize_email(fields: &mut FieldReader<'_>, raw: String) -> Option<String> {
    let email = raw.to_lowercase();
    if EMAIL.is_match(&email) {
        Some(email)
    } else {
        fields.fail("email", INVALID_EMAIL);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_message_is_accepted() {
        let draft = create(&json!({"name": "A", "email": "a@b.com", "message": "hi"})).unwrap();
        assert_eq!(
            draft,
            MessageDraft {
                name: "A".into(),
                email: "a@b.com".into(),
                subject: None,
                message: "hi".into(),
            }
        );
    }

    #[test]
    fn test_email_is_trimmed_and_lowercased() {
        let draft = create(&json!({
            "name": " Ada ",
            "email": "  Ada.Lovelace@Example.ORG ",
            "subject": "  Order question ",
            "message": "Where is my parcel?"
        }))
        .unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada.lovelace@example.org");
        assert_eq!(draft.subject.as_deref(), Some("Order question"));
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for email in ["not-an-email", "a@b", "a@b.c", "a b@c.com", "@c.com", "a@.com", "a@b.toolongtld"] {
            let err = create(&json!({"name": "A", "email": email, "message": "hi"})).unwrap_err();
            assert!(err.has_field("email"), "{email} should be rejected");
            assert_eq!(
                err.to_string(),
                "Message validation failed: email: Please fill a valid email address"
            );
        }
    }

    #[test]
    fn test_accepted_email_shapes() {
        for email in ["first.last@shop.co.uk", "x_y-z@mail-host.io", "A1@B2.Travel"] {
            assert!(
                create(&json!({"name": "A", "email": email, "message": "hi"})).is_ok(),
                "{email} should be accepted"
            );
        }
    }

    #[test]
    fn test_required_fields_are_reported_together() {
        let err = create(&json!({"subject": "hello"})).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("email"));
        assert!(err.has_field("message"));
    }

    #[test]
    fn test_message_body_is_kept_verbatim() {
        let draft = create(&json!({"name": "A", "email": "a@b.com", "message": "  spaced  "})).unwrap();
        assert_eq!(draft.message, "  spaced  ");
    }

    #[test]
    fn test_whitespace_message_counts_as_present() {
        let draft = create(&json!({"name": "A", "email": "a@b.com", "message": "   "})).unwrap();
        assert_eq!(draft.message, "   ");

        let err = create(&json!({"name": "A", "email": "a@b.com", "message": ""})).unwrap_err();
        assert!(err.has_field("message"));
        let err = create(&json!({"name": "  ", "email": "a@b.com", "message": "hi"})).unwrap_err();
        assert!(err.has_field("name"));
    }

    #[test]
    fn test_patch_flags_and_immutable_keys() {
        let patch = patch(&json!({
            "isRead": false,
            "replied": true,
            "createdAt": "1999-01-01T00:00:00Z",
            "_id": "message_40"
        }))
        .unwrap();
        assert_eq!(
            patch,
            MessagePatch {
                is_read: Some(false),
                replied: Some(true),
                ..MessagePatch::default()
            }
        );
    }

    #[test]
    fn test_patch_normalizes_and_checks_email() {
        let ok = patch(&json!({"email": " NEW@Mail.com "})).unwrap();
        assert_eq!(ok.email.as_deref(), Some("new@mail.com"));

        let err = patch(&json!({"email": "nope"})).unwrap_err();
        assert!(err.has_field("email"));
    }
}
