use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

super::sequence_id!(
    /// Store-assigned identifier for contact messages, rendered `message_<n>`.
    MessageId,
    "message",
    "Message"
);

/// A contact form submission.
///
/// `email` is always stored trimmed and lower-cased; `created_at` is stamped once by the
/// store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: MessageId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub replied: bool,
    pub created_at: DateTime<Utc>,
}

/// A validated submission ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Partial field set for the general update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessagePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<Option<String>>,
    pub message: Option<String>,
    pub is_read: Option<bool>,
    pub replied: Option<bool>,
}
