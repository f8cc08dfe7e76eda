//! Dedicated transitions for the Message actor.

/// Fixed state changes for a [`Message`](crate::model::Message).
///
/// Both only ever set their flag. Clearing `is_read` or `replied` is a general update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTransition {
    MarkRead,
    MarkReplied,
}
