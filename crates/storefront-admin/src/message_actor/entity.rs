//! [`ResourceEntity`] implementation for [`Message`].

use super::{MessageError, MessageTransition};
use crate::model::{Message, MessageDraft, MessageId, MessagePatch};
use chrono::Utc;
use resource_actor::ResourceEntity;

impl ResourceEntity for Message {
    const KIND: &'static str = "Message";

    type Id = MessageId;
    type Create = MessageDraft;
    type Update = MessagePatch;
    type Transition = MessageTransition;
    type Error = MessageError;

    fn id(&self) -> &MessageId {
        &self.id
    }

    /// Stamps `created_at` and starts the message unread and unreplied.
    fn from_create_params(id: MessageId, draft: MessageDraft) -> Result<Self, MessageError> {
        Ok(Self {
            id,
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            is_read: false,
            replied: false,
            created_at: Utc::now(),
        })
    }

    // `created_at` has no patch field, so it can never move.
    fn on_update(&mut self, patch: MessagePatch) -> Result<(), MessageError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(is_read) = patch.is_read {
            self.is_read = is_read;
        }
        if let Some(replied) = patch.replied {
            self.replied = replied;
        }
        Ok(())
    }

    fn apply_transition(&mut self, transition: MessageTransition) -> Result<(), MessageError> {
        match transition {
            MessageTransition::MarkRead => self.is_read = true,
            MessageTransition::MarkReplied => self.replied = true,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Message {
        Message::from_create_params(
            MessageId(1),
            MessageDraft {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: Some("Shipping".into()),
                message: "Do you ship abroad?".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_message_starts_unread_and_unreplied() {
        let before = Utc::now();
        let message = inquiry();
        assert!(!message.is_read);
        assert!(!message.replied);
        assert!(message.created_at >= before);
        assert!(message.created_at <= Utc::now());
    }

    #[test]
    fn test_transitions_only_set_their_own_flag() {
        let mut message = inquiry();
        message.apply_transition(MessageTransition::MarkReplied).unwrap();
        assert!(message.replied);
        assert!(!message.is_read);

        message.apply_transition(MessageTransition::MarkRead).unwrap();
        message.apply_transition(MessageTransition::MarkRead).unwrap();
        assert!(message.is_read);
    }

    #[test]
    fn test_update_clears_flags_and_keeps_created_at() {
        let mut message = inquiry();
        message.is_read = true;
        message.replied = true;
        let created_at = message.created_at;

        message
            .on_update(MessagePatch {
                is_read: Some(false),
                replied: Some(false),
                subject: Some(None),
                ..MessagePatch::default()
            })
            .unwrap();

        assert!(!message.is_read);
        assert!(!message.replied);
        assert_eq!(message.subject, None);
        assert_eq!(message.created_at, created_at);
        assert_eq!(message.email, "ada@example.com");
    }
}
