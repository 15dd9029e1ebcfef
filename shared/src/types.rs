use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_MESSAGE, FIELD_SUBJECT, FIELD_USER_EMAIL, FIELD_USER_NAME};
use crate::utils::sanitize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormField {
    UserEmail,
    UserName,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::UserEmail,
        FormField::UserName,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::UserEmail => FIELD_USER_EMAIL,
            FormField::UserName => FIELD_USER_NAME,
            FormField::Subject => FIELD_SUBJECT,
            FormField::Message => FIELD_MESSAGE,
        }
    }
}

/// Values of the contact dialog as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub user_email: String,
    pub user_name: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::UserEmail => &self.user_email,
            FormField::UserName => &self.user_name,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::UserEmail => &mut self.user_email,
            FormField::UserName => &mut self.user_name,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Markup-free copy of every field. `self` is left untouched.
    pub fn sanitized(&self) -> ContactMessage {
        ContactMessage {
            user_email: sanitize(&self.user_email),
            user_name: sanitize(&self.user_name),
            subject: sanitize(&self.subject),
            message: sanitize(&self.message),
        }
    }
}

/// Sanitized field set handed to the delivery transport.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub user_email: String,
    pub user_name: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
    Timeout,
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        *self == SubmissionStatus::Sending
    }

    /// `Error` and `Timeout` fall back to `Idle` on their own.
    pub fn reverts(&self) -> bool {
        matches!(self, SubmissionStatus::Error | SubmissionStatus::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_the_named_field() {
        for field in FormField::ALL {
            let mut state = FormState {
                user_email: "a@b.c".to_string(),
                user_name: "Otto".to_string(),
                subject: "hi".to_string(),
                message: "hello there".to_string(),
            };
            let before = state.clone();
            state.set(field, "changed".to_string());

            assert_eq!(state.get(field), "changed");
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(state.get(other), before.get(other));
            }
        }
    }

    #[test]
    fn sanitized_copy_leaves_state_alone() {
        let state = FormState {
            message: "<b>bold</b> words".to_string(),
            ..FormState::default()
        };
        let clean = state.sanitized();

        assert_eq!(clean.message, "bold words");
        assert_eq!(state.message, "<b>bold</b> words");
    }

    #[test]
    fn default_state_is_empty_and_idle() {
        assert!(FormState::default().is_empty());
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(SubmissionStatus::Timeout.reverts());
        assert!(!SubmissionStatus::Success.reverts());
    }
}
