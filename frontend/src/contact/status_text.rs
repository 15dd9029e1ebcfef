use shared::types::SubmissionStatus;

pub fn status_title(status: SubmissionStatus, submitted: bool) -> &'static str {
    if submitted {
        return "Thanks for getting in touch!";
    }
    match status {
        SubmissionStatus::Idle => "Send me a message",
        SubmissionStatus::Sending => "Sending your message...",
        SubmissionStatus::Success => "Message sent!",
        SubmissionStatus::Error => "Something went wrong",
        SubmissionStatus::Timeout => "Request timed out",
    }
}

/// Body line shown instead of the form. `None` while the form is editable.
pub fn status_detail(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        SubmissionStatus::Success => Some("Thank you for reaching out. I will get back to you soon."),
        SubmissionStatus::Error => Some("Failed to send your message, please try again."),
        SubmissionStatus::Timeout => Some("Please check your connection status and try again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_title_wins() {
        assert_eq!(status_title(SubmissionStatus::Idle, true), "Thanks for getting in touch!");
        assert_eq!(status_title(SubmissionStatus::Timeout, false), "Request timed out");
    }

    #[test]
    fn form_visible_only_when_editable() {
        assert!(status_detail(SubmissionStatus::Idle).is_none());
        assert!(status_detail(SubmissionStatus::Sending).is_none());
        assert!(status_detail(SubmissionStatus::Error).is_some());
    }
}
