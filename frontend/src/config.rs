use shared::constants::{CLOSE_DELAY_MS, SEND_TIMEOUT_MS, STATUS_REVERT_MS};

/// EmailJS identifiers, baked in at build time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl TransportConfig {
    pub fn from_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or_default().to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or_default().to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or_default().to_string(),
        }
    }

    /// Name of the first identifier that is not set.
    pub fn missing(&self) -> Option<&'static str> {
        [
            ("EMAILJS_SERVICE_ID", &self.service_id),
            ("EMAILJS_TEMPLATE_ID", &self.template_id),
            ("EMAILJS_PUBLIC_KEY", &self.public_key),
        ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    EmailJs,
    Mock,
}

impl TransportKind {
    pub fn from_env() -> Self {
        match option_env!("CONTACT_TRANSPORT") {
            Some("mock") => TransportKind::Mock,
            _ => TransportKind::EmailJs,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactSettings {
    pub timeout_ms: u32,
    pub revert_ms: u32,
    pub close_ms: u32,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            timeout_ms: SEND_TIMEOUT_MS,
            revert_ms: STATUS_REVERT_MS,
            close_ms: CLOSE_DELAY_MS,
        }
    }
}
