pub const SEND_TIMEOUT_MS: u32 = 9000;
pub const STATUS_REVERT_MS: u32 = 3000;
pub const CLOSE_DELAY_MS: u32 = 2000;

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 256;
pub const FIELD_MIN_CHARS: usize = 3;
pub const FIELD_MAX_CHARS: usize = 50;

pub static FIELD_USER_EMAIL: &'static str = "user_email";
pub static FIELD_USER_NAME: &'static str = "user_name";
pub static FIELD_SUBJECT: &'static str = "subject";
pub static FIELD_MESSAGE: &'static str = "message";
pub static FIELD_HONEYPOT: &'static str = "honeypot";

pub static EMAILJS_API: &'static str = "https://api.emailjs.com/api/v1.0/email/send";
