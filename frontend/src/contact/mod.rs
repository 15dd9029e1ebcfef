pub mod contact_form;
pub mod contact_view;
pub mod runtime;
pub mod status_text;
pub mod transport;
