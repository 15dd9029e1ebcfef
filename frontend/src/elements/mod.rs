pub mod app_about;
pub mod app_header;
pub mod app_root;
