use crate::elements::app_root::app_root;
use crate::state::{provide_modal, ModalState};

mod config;
mod constants;
mod contact;
mod dialog;
mod elements;
mod state;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    provide_modal(ModalState::new());
    dominator::append_dom(&dominator::body(), app_root());
}
