use std::rc::Rc;

use dominator::{Dom, html};

use crate::config::{ContactSettings, TransportConfig, TransportKind};
use crate::constants::{SITE_TAG, TAG_DIV};
use crate::contact::contact_form::ContactForm;
use crate::contact::contact_view::contact_dialog;
use crate::contact::runtime::{BrowserRuntime, Runtime};
use crate::contact::transport::build_transport;
use crate::elements::app_about::app_about;
use crate::elements::app_header::app_header;
use crate::state::use_modal;
use crate::utils::set_title;

pub fn app_root() -> Dom {
    set_title(SITE_TAG);
    let form = Rc::new(contact_form());
    html!(TAG_DIV, {
        .class("app-root")
        .children([app_header(), app_about(form.clone())])
        .child_signal(contact_dialog(form))
    })
}

fn contact_form() -> ContactForm {
    let runtime: Rc<dyn Runtime> = Rc::new(BrowserRuntime);
    let transport = build_transport(TransportKind::from_env(), TransportConfig::from_env(), runtime.clone());
    ContactForm::new(use_modal(), ContactSettings::default(), runtime, transport)
}
