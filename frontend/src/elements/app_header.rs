use dominator::{Dom, html};

use crate::constants::{SITE_TAG, TAG_DIV};

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("tag"))
            .text(SITE_TAG)
        }))
    })
}
