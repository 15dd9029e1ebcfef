use std::rc::Rc;

use dominator::{Dom, events, html};

use crate::constants::{PAGE_TITLE, PHOTO_URL, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_IMG, TAG_P};
use crate::contact::contact_form::ContactForm;

static ABOUT_TEXT: [&str; 5] = [
    "This is my webpage.",
    "There are many like it, but this one is mine.",
    "Something something something about something and I like cats and good music.",
    "I'm beginning to like Tailwind. It's useful and makes CSS less nervewracking than it could be.",
    "Which is nice.",
];

fn css_class(label: &str) -> String {
    format!("app-about__{label}")
}

pub fn app_about(form: Rc<ContactForm>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("title"))
                .text(PAGE_TITLE)
            }),
            html!(TAG_DIV, {
                .class(css_class("content"))
                .children([
                    html!(TAG_DIV, {
                        .class(css_class("text"))
                        .children(ABOUT_TEXT.into_iter().map(|line| html!(TAG_P, {.text(line)})))
                    }),
                    html!(TAG_IMG, {
                        .class(css_class("photo"))
                        .attr("src", PHOTO_URL)
                        .attr("alt", "Portrait")
                    }),
                ])
            }),
            footer(form),
        ])
    })
}

fn footer(form: Rc<ContactForm>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("footer"))
        .child(html!(TAG_BUTTON, {
            .class(css_class("contact"))
            .attr(PROP_TYPE, "button")
            .text("Contact me")
            .event(move |_: events::Click| {
                form.open();
            })
        }))
    })
}
