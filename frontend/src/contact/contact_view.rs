use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::map_ref;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen_futures::spawn_local;

use shared::constants::{FIELD_HONEYPOT, FIELD_MAX_CHARS, FIELD_MIN_CHARS, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS};
use shared::types::{FormField, SubmissionStatus};

use crate::constants::{EMAIL_PATTERN, PROP_ARIA_HIDDEN, PROP_AUTOCOMPLETE, PROP_MAX_LENGTH, PROP_MIN_LENGTH, PROP_NAME, PROP_PATTERN, PROP_PLACEHOLDER, PROP_REQUIRED, PROP_TAB_INDEX, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_LABEL, TAG_P, TAG_SPAN, TAG_TEXTAREA};
use crate::contact::contact_form::{ContactForm, SubmitOutcome};
use crate::contact::status_text::{status_detail, status_title};
use crate::dialog::modal::modal_frame;
use crate::utils::{alert, value_from_target};

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Email,
    Text,
    Textarea,
}

fn css_class(label: &str) -> String {
    format!("contact-form__{label}")
}

/// The contact dialog, present only while the modal is open.
pub fn contact_dialog(form: Rc<ContactForm>) -> impl Signal<Item=Option<Dom>> {
    let is_open = form.modal().signal();
    is_open.map(move |open| if open { Some(dialog(form.clone())) } else { None })
}

fn dialog(form: Rc<ContactForm>) -> Dom {
    let status = form.status.signal();
    let submitted = form.submitted.signal();
    let title = map_ref! {
        let status = status,
        let submitted = submitted => status_title(*status, *submitted)
    };

    let body = html!(TAG_DIV, {
        .class(css_class("container"))
        .child_signal(body_signal(form.clone()))
        .after_removed({
            let form = form.clone();
            move |_| form.close_session()
        })
    });

    modal_frame(form.modal(), title, body)
}

fn body_signal(form: Rc<ContactForm>) -> impl Signal<Item=Option<Dom>> {
    let status = form.status.signal();
    let submitted = form.submitted.signal();
    map_ref! {
        let status = status,
        let submitted = submitted => (*status, *submitted)
    }.map(move |(status, submitted)| Some(body(&form, status, submitted)))
}

fn body(form: &Rc<ContactForm>, status: SubmissionStatus, submitted: bool) -> Dom {
    match status {
        SubmissionStatus::Sending => spinner(),
        SubmissionStatus::Success | SubmissionStatus::Error | SubmissionStatus::Timeout => {
            html!(TAG_P, {
                .class(css_class("detail"))
                .text(status_detail(status).unwrap_or_default())
            })
        }
        SubmissionStatus::Idle if submitted => already_sent(form),
        SubmissionStatus::Idle => form_view(form),
    }
}

fn spinner() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("spinner"))
        .attr("role", "status")
        .child(html!(TAG_SPAN, {
            .class(css_class("spinner-label"))
            .text("Sending...")
        }))
    })
}

fn already_sent(form: &Rc<ContactForm>) -> Dom {
    let modal = form.modal().clone();
    html!(TAG_DIV, {
        .class(css_class("sent"))
        .children([
            html!(TAG_P, {
                .class(css_class("quote"))
                .text("'One message should be enough for everyone'")
            }),
            html!(TAG_P, {
                .class(css_class("quote-author"))
                .text("- probably not Bill Gates")
            }),
            html!(TAG_BUTTON, {
                .class(css_class("secondary"))
                .attr(PROP_TYPE, "button")
                .text("Okay")
                .event(move |_: events::Click| {
                    modal.toggle();
                })
            }),
        ])
    })
}

fn form_view(form: &Rc<ContactForm>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("form"))
        .attr(PROP_AUTOCOMPLETE, "off")
        .children([
            html!(TAG_DIV, {
                .class(css_class("row"))
                .children([
                    field(form, FormField::UserEmail, "Email address*", FieldKind::Email),
                    field(form, FormField::UserName, "Name", FieldKind::Text),
                ])
            }),
            field(form, FormField::Subject, "Subject", FieldKind::Text),
            field(form, FormField::Message, "Message* (max 256 characters)", FieldKind::Textarea),
            honeypot(form),
            html!(TAG_P, {
                .class(css_class("hint"))
                .text("*Required fields")
            }),
            html!(TAG_DIV, {
                .class(css_class("buttons"))
                .children([send_button(form), cancel_button(form)])
            }),
        ])
    })
}

fn field(form: &Rc<ContactForm>, field: FormField, label: &str, kind: FieldKind) -> Dom {
    let id = format!("floating_{}", field.name());
    let value = form.fields.signal_ref(move |fields| fields.get(field).to_string());
    let (tag, max_chars, min_chars) = match kind {
        FieldKind::Textarea => (TAG_TEXTAREA, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS),
        FieldKind::Email | FieldKind::Text => (TAG_INPUT, FIELD_MAX_CHARS, FIELD_MIN_CHARS),
    };
    let form = form.clone();

    html!(TAG_DIV, {
        .class(css_class("field"))
        .children([
            html!(tag, {
                .class(css_class("input"))
                .attr("id", &id)
                .attr(PROP_NAME, field.name())
                .attr(PROP_PLACEHOLDER, " ")
                .attr(PROP_MAX_LENGTH, &max_chars.to_string())
                .attr(PROP_MIN_LENGTH, &min_chars.to_string())
                .apply(|dom| match kind {
                    FieldKind::Email => dom
                        .attr(PROP_TYPE, "email")
                        .attr(PROP_PATTERN, EMAIL_PATTERN)
                        .attr(PROP_TITLE, "Please enter a valid email address"),
                    FieldKind::Text => dom
                        .attr(PROP_TYPE, "text")
                        .attr(PROP_TITLE, &format!("{label} must be at least {FIELD_MIN_CHARS} characters long")),
                    FieldKind::Textarea => dom.attr("rows", "4"),
                })
                .apply_if(kind != FieldKind::Text, |dom| dom.attr(PROP_REQUIRED, ""))
                .prop_signal(PROP_VALUE, value)
                .event(move |e: events::Input| {
                    form.on_field_change(field, value_from_target(e.target()));
                })
            }),
            html!(TAG_LABEL, {
                .class(css_class("label"))
                .attr("for", &id)
                .text(label)
            }),
        ])
    })
}

// off-screen rather than display:none, so form-filling bots still see it
fn honeypot(form: &Rc<ContactForm>) -> Dom {
    let form = form.clone();
    html!(TAG_INPUT, {
        .class(css_class("honeypot"))
        .attr(PROP_TYPE, "text")
        .attr(PROP_NAME, FIELD_HONEYPOT)
        .attr(PROP_TAB_INDEX, "-1")
        .attr(PROP_AUTOCOMPLETE, "off")
        .attr(PROP_ARIA_HIDDEN, "true")
        .style("position", "absolute")
        .style("left", "-10000px")
        .event(move |e: events::Input| {
            form.on_honeypot_change(value_from_target(e.target()));
        })
    })
}

fn send_button(form: &Rc<ContactForm>) -> Dom {
    let form = form.clone();
    html!(TAG_BUTTON, {
        .class(css_class("primary"))
        .attr(PROP_TYPE, "button")
        .text("Send")
        .event(move |_: events::Click| {
            handle_submit(form.clone());
        })
    })
}

fn cancel_button(form: &Rc<ContactForm>) -> Dom {
    let form = form.clone();
    html!(TAG_BUTTON, {
        .class(css_class("secondary"))
        .attr(PROP_TYPE, "button")
        .text("Cancel")
        .event(move |_: events::Click| {
            if !form.cancel() {
                log::info!("contact: cancel ignored while sending");
            }
        })
    })
}

fn handle_submit(form: Rc<ContactForm>) {
    spawn_local(async move {
        match form.submit().await {
            SubmitOutcome::Rejected(err) => alert(&err.to_string()),
            SubmitOutcome::Settled(status) => log::info!("contact: settled as {:?}", status),
            outcome => log::debug!("contact: {:?}", outcome),
        }
    });
}
