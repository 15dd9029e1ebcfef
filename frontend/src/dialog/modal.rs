use dominator::{Dom, events, html};
use futures_signals::signal::Signal;

use crate::constants::{PROP_ARIA_LABEL, PROP_TYPE, TAG_BUTTON, TAG_DIV};
use crate::state::ModalState;

fn css_class(label: &str) -> String {
    format!("modal__{label}")
}

/// Backdrop, box, header with title and close button. Closing goes through
/// `ModalState::toggle` like every other visibility change.
pub fn modal_frame<S>(modal: &ModalState, title: S, body: Dom) -> Dom
    where S: Signal<Item=&'static str> + 'static
{
    let modal = modal.clone();
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .children([
                html!(TAG_DIV, {
                    .class(css_class("header"))
                    .children([
                        html!(TAG_DIV, {
                            .class(css_class("title"))
                            .text_signal(title)
                        }),
                        html!(TAG_BUTTON, {
                            .class(css_class("close"))
                            .attr(PROP_TYPE, "button")
                            .attr(PROP_ARIA_LABEL, "close")
                            .text("×")
                            .event(move |_: events::Click| {
                                modal.toggle();
                            })
                        }),
                    ])
                }),
                html!(TAG_DIV, {
                    .class(css_class("body"))
                    .child(body)
                }),
            ])
        }))
    })
}
