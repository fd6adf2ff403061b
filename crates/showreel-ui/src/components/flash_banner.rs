//! Flash Banner Component
//!
//! Single flash notification with a manual close button. The exiting phase
//! swaps the slide-out animation class; removal itself is the board's job.

use dioxus::prelude::*;
use showreel_core::{FlashMessage, FlashPhase};

/// Properties for the FlashBanner component
#[derive(Clone, PartialEq, Props)]
pub struct FlashBannerProps {
    /// The message to display
    pub message: FlashMessage,
    /// Handler called with the message id when the close button is clicked
    pub on_dismiss: EventHandler<u64>,
}

/// Class list for a banner in the given phase. The exiting class carries
/// the slide-out animation.
fn banner_class(phase: FlashPhase) -> &'static str {
    match phase {
        FlashPhase::Shown => "flash-message",
        FlashPhase::Exiting => "flash-message exiting",
    }
}

/// Displays one flash message
#[component]
pub fn FlashBanner(props: FlashBannerProps) -> Element {
    let id = props.message.id;

    rsx! {
        div {
            class: banner_class(props.message.phase),
            role: "status",
            span { class: "flash-text", "{props.message.text}" }
            button {
                class: "flash-close",
                r#type: "button",
                "aria-label": "Dismiss",
                onclick: move |_| props.on_dismiss.call(id),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exiting_phase_selects_the_slide_out_class() {
        assert_eq!(banner_class(FlashPhase::Shown), "flash-message");
        assert_eq!(banner_class(FlashPhase::Exiting), "flash-message exiting");
    }
}
