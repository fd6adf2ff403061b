//! Video Card Component
//!
//! One gallery entry. Hidden cards stay in the tree with `display: none`;
//! becoming visible re-triggers the fade-in animation on every filter
//! change because the display toggle restarts it.

use dioxus::prelude::*;
use showreel_core::Video;

use crate::components::reveal_class;
use crate::context::use_reveal;

/// Properties for the VideoCard component
#[derive(Clone, PartialEq, Props)]
pub struct VideoCardProps {
    pub video: Video,
    /// Whether the active filter shows this card
    pub visible: bool,
}

/// Displays a single portfolio video
#[component]
pub fn VideoCard(props: VideoCardProps) -> Element {
    let reveal = use_reveal();
    let dom_id = props.video.dom_id();
    let class = reveal_class(&reveal, "video-card", &dom_id);
    let date = props.video.created_at.format("%B %Y");

    rsx! {
        article {
            id: "{dom_id}",
            class: "{class}",
            style: if props.visible {
                "display: block; animation: fadeIn 0.5s ease-in;"
            } else {
                "display: none;"
            },

            video {
                class: "video-embed",
                src: "{props.video.url}",
                controls: true,
                preload: "metadata",
            }

            div { class: "video-meta",
                h3 { class: "video-title", "{props.video.title}" }
                div { class: "video-tags",
                    if let Some(ref category) = props.video.category {
                        span { class: "video-category", "{category}" }
                    }
                    span { class: "video-date", "{date}" }
                }
            }
        }
    }
}
