//! Card Gallery Component
//!
//! The portfolio section: filter pills over the video grid. A single
//! `Filter` signal holds the active selection, so exactly one pill is
//! active after any click and the last click wins.

use dioxus::prelude::*;
use showreel_core::Filter;
use showreel_ui::FilterPills;

use crate::components::VideoCard;
use crate::context::use_content;

/// Filterable portfolio grid
#[component]
pub fn CardGallery() -> Element {
    let content = use_content();
    let mut active = use_signal(Filter::default);

    let categories = content.read().categories();
    let videos = content.read().videos.clone();
    let filter = active.read().clone();

    rsx! {
        section { id: "portfolio", class: "portfolio-section",
            h2 { class: "section-header", "Portfolio" }

            FilterPills {
                categories,
                selected: filter.clone(),
                on_select: move |selected| active.set(selected),
            }

            div { class: "video-grid",
                for video in videos {
                    VideoCard {
                        key: "{video.public_id}",
                        visible: filter.matches(video.category.as_deref()),
                        video,
                    }
                }
            }
        }
    }
}
