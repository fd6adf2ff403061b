//! Navigation Header Component
//!
//! Desktop: horizontal header with the site title and section links.
//! Narrow windows: the links collapse behind a hamburger trigger; trigger
//! and panel share one open flag, so their active markers always move in
//! lockstep. Clicking any link closes the menu and smooth-scrolls to the
//! section.

use dioxus::prelude::*;
use showreel_core::{NavMenu, SiteSection};

use crate::components::scroll_to_anchor;
use crate::context::use_content;

/// Navigation header with hamburger toggle
#[component]
pub fn NavHeader() -> Element {
    let content = use_content();
    let mut menu = use_signal(NavMenu::new);

    let owner = content.read().owner.clone();
    let open = menu.read().is_open();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                a {
                    class: "nav-brand",
                    href: SiteSection::Home.href(),
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_anchor(&SiteSection::Home.href());
                    },
                    "{owner}"
                }

                button {
                    class: if open { "hamburger active" } else { "hamburger" },
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{open}",
                    onclick: move |_| menu.write().toggle(),

                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }

                nav { class: if open { "nav-menu active" } else { "nav-menu" },
                    for section in SiteSection::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            href: section.href(),
                            onclick: move |evt| {
                                evt.prevent_default();
                                menu.write().close();
                                scroll_to_anchor(&section.href());
                            },
                            "{section.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
