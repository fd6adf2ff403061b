//! Home page - the whole portfolio on one scrollable page.
//!
//! Hero, portfolio gallery with upload form, about, and contact sections,
//! each anchored for smooth scrolling from the header.

use dioxus::prelude::*;
use showreel_core::SiteSection;

use crate::components::{reveal_class, scroll_to_anchor, CardGallery, ContactForm, UploadForm};
use crate::context::{use_content, use_reveal};

/// Single-page portfolio layout
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "site",
            Hero {}
            section { id: "portfolio-wrap", class: "portfolio-wrap",
                CardGallery {}
                UploadForm {}
            }
            About {}
            Contact {}
        }
    }
}

#[component]
fn Hero() -> Element {
    let content = use_content();
    let owner = content.read().owner.clone();
    let tagline = content.read().tagline.clone();

    rsx! {
        section { id: SiteSection::Home.anchor(), class: "hero",
            h1 { class: "page-title", "{owner}" }
            p { class: "tagline", "{tagline}" }
            a {
                class: "btn-cta",
                href: SiteSection::Portfolio.href(),
                onclick: move |evt| {
                    evt.prevent_default();
                    scroll_to_anchor(&SiteSection::Portfolio.href());
                },
                "View Portfolio"
            }
        }
    }
}

#[component]
fn About() -> Element {
    let content = use_content();
    let reveal = use_reveal();

    let about = content.read().about.clone();
    let class = reveal_class(&reveal, "about-text", "about-text");

    rsx! {
        section { id: SiteSection::About.anchor(), class: "about-section",
            h2 { class: "section-header", "About" }
            div { id: "about-text", class: "{class}",
                p { "{about}" }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    let reveal = use_reveal();
    let class = reveal_class(&reveal, "contact-info", "contact-info");

    rsx! {
        section { id: SiteSection::Contact.anchor(), class: "contact-section",
            h2 { class: "section-header", "Contact" }
            div { id: "contact-info", class: "{class}",
                p { "Have a project in mind? Send a message and I will get back to you." }
            }
            ContactForm {}
        }
    }
}
