//! Scroll-triggered reveal bridge.
//!
//! Installs a viewport IntersectionObserver over every `.reveal` element
//! (threshold 0.1, bottom edge contracted by 50px) and streams crossings
//! back over the eval channel. The shared `RevealSet` decides which
//! crossings matter; elements stay observed, so repeat crossings simply
//! re-apply the terminal style with no visible effect.
//!
//! The install runs once at mount. Elements added to the page later are
//! not observed; code that inserts them marks them revealed directly
//! (see the upload form).

use dioxus::document;
use dioxus::prelude::*;
use showreel_core::RevealSet;

use crate::context::use_reveal;

const OBSERVER_JS: &str = r#"
const opts = { threshold: 0.1, rootMargin: "0px 0px -50px 0px" };
const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
        if (entry.target.id) {
            dioxus.send([entry.target.id, entry.intersectionRatio]);
        }
    }
}, opts);
for (const el of document.querySelectorAll(".reveal")) {
    observer.observe(el);
}
"#;

/// Compute the class list for a reveal-animated element.
pub fn reveal_class(reveal: &Signal<RevealSet>, base: &str, id: &str) -> String {
    if reveal.read().is_revealed(id) {
        format!("{base} reveal revealed")
    } else {
        format!("{base} reveal")
    }
}

/// Installs the intersection observer and feeds crossings into the shared
/// reveal set. Renders nothing; mount it once, after the page content.
#[component]
pub fn RevealObserver() -> Element {
    let mut reveal = use_reveal();

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(OBSERVER_JS);
            loop {
                match eval.recv::<(String, f64)>().await {
                    Ok((id, ratio)) => {
                        if reveal.write().observe(&id, ratio) {
                            tracing::debug!(id = %id, ratio, "element revealed");
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = ?e, "reveal channel closed");
                        break;
                    }
                }
            }
        });
    });

    rsx! {}
}
