use dioxus::prelude::*;
use showreel_core::{FlashBoard, RevealSet, SiteContent};

use crate::components::{FlashStack, NavHeader, RevealObserver};
use crate::context::AppEpoch;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shared context (content, flash board,
/// reveal set, epoch), and the single portfolio page.
#[component]
pub fn App() -> Element {
    let epoch = use_hook(AppEpoch::start);
    let mut content: Signal<SiteContent> = use_signal(SiteContent::sample);
    let mut flash: Signal<FlashBoard> = use_signal(|| FlashBoard::new(0));
    let reveal: Signal<RevealSet> = use_signal(RevealSet::new);

    use_context_provider(|| epoch);
    use_context_provider(|| content);
    use_context_provider(|| flash);
    use_context_provider(|| reveal);

    // Load the content file on mount; failures fall back to the sample
    // gallery and surface as a flash.
    use_effect(move || {
        if let Some(path) = crate::get_content_path() {
            match SiteContent::load(&path) {
                Ok(loaded) => {
                    tracing::info!(videos = loaded.videos.len(), "Site content loaded");
                    content.set(loaded);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load site content");
                    flash.write().push(format!("Could not load site content: {e}"));
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        FlashStack {}
        NavHeader {}
        Home {}
        RevealObserver {}
    }
}
