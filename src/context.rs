//! Shared context for the Showreel frontend.
//!
//! Provides the site content, flash board, reveal set, and the app epoch to
//! all components via use_context. Each behavior wires itself from these
//! hooks, so a page without an upload form or contact section never breaks
//! the others.

use std::time::Instant;

use dioxus::prelude::*;
use showreel_core::{FlashBoard, RevealSet, SiteContent};

/// Moment the app started; every timer in the frontend measures from here.
///
/// Core state machines take explicit milliseconds, so this is the single
/// place wall-clock time enters the picture.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AppEpoch(Instant);

impl AppEpoch {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Milliseconds elapsed since the app started.
    pub fn now_ms(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

/// Hook to access the site content from context.
pub fn use_content() -> Signal<SiteContent> {
    use_context::<Signal<SiteContent>>()
}

/// Hook to access the flash board from context.
pub fn use_flash() -> Signal<FlashBoard> {
    use_context::<Signal<FlashBoard>>()
}

/// Hook to access the scroll-reveal set from context.
pub fn use_reveal() -> Signal<RevealSet> {
    use_context::<Signal<RevealSet>>()
}

/// Hook to access the app epoch from context.
pub fn use_epoch() -> AppEpoch {
    use_context::<AppEpoch>()
}
