//! Showreel UI Components
//!
//! Reusable Dioxus components shared by the Showreel frontend: the gallery
//! filter pills and the flash message banner. Components here are
//! presentation-only; the behavior contracts live in `showreel-core`.

pub mod components;

pub use components::*;
