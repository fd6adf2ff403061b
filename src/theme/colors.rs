//! Color constants for the portfolio surface.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_ALT: &str = "#f7f8fa";
pub const INK: &str = "#2c3e50";
pub const INK_SOFT: &str = "#5d6d7e";

// === ACCENT ===
pub const ACCENT: &str = "#3498db";
pub const ACCENT_DARK: &str = "#2c81ba";

// === FORM BORDERS ===
/// Border color applied to a required field left blank on submit.
pub const ERROR_BORDER: &str = "#e74c3c";
/// Neutral border restored once a field is valid again.
pub const NEUTRAL_BORDER: &str = "#e1e5e9";

// === SEMANTIC ===
pub const SUCCESS: &str = "#27ae60";
pub const DANGER: &str = "#e74c3c";
