//! Smooth scrolling for in-page anchors.
//!
//! Anchor clicks are intercepted in Rust (the click handler calls
//! `prevent_default`), resolved against the known sections, and handed to
//! the platform only for the scroll itself.

use dioxus::document;
use showreel_core::SiteSection;

/// Smoothly scroll the section named by an in-page href into view, aligned
/// to the start of the viewport.
///
/// An href that names no known section, or whose element is missing from
/// the page, is a silent no-op.
pub fn scroll_to_anchor(href: &str) {
    let Some(section) = SiteSection::resolve(href) else {
        tracing::debug!(href, "anchor names no known section, ignoring");
        return;
    };

    let js = format!(
        r#"
        const el = document.getElementById("{id}");
        if (el) {{
            el.scrollIntoView({{ behavior: "smooth", block: "start" }});
        }}
        "#,
        id = section.anchor()
    );
    let _ = document::eval(&js);
}
