//! Showreel Core Library
//!
//! Framework-independent behavior logic for the Showreel portfolio app.
//!
//! ## Overview
//!
//! Showreel is a personal video-portfolio application: a navigation menu,
//! a category-filtered video gallery, flash notifications, a contact form,
//! and a video upload form. This crate holds the behavior contracts behind
//! that surface as plain state machines, so every interaction can be tested
//! deterministically without a UI runtime.
//!
//! Time-dependent behaviors (flash dismissal, upload-button reset) take an
//! explicit `now_ms` instead of reading a wall clock; the desktop frontend
//! drives them from its own epoch, tests drive them from constants.
//!
//! ## Quick Start
//!
//! ```
//! use showreel_core::{Filter, NavMenu, SiteContent};
//!
//! let mut menu = NavMenu::new();
//! menu.toggle();
//! assert!(menu.is_open());
//!
//! let content = SiteContent::sample();
//! let filter = Filter::Category("coding".to_string());
//! let visible = content
//!     .videos
//!     .iter()
//!     .filter(|v| filter.matches(v.category.as_deref()))
//!     .count();
//! assert!(visible <= content.videos.len());
//! ```

pub mod content;
pub mod error;
pub mod filter;
pub mod flash;
pub mod forms;
pub mod nav;
pub mod reveal;
pub mod section;

pub use content::{
    allowed_file, SiteContent, Video, ALLOWED_EXTENSIONS, DEFAULT_CATEGORY, MAX_CONTENT_LENGTH,
};
pub use error::ShowreelError;
pub use filter::Filter;
pub use flash::{FlashBoard, FlashMessage, FlashPhase};
pub use forms::{ContactField, ContactForm, SubmitOutcome, UploadButton};
pub use nav::NavMenu;
pub use reveal::RevealSet;
pub use section::SiteSection;
