//! Components for the Showreel frontend

mod card_gallery;
mod contact_form;
mod flash_stack;
mod nav_header;
mod reveal;
mod scroll;
mod upload_form;
mod video_card;

pub use card_gallery::CardGallery;
pub use contact_form::ContactForm;
pub use flash_stack::FlashStack;
pub use nav_header::NavHeader;
pub use reveal::{reveal_class, RevealObserver};
pub use scroll::scroll_to_anchor;
pub use upload_form::UploadForm;
pub use video_card::VideoCard;
