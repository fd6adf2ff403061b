//! Reusable components for the portfolio surface

mod filter_pills;
mod flash_banner;

pub use filter_pills::*;
pub use flash_banner::*;
