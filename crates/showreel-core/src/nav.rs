//! Navigation menu state.
//!
//! The hamburger trigger and the slide-out panel share a single open flag,
//! so their "active" markers can never drift apart.

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu panel (and its trigger) carry the active marker.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the open state. Clicking the hamburger trigger calls this.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force the menu closed. Clicking any navigation link calls this;
    /// closing an already-closed menu is a no-op.
    pub fn close(&mut self) {
        self.open = false;
    }
}
