//! Flash message board with one-shot auto-dismissal.
//!
//! The board arms a single sweep when created. When the sweep fires
//! ([`DISMISS_DELAY_MS`] after arming), every message present at that
//! instant enters a short exit animation and is removed once it completes.
//!
//! The sweep never re-arms: messages pushed after it has fired stay until
//! dismissed by hand. That is a deliberate carry-over of the site's
//! long-standing behavior, kept rather than silently fixed.
//!
//! All timing flows through an explicit `now_ms` so tests can drive the
//! clock directly.

/// Delay between arming and the dismissal sweep.
pub const DISMISS_DELAY_MS: u64 = 5000;

/// Duration of the exit animation before a swept message is removed.
pub const EXIT_DURATION_MS: u64 = 300;

/// Lifecycle phase of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    /// Visible, not yet swept.
    Shown,
    /// Swept; playing the exit animation.
    Exiting,
}

/// A single flash notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    pub text: String,
    pub phase: FlashPhase,
}

/// Ordered stack of flash messages plus the one-shot dismissal sweep.
#[derive(Debug, Clone)]
pub struct FlashBoard {
    messages: Vec<FlashMessage>,
    armed_at: u64,
    swept: bool,
    exit_deadline: Option<u64>,
    next_id: u64,
}

impl FlashBoard {
    /// Create an empty board and arm the sweep at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            messages: Vec::new(),
            armed_at: now_ms,
            swept: false,
            exit_deadline: None,
            next_id: 0,
        }
    }

    /// Push a message onto the board, returning its id.
    pub fn push(&mut self, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(FlashMessage {
            id,
            text: text.into(),
            phase: FlashPhase::Shown,
        });
        id
    }

    /// Remove a message by id (manual close).
    pub fn dismiss(&mut self, id: u64) {
        self.messages.retain(|m| m.id != id);
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether the one-shot sweep has already fired.
    pub fn swept(&self) -> bool {
        self.swept
    }

    /// Advance the board to `now_ms`.
    ///
    /// Fires the sweep once its delay has elapsed, moving every message
    /// present at that instant into [`FlashPhase::Exiting`]; removes exiting
    /// messages once the exit animation has completed. Messages pushed after
    /// the sweep fired are untouched.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.swept && now_ms >= self.armed_at + DISMISS_DELAY_MS {
            self.swept = true;
            if !self.messages.is_empty() {
                for message in &mut self.messages {
                    message.phase = FlashPhase::Exiting;
                }
                self.exit_deadline = Some(self.armed_at + DISMISS_DELAY_MS + EXIT_DURATION_MS);
            }
        }

        if let Some(deadline) = self.exit_deadline {
            if now_ms >= deadline {
                self.messages.retain(|m| m.phase != FlashPhase::Exiting);
                self.exit_deadline = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intact_before_the_sweep_fires() {
        let mut board = FlashBoard::new(0);
        board.push("Video uploaded successfully!");

        board.tick(DISMISS_DELAY_MS - 1);
        assert_eq!(board.messages().len(), 1);
        assert_eq!(board.messages()[0].phase, FlashPhase::Shown);
    }

    #[test]
    fn exiting_between_sweep_and_removal() {
        let mut board = FlashBoard::new(0);
        board.push("No file selected");

        board.tick(DISMISS_DELAY_MS);
        assert_eq!(board.messages().len(), 1);
        assert_eq!(board.messages()[0].phase, FlashPhase::Exiting);
    }

    #[test]
    fn removed_once_exit_completes() {
        let mut board = FlashBoard::new(0);
        board.push("one");
        board.push("two");

        board.tick(DISMISS_DELAY_MS);
        board.tick(DISMISS_DELAY_MS + EXIT_DURATION_MS);
        assert!(board.is_empty());
    }

    #[test]
    fn single_late_tick_sweeps_and_removes() {
        let mut board = FlashBoard::new(0);
        board.push("stale");

        // One tick well past the whole window clears in a single pass.
        board.tick(DISMISS_DELAY_MS + EXIT_DURATION_MS + 1000);
        assert!(board.is_empty());
    }

    #[test]
    fn pushed_after_sweep_is_never_auto_dismissed() {
        let mut board = FlashBoard::new(0);
        board.tick(DISMISS_DELAY_MS);
        assert!(board.swept());

        board.push("late arrival");
        board.tick(DISMISS_DELAY_MS + EXIT_DURATION_MS);
        board.tick(u64::MAX);
        assert_eq!(board.messages().len(), 1);
        assert_eq!(board.messages()[0].phase, FlashPhase::Shown);
    }

    #[test]
    fn pushed_during_exit_window_survives() {
        let mut board = FlashBoard::new(0);
        board.push("doomed");
        board.tick(DISMISS_DELAY_MS);

        board.push("fresh");
        board.tick(DISMISS_DELAY_MS + EXIT_DURATION_MS);
        assert_eq!(board.messages().len(), 1);
        assert_eq!(board.messages()[0].text, "fresh");
    }

    #[test]
    fn manual_dismiss_removes_by_id() {
        let mut board = FlashBoard::new(0);
        let a = board.push("a");
        board.push("b");

        board.dismiss(a);
        assert_eq!(board.messages().len(), 1);
        assert_eq!(board.messages()[0].text, "b");
    }

    #[test]
    fn board_armed_at_nonzero_epoch() {
        let mut board = FlashBoard::new(10_000);
        board.push("hello");

        board.tick(10_000 + DISMISS_DELAY_MS - 1);
        assert_eq!(board.messages()[0].phase, FlashPhase::Shown);
        board.tick(10_000 + DISMISS_DELAY_MS);
        assert_eq!(board.messages()[0].phase, FlashPhase::Exiting);
    }
}
