//! Property-based tests for the gallery filter, contact form, and timers.
//!
//! Uses proptest to verify the behavior contracts over arbitrary inputs.

use proptest::prelude::*;
use showreel_core::flash::{FlashBoard, DISMISS_DELAY_MS, EXIT_DURATION_MS};
use showreel_core::forms::{ContactField, ContactForm, SubmitOutcome, UploadButton, UPLOAD_RESET_MS};
use showreel_core::{Filter, NavMenu};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate category names as the filter sees them
fn category_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}").expect("valid regex")
}

/// Generate an optional category marker for a card
fn marker_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(category_strategy())
}

/// Generate field values including blank and whitespace-only ones
fn field_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::string::string_regex("[a-zA-Z0-9@. ]{1,40}").expect("valid regex"),
        1 => prop::string::string_regex("[ \t]{0,6}").expect("valid regex"),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A card is visible iff the filter is "all" or equals the card's marker
    #[test]
    fn filter_visibility_contract(filter in category_strategy(), marker in marker_strategy()) {
        let specific = Filter::Category(filter.clone());
        let expected = marker.as_deref() == Some(filter.as_str());
        prop_assert_eq!(specific.matches(marker.as_deref()), expected);
    }

    /// The "all" sentinel shows every card regardless of marker
    #[test]
    fn all_filter_shows_everything(marker in marker_strategy()) {
        prop_assert!(Filter::All.matches(marker.as_deref()));
    }

    /// An even number of hamburger toggles always lands back where it started
    #[test]
    fn toggle_parity(clicks in 0usize..64) {
        let mut menu = NavMenu::new();
        for _ in 0..clicks * 2 {
            menu.toggle();
        }
        prop_assert!(!menu.is_open());
    }

    /// Submission accepts exactly when every field is non-blank after trim,
    /// and on rejection marks exactly the blank fields
    #[test]
    fn contact_form_marks_exactly_the_blanks(
        name in field_value_strategy(),
        email in field_value_strategy(),
        message in field_value_strategy(),
    ) {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, name.clone());
        form.set(ContactField::Email, email.clone());
        form.set(ContactField::Message, message.clone());

        let values = [&name, &email, &message];
        let all_filled = values.iter().all(|v| !v.trim().is_empty());

        match form.submit() {
            SubmitOutcome::Accepted => {
                prop_assert!(all_filled);
                for field in ContactField::ALL {
                    prop_assert_eq!(form.value(field), "");
                }
            }
            SubmitOutcome::Rejected { missing } => {
                prop_assert!(!all_filled);
                for (field, value) in ContactField::ALL.iter().zip(values) {
                    prop_assert_eq!(missing.contains(field), value.trim().is_empty());
                    prop_assert_eq!(form.is_marked(*field), value.trim().is_empty());
                }
            }
        }
    }

    /// Messages present before the sweep are gone once the exit completes;
    /// ticks strictly before the sweep never remove anything
    #[test]
    fn flash_sweep_window(early in 0u64..DISMISS_DELAY_MS, texts in prop::collection::vec("[a-z]{1,10}", 1..5)) {
        let mut board = FlashBoard::new(0);
        for text in &texts {
            board.push(text.clone());
        }

        board.tick(early);
        prop_assert_eq!(board.messages().len(), texts.len());

        board.tick(DISMISS_DELAY_MS + EXIT_DURATION_MS);
        prop_assert!(board.is_empty());
    }

    /// The upload control is disabled for the whole reset interval and
    /// restores its exact original label afterwards
    #[test]
    fn upload_button_interval(label in "[A-Za-z ]{1,20}", pressed_at in 0u64..10_000) {
        let mut button = UploadButton::new(label.clone());
        button.press(pressed_at);

        button.tick(pressed_at + UPLOAD_RESET_MS - 1);
        prop_assert!(button.is_disabled());

        button.tick(pressed_at + UPLOAD_RESET_MS);
        prop_assert!(!button.is_disabled());
        prop_assert_eq!(button.label(), label.as_str());
    }
}
