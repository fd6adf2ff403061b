//! Contact form validation and the upload submit control.

/// Acknowledgment shown when a contact message passes validation.
pub const CONTACT_ACCEPTED_MSG: &str = "Thank you for your message! I will get back to you soon.";

/// Acknowledgment shown when required fields are missing.
pub const CONTACT_REJECTED_MSG: &str = "Please fill in all required fields.";

/// Flash text when the upload form is submitted without a file.
pub const NO_FILE_SELECTED_MSG: &str = "No file selected";

/// Flash text for a file that is not a recognized video format.
pub const INVALID_FILE_TYPE_MSG: &str = "Invalid file type. Please upload a video file.";

/// Flash text for a file over the size cap.
pub const FILE_TOO_LARGE_MSG: &str = "File is too large. Maximum size is 100MB.";

/// Flash text when an upload cannot be read from disk.
pub const UPLOAD_ERROR_MSG: &str = "Error uploading video. Please try again.";

/// Flash text for a successful upload.
pub const UPLOAD_SUCCESS_MSG: &str = "Video uploaded successfully!";

/// Label shown on the upload control while it is disabled.
pub const UPLOADING_LABEL: &str = "Uploading...";

/// How long the upload control stays disabled after a press.
pub const UPLOAD_RESET_MS: u64 = 3000;

/// Required fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

/// Result of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All required fields were non-empty after trimming; the form was reset.
    Accepted,
    /// At least one required field was blank; `missing` lists exactly those.
    Rejected { missing: Vec<ContactField> },
}

/// Contact form state: field values plus the error marks from the most
/// recent submission.
///
/// A field is valid iff its trimmed value is non-empty; there is no
/// cross-field validation and nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    marked: Vec<ContactField>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Whether the field carries the error mark from the last submission.
    pub fn is_marked(&self, field: ContactField) -> bool {
        self.marked.contains(&field)
    }

    /// Validate and submit.
    ///
    /// On success every field is cleared; on rejection exactly the blank
    /// fields are marked, and marks from earlier attempts on since-fixed
    /// fields are dropped.
    pub fn submit(&mut self) -> SubmitOutcome {
        let missing: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect();

        if missing.is_empty() {
            *self = Self::default();
            SubmitOutcome::Accepted
        } else {
            self.marked = missing.clone();
            SubmitOutcome::Rejected { missing }
        }
    }
}

/// The upload form's submit control.
///
/// Pressing it swaps the label for [`UPLOADING_LABEL`] and disables it;
/// [`UPLOAD_RESET_MS`] later the original label returns and it re-enables.
/// The reset is purely time-based and says nothing about whether any real
/// upload finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadButton {
    label: String,
    busy_until: Option<u64>,
}

impl UploadButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_until: None,
        }
    }

    /// Current label: the working label while disabled, the original
    /// otherwise.
    pub fn label(&self) -> &str {
        if self.busy_until.is_some() {
            UPLOADING_LABEL
        } else {
            &self.label
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.busy_until.is_some()
    }

    /// Press the control at `now_ms`. Ignored while already disabled.
    pub fn press(&mut self, now_ms: u64) {
        if self.busy_until.is_none() {
            self.busy_until = Some(now_ms + UPLOAD_RESET_MS);
        }
    }

    /// Advance the control's clock, restoring it once the reset delay has
    /// elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(deadline) = self.busy_until {
            if now_ms >= deadline {
                self.busy_until = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "Loved the showreel.");
        form
    }

    #[test]
    fn accepts_and_resets_when_all_fields_filled() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_marked(field));
        }
    }

    #[test]
    fn rejects_and_marks_only_blank_fields() {
        let mut form = filled();
        form.set(ContactField::Email, "   ");

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                missing: vec![ContactField::Email]
            }
        );
        assert!(form.is_marked(ContactField::Email));
        assert!(!form.is_marked(ContactField::Name));
        assert!(!form.is_marked(ContactField::Message));
        // Valid fields keep their values for the next attempt.
        assert_eq!(form.value(ContactField::Name), "Ada");
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut form = filled();
        form.set(ContactField::Message, " \t\n ");
        assert!(matches!(form.submit(), SubmitOutcome::Rejected { .. }));
    }

    #[test]
    fn fixing_a_field_clears_its_mark_on_resubmit() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.submit();
        assert!(form.is_marked(ContactField::Email));
        assert!(form.is_marked(ContactField::Message));

        form.set(ContactField::Email, "ada@example.com");
        form.submit();
        assert!(!form.is_marked(ContactField::Email));
        assert!(form.is_marked(ContactField::Message));
    }

    #[test]
    fn upload_button_swaps_label_and_disables_immediately() {
        let mut button = UploadButton::new("Upload Video");
        button.press(100);
        assert!(button.is_disabled());
        assert_eq!(button.label(), UPLOADING_LABEL);
    }

    #[test]
    fn upload_button_restores_exact_original_label() {
        let mut button = UploadButton::new("Upload Video");
        button.press(0);

        button.tick(UPLOAD_RESET_MS - 1);
        assert!(button.is_disabled());

        button.tick(UPLOAD_RESET_MS);
        assert!(!button.is_disabled());
        assert_eq!(button.label(), "Upload Video");
    }

    #[test]
    fn press_while_disabled_does_not_extend_the_deadline() {
        let mut button = UploadButton::new("Upload Video");
        button.press(0);
        button.press(UPLOAD_RESET_MS - 1);
        button.tick(UPLOAD_RESET_MS);
        assert!(!button.is_disabled());
    }
}
