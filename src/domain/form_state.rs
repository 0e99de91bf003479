//! FormState - Sign-In Field Flags
//!
//! The two ephemeral flags of the sign-in form. Each interaction maps to a
//! pure transition returning the next state.

/// Validation flags of the email field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Latest validation message, `None` while the value is valid
    error_message: Option<String>,
    /// Whether the recorded message may be displayed
    show_error: bool,
}

impl FormState {
    /// Initial state: no error, nothing shown
    pub fn new() -> Self {
        Self::default()
    }

    /// The field was edited. `validation_message` is `None` for a valid value.
    ///
    /// Errors stay hidden while the user is typing.
    pub fn edited(&self, validation_message: Option<String>) -> Self {
        Self {
            error_message: validation_message,
            show_error: false,
        }
    }

    /// The field lost focus: reveal whatever is recorded
    pub fn blurred(&self) -> Self {
        Self {
            error_message: self.error_message.clone(),
            show_error: true,
        }
    }

    /// A submit was attempted with an invalid value: record and reveal
    pub fn invalid_submit(&self, validation_message: String) -> Self {
        Self {
            error_message: Some(validation_message),
            show_error: true,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn show_error(&self) -> bool {
        self.show_error
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// The message to render, if any
    pub fn visible_error(&self) -> Option<&str> {
        if self.show_error {
            self.error_message()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clean() {
        let state = FormState::new();
        assert_eq!(state.error_message(), None);
        assert!(!state.show_error());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn edit_records_error_but_hides_it() {
        let state = FormState::new()
            .blurred()
            .edited(Some("bad".to_string()));
        assert_eq!(state.error_message(), Some("bad"));
        assert!(!state.show_error());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn blur_reveals_without_changing_message() {
        let state = FormState::new().edited(Some("bad".to_string())).blurred();
        assert_eq!(state.error_message(), Some("bad"));
        assert_eq!(state.visible_error(), Some("bad"));
    }

    #[test]
    fn blur_on_valid_value_shows_nothing() {
        let state = FormState::new().edited(None).blurred();
        assert!(state.show_error());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn valid_edit_clears_error() {
        let state = FormState::new()
            .edited(Some("bad".to_string()))
            .blurred()
            .edited(None);
        assert!(!state.has_error());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn invalid_submit_reveals_immediately() {
        let state = FormState::new().invalid_submit("bad".to_string());
        assert_eq!(state.visible_error(), Some("bad"));
    }
}
