//! Sign-In Controller
//!
//! Turns user gestures into `FormState` transitions and caller intents. It
//! reads the email from the caller's props on every call and never keeps a
//! copy of it.

use crate::domain::email;
use crate::domain::form_state::FormState;
use crate::i18n::Locale;

/// Caller-owned values the form renders from
#[derive(Debug, Clone, Copy, Default)]
pub struct SignInInputs<'a> {
    /// Current field value
    pub email: &'a str,
    /// An authentication request is in flight
    pub loading: bool,
    /// The last submitted address has no account
    pub unknown_email: bool,
}

/// Callback the form asks its caller to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInIntent {
    /// `on_email_change(value)`
    EmailChanged(String),
    /// `on_submit(email)`
    Submit(String),
    /// `on_secondary_action()`
    SecondaryAction,
}

/// What the form should look like for the current inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInView {
    pub input_error: bool,
    pub submit_disabled: bool,
    pub submit_loading: bool,
    pub visible_error: Option<String>,
    pub show_unknown_email: bool,
    pub secondary_disabled: bool,
}

/// Owns the form flags of one sign-in form instance
#[derive(Debug, Clone, Default)]
pub struct SignInController {
    state: FormState,
    locale: Locale,
}

impl SignInController {
    pub fn new(locale: Locale) -> Self {
        Self {
            state: FormState::new(),
            locale,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Change the language of validation messages recorded from now on
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    fn validation_message(&self, value: &str) -> Option<String> {
        email::validate(value)
            .err()
            .map(|err| err.message(self.locale))
    }

    /// The user edited the field to `value`
    pub fn edit(&mut self, value: String) -> SignInIntent {
        self.state = self.state.edited(self.validation_message(&value));
        SignInIntent::EmailChanged(value)
    }

    /// The field lost focus
    pub fn blur(&mut self) {
        self.state = self.state.blurred();
    }

    /// A submit gesture (Enter in the field or a click on the submit button).
    ///
    /// Ignored while loading. An empty or invalid value reveals its
    /// validation message instead of submitting. The submitted address is the
    /// sanitized one that passed validation.
    pub fn submit(&mut self, inputs: SignInInputs<'_>) -> Option<SignInIntent> {
        if inputs.loading {
            return None;
        }

        match email::validate(inputs.email) {
            Err(err) => {
                tracing::debug!(reason = err.key(), "sign-in submit rejected");
                self.state = self.state.invalid_submit(err.message(self.locale));
                None
            }
            Ok(()) => {
                tracing::debug!("sign-in submitted");
                Some(SignInIntent::Submit(email::sanitize(inputs.email)))
            }
        }
    }

    /// "Join Free" or "Join for free!" was clicked
    pub fn secondary_action(&self, inputs: SignInInputs<'_>) -> Option<SignInIntent> {
        if inputs.loading {
            return None;
        }
        tracing::debug!("sign-in secondary action");
        Some(SignInIntent::SecondaryAction)
    }

    /// Derive the rendering flags
    pub fn view(&self, inputs: SignInInputs<'_>) -> SignInView {
        SignInView {
            input_error: self.state.has_error(),
            submit_disabled: inputs.email.is_empty() || self.state.has_error() || inputs.loading,
            submit_loading: inputs.loading,
            visible_error: self.state.visible_error().map(str::to_string),
            show_unknown_email: inputs.unknown_email,
            secondary_disabled: inputs.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(email: &str) -> SignInInputs<'_> {
        SignInInputs {
            email,
            ..Default::default()
        }
    }

    #[test]
    fn valid_email_submits_once() {
        for email in ["a@b.com", "first.last@example.org", "x+y@z"] {
            let mut controller = SignInController::new(Locale::EnUS);
            assert_eq!(
                controller.edit(email.to_string()),
                SignInIntent::EmailChanged(email.to_string())
            );
            assert_eq!(
                controller.submit(inputs(email)),
                Some(SignInIntent::Submit(email.to_string()))
            );
        }
    }

    #[test]
    fn submit_passes_the_sanitized_address() {
        let mut controller = SignInController::new(Locale::EnUS);
        assert_eq!(
            controller.submit(inputs("  a@b.com  ")),
            Some(SignInIntent::Submit("a@b.com".to_string()))
        );
        assert_eq!(
            controller.submit(inputs("a@b.com\n")),
            Some(SignInIntent::Submit("a@b.com".to_string()))
        );
    }

    #[test]
    fn empty_email_disables_submit() {
        let controller = SignInController::new(Locale::EnUS);
        assert!(controller.view(inputs("")).submit_disabled);

        let unknown = SignInInputs {
            email: "",
            unknown_email: true,
            ..Default::default()
        };
        assert!(controller.view(unknown).submit_disabled);
    }

    #[test]
    fn invalid_edit_is_hidden_until_blur() {
        let mut controller = SignInController::new(Locale::EnUS);
        controller.edit("not-an-email".to_string());

        let view = controller.view(inputs("not-an-email"));
        assert!(view.input_error);
        assert!(view.submit_disabled);
        assert_eq!(view.visible_error, None);

        controller.blur();
        let view = controller.view(inputs("not-an-email"));
        assert_eq!(
            view.visible_error.as_deref(),
            Some("Please include an '@' in the email address. 'not-an-email' is missing an '@'.")
        );
    }

    #[test]
    fn invalid_submit_reveals_message_without_submitting() {
        let mut controller = SignInController::new(Locale::EnUS);
        controller.edit("a@".to_string());
        assert_eq!(controller.view(inputs("a@")).visible_error, None);

        assert_eq!(controller.submit(inputs("a@")), None);
        assert_eq!(
            controller.view(inputs("a@")).visible_error.as_deref(),
            Some("Please enter a part following '@'. 'a@' is incomplete.")
        );
    }

    #[test]
    fn empty_submit_reports_missing_value() {
        let mut controller = SignInController::new(Locale::EnUS);
        assert_eq!(controller.submit(inputs("")), None);
        assert_eq!(
            controller.view(inputs("")).visible_error.as_deref(),
            Some("Please fill out this field.")
        );
    }

    #[test]
    fn unknown_email_offers_secondary_action() {
        let controller = SignInController::new(Locale::EnUS);
        let unknown = SignInInputs {
            email: "a@b.com",
            unknown_email: true,
            loading: false,
        };
        assert!(controller.view(unknown).show_unknown_email);
        assert_eq!(
            controller.secondary_action(unknown),
            Some(SignInIntent::SecondaryAction)
        );
        assert!(!controller.view(inputs("a@b.com")).show_unknown_email);
    }

    #[test]
    fn loading_disables_every_action() {
        let mut controller = SignInController::new(Locale::EnUS);
        controller.edit("a@b.com".to_string());
        let loading = SignInInputs {
            email: "a@b.com",
            loading: true,
            unknown_email: false,
        };

        let view = controller.view(loading);
        assert!(view.submit_disabled);
        assert!(view.submit_loading);
        assert!(view.secondary_disabled);
        assert_eq!(controller.submit(loading), None);
        assert_eq!(controller.secondary_action(loading), None);
    }

    #[test]
    fn submit_does_not_reset_flags() {
        let mut controller = SignInController::new(Locale::EnUS);
        controller.edit("a@b.com".to_string());
        controller.blur();
        let before = controller.state().clone();
        controller.submit(inputs("a@b.com"));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn messages_follow_locale() {
        let mut controller = SignInController::new(Locale::ZhCN);
        controller.edit(String::new());
        controller.blur();
        assert_eq!(
            controller.view(inputs("")).visible_error.as_deref(),
            Some("请填写此字段。")
        );
    }

    #[test]
    fn typing_blurring_and_fixing_the_address() {
        let mut controller = SignInController::new(Locale::EnUS);
        let mut intents = Vec::new();

        let view = controller.view(inputs(""));
        assert!(view.submit_disabled);
        assert_eq!(view.visible_error, None);

        intents.push(controller.edit("a".to_string()));
        assert!(controller.state().has_error());
        assert_eq!(controller.view(inputs("a")).visible_error, None);

        controller.blur();
        let view = controller.view(inputs("a"));
        assert!(view.visible_error.is_some());
        assert!(view.submit_disabled);

        intents.push(controller.edit("a@b.com".to_string()));
        let view = controller.view(inputs("a@b.com"));
        assert_eq!(view.visible_error, None);
        assert!(!view.submit_disabled);

        intents.extend(controller.submit(inputs("a@b.com")));
        assert_eq!(
            intents,
            vec![
                SignInIntent::EmailChanged("a".to_string()),
                SignInIntent::EmailChanged("a@b.com".to_string()),
                SignInIntent::Submit("a@b.com".to_string()),
            ]
        );
    }
}
