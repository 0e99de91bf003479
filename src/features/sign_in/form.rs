//! Sign-In Form
//!
//! The GPUI rendering of the sign-in form. `SignInFormState` is the
//! per-instance entity holding the field flags and the text input;
//! `SignInForm` is rebuilt by the caller on every render from the
//! caller-owned email and callbacks.

use std::rc::Rc;

use gpui::{
    App, Context, ElementId, Entity, FocusHandle, Focusable, FontWeight, InteractiveElement,
    IntoElement, MouseButton, ParentElement, RenderOnce, SharedString, Styled, Subscription,
    Window, div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::components::composite::card::Card;
use crate::components::primitives::button::Button;
use crate::components::primitives::live_region::LiveRegion;
use crate::constants::{SIGN_IN_CARD_MAX_WIDTH, SUBMIT_BUTTON_MIN_WIDTH};
use crate::features::sign_in::controller::{SignInController, SignInInputs, SignInIntent};
use crate::i18n::{Locale, t};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

const PLACEHOLDER_DEFAULT: &str = "i.e. yourname@yourhost.com";

/// The value to push into the text input so it shows the caller's email,
/// or `None` when it already does.
pub fn pending_sync<'a>(displayed: &str, email: &'a str) -> Option<&'a str> {
    (displayed != email).then_some(email)
}

/// Per-instance state of a sign-in form
pub struct SignInFormState {
    controller: SignInController,
    input: Entity<InputState>,
    /// Locale the placeholder was last rendered in
    placeholder_locale: Locale,
    /// Props of the latest render, used by events raised by the input
    rendered: Option<RenderedProps>,
    _subscriptions: Vec<Subscription>,
}

impl SignInFormState {
    pub fn new(locale: Locale, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(t(locale, "signin.placeholder", PLACEHOLDER_DEFAULT))
        });

        let subscriptions = vec![cx.subscribe_in(&input, window, Self::on_input_event)];

        Self {
            controller: SignInController::new(locale),
            input,
            placeholder_locale: locale,
            rendered: None,
            _subscriptions: subscriptions,
        }
    }

    fn on_input_event(
        &mut self,
        input: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(rendered) = self.rendered.clone() else {
            return;
        };

        let intent = match event {
            InputEvent::Change => {
                let value = input.read(cx).value().to_string();
                // The caller's echo arrives on its next render
                if value == rendered.email.as_ref() {
                    return;
                }
                Some(self.controller.edit(value))
            }
            InputEvent::Blur => {
                self.controller.blur();
                None
            }
            InputEvent::PressEnter { .. } => self.controller.submit(rendered.inputs()),
            _ => return,
        };
        cx.notify();

        if let Some(intent) = intent {
            // Run caller code outside this entity's update
            let handlers = rendered.handlers.clone();
            window.defer(cx, move |window, cx| handlers.dispatch(intent, window, cx));
        }
    }

    pub fn controller(&self) -> &SignInController {
        &self.controller
    }

    /// Switch the language of validation messages
    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        self.controller.set_locale(locale);
        cx.notify();
    }

    /// Make the text input show the caller's email and the current placeholder
    fn sync(&mut self, rendered: RenderedProps, window: &mut Window, cx: &mut Context<Self>) {
        let locale = self.controller.locale();
        let displayed = self.input.read(cx).value();
        let value = pending_sync(&displayed, &rendered.email).map(|email| SharedString::from(email.to_string()));

        if value.is_some() || self.placeholder_locale != locale {
            self.input.update(cx, |input, cx| {
                if let Some(value) = value {
                    input.set_value(value, window, cx);
                }
                if self.placeholder_locale != locale {
                    input.set_placeholder(
                        t(locale, "signin.placeholder", PLACEHOLDER_DEFAULT),
                        window,
                        cx,
                    );
                }
            });
            self.placeholder_locale = locale;
        }

        self.rendered = Some(rendered);
    }
}

impl Focusable for SignInFormState {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.input.read(cx).focus_handle(cx)
    }
}

type EmailHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;
type ActionHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Caller callbacks
struct SignInHandlers {
    on_email_change: EmailHandler,
    on_submit: EmailHandler,
    on_secondary_action: ActionHandler,
}

impl SignInHandlers {
    fn dispatch(&self, intent: SignInIntent, window: &mut Window, cx: &mut App) {
        match intent {
            SignInIntent::EmailChanged(value) => (self.on_email_change)(&value, window, cx),
            SignInIntent::Submit(email) => (self.on_submit)(&email, window, cx),
            SignInIntent::SecondaryAction => (self.on_secondary_action)(window, cx),
        }
    }
}

/// Caller props of one render, without the state entity
#[derive(Clone)]
struct RenderedProps {
    email: SharedString,
    loading: bool,
    unknown_email: bool,
    handlers: Rc<SignInHandlers>,
}

impl RenderedProps {
    fn inputs(&self) -> SignInInputs<'_> {
        SignInInputs {
            email: &self.email,
            loading: self.loading,
            unknown_email: self.unknown_email,
        }
    }
}

/// Props plus the state they drive, captured by click handlers
#[derive(Clone)]
struct SignInProps {
    state: Entity<SignInFormState>,
    rendered: RenderedProps,
}

impl SignInProps {
    fn submit(&self, window: &mut Window, cx: &mut App) {
        let intent = self.state.update(cx, |state, cx| {
            let intent = state.controller.submit(self.rendered.inputs());
            cx.notify();
            intent
        });
        if let Some(intent) = intent {
            self.rendered.handlers.dispatch(intent, window, cx);
        }
    }

    fn secondary_action(&self, window: &mut Window, cx: &mut App) {
        let intent = self
            .state
            .read(cx)
            .controller
            .secondary_action(self.rendered.inputs());
        if let Some(intent) = intent {
            self.rendered.handlers.dispatch(intent, window, cx);
        }
    }
}

/// A controlled email sign-in form
#[derive(IntoElement)]
pub struct SignInForm {
    id: ElementId,
    props: SignInProps,
}

impl SignInForm {
    /// Create the form. Everything the form cannot work without is an argument.
    pub fn new(
        id: impl Into<ElementId>,
        state: &Entity<SignInFormState>,
        email: impl Into<SharedString>,
        on_email_change: impl Fn(&str, &mut Window, &mut App) + 'static,
        on_submit: impl Fn(&str, &mut Window, &mut App) + 'static,
        on_secondary_action: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            props: SignInProps {
                state: state.clone(),
                rendered: RenderedProps {
                    email: email.into(),
                    loading: false,
                    unknown_email: false,
                    handlers: Rc::new(SignInHandlers {
                        on_email_change: Rc::new(on_email_change),
                        on_submit: Rc::new(on_submit),
                        on_secondary_action: Rc::new(on_secondary_action),
                    }),
                },
            },
        }
    }

    /// Show the busy label and disable every action.
    ///
    /// This includes the "Join for free!" link of the unknown-email notice,
    /// not only the footer's "Join Free".
    pub fn loading(mut self, loading: bool) -> Self {
        self.props.rendered.loading = loading;
        self
    }

    /// Show the "no user with this email" notice
    pub fn unknown_email(mut self, unknown_email: bool) -> Self {
        self.props.rendered.unknown_email = unknown_email;
        self
    }
}

impl RenderOnce for SignInForm {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let props = self.props;

        let rendered = props.rendered.clone();
        props
            .state
            .update(cx, |state, cx| state.sync(rendered, window, cx));

        let (view, locale, input_state) = {
            let state = props.state.read(cx);
            (
                state.controller.view(props.rendered.inputs()),
                state.controller.locale(),
                state.input.clone(),
            )
        };

        let label = div()
            .id("signin-email-label")
            .mb_3()
            .text_size(px(Typography::H5))
            .font_weight(FontWeight::BOLD)
            .text_color(Palette::text_primary())
            .on_mouse_down(MouseButton::Left, {
                let input_state = input_state.clone();
                move |_event, window, cx| {
                    input_state.read(cx).focus_handle(cx).focus(window);
                    cx.stop_propagation();
                }
            })
            .child(t(locale, "signin.usingEmail", "Sign in using your email address:"));

        let mut input = Input::new(&input_state).flex_1();
        if view.input_error {
            input = input.border_color(Palette::danger());
        }

        // Presses inside the field must not reach the card's blur handler
        let input = div()
            .flex_1()
            .on_mouse_down(MouseButton::Left, |_event, _window, cx| cx.stop_propagation())
            .child(input);

        let submit = Button::primary("signin-submit", t(locale, "signin.submit", "Sign In"))
            .disabled(view.submit_disabled)
            .loading(view.submit_loading)
            .loading_label(t(locale, "signin.loading", "Loading..."))
            .min_w(px(SUBMIT_BUTTON_MIN_WIDTH))
            .on_click({
                let props = props.clone();
                move |_event, window, cx| props.submit(window, cx)
            });

        let error = view.visible_error.map(|message| {
            LiveRegion::new("signin-error", Palette::danger()).child(message)
        });

        let unknown_email = view.show_unknown_email.then(|| {
            LiveRegion::new("signin-unknown-email", Palette::text_muted())
                .child(t(
                    locale,
                    "signin.unknownEmail",
                    "There is no user with this email address.",
                ))
                .child(
                    Button::link("signin-join-for-free", t(locale, "signin.joinForFree", "Join for free!"))
                        .disabled(view.secondary_disabled)
                        .on_click({
                            let props = props.clone();
                            move |_event, window, cx| props.secondary_action(window, cx)
                        }),
                )
        });

        let join_free = Button::link("signin-join-free", t(locale, "signin.joinFree", "Join Free"))
            .bold()
            .disabled(view.secondary_disabled)
            .on_click({
                let props = props.clone();
                move |_event, window, cx| props.secondary_action(window, cx)
            });

        Card::new(self.id)
            .max_w(px(SIGN_IN_CARD_MAX_WIDTH))
            .on_mouse_down(|window, _cx| window.blur())
            .child(label)
            .child(div().flex().items_center().gap_3().child(input).child(submit))
            .children(error)
            .children(unknown_email)
            .footer(
                div()
                    .text_size(px(Typography::PARAGRAPH))
                    .text_color(Palette::text_secondary())
                    .child(t(locale, "signin.noAccount", "Don't have an account?")),
            )
            .footer(join_free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_pushes_the_callers_value() {
        assert_eq!(pending_sync("", "a@b.com"), Some("a@b.com"));
        assert_eq!(pending_sync("a@b.com", ""), Some(""));
    }

    #[test]
    fn sync_is_skipped_when_the_input_already_matches() {
        assert_eq!(pending_sync("a@b.com", "a@b.com"), None);
        assert_eq!(pending_sync("", ""), None);
    }

    #[test]
    fn whole_value_replacement_is_a_single_edit() {
        // The input reports the full new text, so a selection replaced in one
        // gesture reaches the controller as one edit
        let mut controller = SignInController::new(Locale::EnUS);
        controller.edit("a".to_string());
        controller.blur();
        assert!(controller.state().visible_error().is_some());

        let intent = controller.edit("a@b.com".to_string());
        assert_eq!(intent, SignInIntent::EmailChanged("a@b.com".to_string()));
        assert!(!controller.state().has_error());
    }
}
