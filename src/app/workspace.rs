//! Workspace - Host View for the Sign-In Form
//!
//! Owns everything the form expects from its caller: the email value, the
//! `loading` and `unknown_email` flags and the callbacks. Callbacks only log
//! and update a status line.

use gpui::{
    App, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled,
    WeakEntity, Window, div, prelude::*, px,
};
use tracing::info;

use crate::components::primitives::button::Button;
use crate::constants::HEADER_HEIGHT;
use crate::features::sign_in::{SignInForm, SignInFormState};
use crate::i18n::{Locale, format_message, t};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Latest callback observed from the form
#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Idle,
    Submitted(String),
    SecondaryAction,
}

/// Main window content
pub struct Workspace {
    locale: Locale,
    email: SharedString,
    loading: bool,
    unknown_email: bool,
    status: Status,
    sign_in: Entity<SignInFormState>,
}

impl Workspace {
    pub fn new(locale: Locale, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let sign_in = cx.new(|cx| SignInFormState::new(locale, window, cx));

        // Re-render when the form's flags change
        cx.observe(&sign_in, |_this, _, cx| cx.notify()).detach();

        Self {
            locale,
            email: SharedString::default(),
            loading: false,
            unknown_email: false,
            status: Status::Idle,
            sign_in,
        }
    }

    fn set_email(&mut self, value: &str, cx: &mut Context<Self>) {
        self.email = SharedString::from(value.to_string());
        cx.notify();
    }

    fn submitted(&mut self, email: &str, cx: &mut Context<Self>) {
        info!("Sign-in submitted");
        self.status = Status::Submitted(email.to_string());
        cx.notify();
    }

    fn secondary_action(&mut self, cx: &mut Context<Self>) {
        info!("Account creation requested");
        self.status = Status::SecondaryAction;
        cx.notify();
    }

    fn toggle_loading(&mut self, cx: &mut Context<Self>) {
        self.loading = !self.loading;
        cx.notify();
    }

    fn toggle_unknown_email(&mut self, cx: &mut Context<Self>) {
        self.unknown_email = !self.unknown_email;
        cx.notify();
    }

    /// Click handler running `f` on this workspace
    fn toggle_handler(
        this: WeakEntity<Self>,
        f: fn(&mut Self, &mut Context<Self>),
    ) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
        move |_event, _window, cx| {
            let _ = this.update(cx, |workspace, cx| f(workspace, cx));
        }
    }

    fn toggle_locale(&mut self, cx: &mut Context<Self>) {
        self.locale = self.locale.toggled();
        info!(locale = self.locale.tag(), "Locale changed");
        let locale = self.locale;
        self.sign_in
            .update(cx, |state, cx| state.set_locale(locale, cx));
        cx.notify();
    }

    fn status_text(&self) -> String {
        match &self.status {
            Status::Idle => format_message(self.locale, "demo.idle", "Waiting for input", &[]),
            Status::Submitted(email) => format_message(
                self.locale,
                "demo.submitted",
                "Sign-in requested for %{email}",
                &[("email", email.as_str())],
            ),
            Status::SecondaryAction => {
                format_message(self.locale, "demo.secondary", "Account creation requested", &[])
            }
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale;
        let this = cx.entity().downgrade();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .bg(Palette::header_bg())
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(Typography::TITLE))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(t(locale, "demo.title", "Sign In")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::ghost("demo-toggle-loading", t(locale, "demo.toggleLoading", "Toggle loading"))
                            .on_click(Self::toggle_handler(this.clone(), Self::toggle_loading)),
                    )
                    .child(
                        Button::ghost(
                            "demo-toggle-unknown",
                            t(locale, "demo.toggleUnknown", "Toggle unknown email"),
                        )
                        .on_click(Self::toggle_handler(this.clone(), Self::toggle_unknown_email)),
                    )
                    .child(
                        Button::ghost("demo-toggle-locale", t(locale, "demo.language", "中文"))
                            .on_click(Self::toggle_handler(this, Self::toggle_locale)),
                    ),
            )
    }

    fn render_form(&self, cx: &mut Context<Self>) -> SignInForm {
        let on_change = cx.entity().downgrade();
        let on_submit = on_change.clone();
        let on_secondary = on_change.clone();

        SignInForm::new(
            "sign-in",
            &self.sign_in,
            self.email.clone(),
            move |value, _window, cx| {
                let _ = on_change.update(cx, |workspace, cx| workspace.set_email(value, cx));
            },
            move |email, _window, cx| {
                let _ = on_submit.update(cx, |workspace, cx| workspace.submitted(email, cx));
            },
            move |_window, cx| {
                let _ = on_secondary.update(cx, |workspace, cx| workspace.secondary_action(cx));
            },
        )
        .loading(self.loading)
        .unknown_email(self.unknown_email)
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::background())
            .child(self.render_header(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_4()
                    .px_4()
                    .child(self.render_form(cx))
                    .child(
                        div()
                            .text_size(px(Typography::TINY))
                            .text_color(Palette::text_muted())
                            .child(self.status_text()),
                    ),
            )
    }
}
