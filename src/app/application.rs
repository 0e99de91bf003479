//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::config::AppConfig;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::i18n::t;

actions!(signin, [Quit]);

/// Global keyboard bindings
pub fn key_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding::new("secondary-q", Quit, None)]
}

/// Run the sign-in demo application
pub fn run_app(config: AppConfig) {
    let locale = config.resolved_locale();
    info!(locale = locale.tag(), "Resolved locale");

    Application::new().run(move |cx: &mut App| {
        // Theme and text input key bindings
        gpui_component::init(cx);

        cx.bind_keys(key_bindings());

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let width = config.window.width.max(MIN_WINDOW_WIDTH);
        let height = config.window.height.max(MIN_WINDOW_HEIGHT);
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "demo.title", "Sign In")),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(locale, window, cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        }) {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
