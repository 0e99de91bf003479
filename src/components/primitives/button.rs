//! Button Component

use gpui::{
    App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, Pixels,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary action button
    #[default]
    Primary,
    /// Inline text rendered like a hyperlink
    Link,
    /// Transparent button for dark header bars
    Ghost,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    loading: bool,
    loading_label: SharedString,
    bold: bool,
    min_width: Option<Pixels>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            disabled: false,
            loading: false,
            loading_label: SharedString::from("Loading..."),
            bold: false,
            min_width: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading. A loading button is also disabled.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Label shown in place of the regular one while loading
    pub fn loading_label(mut self, label: impl Into<SharedString>) -> Self {
        self.loading_label = label.into();
        self
    }

    /// Render the label in bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn min_w(mut self, width: Pixels) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a link-styled button
    pub fn link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Link)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    fn interactive(&self) -> bool {
        !self.disabled && !self.loading
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let interactive = self.interactive();
        let opacity = if interactive { 1.0 } else { 0.5 };
        let weight = if self.bold {
            FontWeight::BOLD
        } else {
            FontWeight::SEMIBOLD
        };

        let label = if self.loading {
            self.loading_label
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .font_weight(weight)
            .opacity(opacity)
            .when_some(self.min_width, |el, width| el.min_w(width))
            .child(label);

        element = match self.variant {
            ButtonVariant::Primary => element
                .px(px(20.0))
                .py(px(8.0))
                .rounded_full()
                .bg(Palette::primary())
                .text_color(Palette::button_primary_text())
                .text_size(px(Typography::PARAGRAPH))
                .when(interactive, |el| el.hover(|s| s.bg(Palette::primary_hover()))),
            ButtonVariant::Link => element
                .text_color(Palette::primary())
                .when(interactive, |el| {
                    el.hover(|s| s.text_color(Palette::primary_hover()))
                }),
            ButtonVariant::Ghost => element
                .px_3()
                .py_1()
                .rounded_md()
                .text_color(Palette::text_light())
                .text_size(px(Typography::TINY))
                .when(interactive, |el| el.hover(|s| s.bg(Palette::button_ghost_hover()))),
        };

        if interactive {
            element = element.cursor_pointer();

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
