//! Card Component
//!
//! A bordered container with a body and an optional tinted footer row.

use gpui::{
    AnyElement, App, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement, Pixels,
    RenderOnce, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::Palette;

type MouseHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Card component
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    max_width: Pixels,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_mouse_down: Option<MouseHandler>,
}

impl Card {
    /// Create a new card
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            max_width: px(480.0),
            children: Vec::new(),
            footer: Vec::new(),
            on_mouse_down: None,
        }
    }

    pub fn max_w(mut self, width: Pixels) -> Self {
        self.max_width = width;
        self
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add several body elements; `Option`s add zero or one
    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }

    /// Add an element to the footer row
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Called when the card surface is pressed outside any child that stops propagation
    pub fn on_mouse_down(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_mouse_down = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_footer = !self.footer.is_empty();

        div()
            .id(self.id)
            .w_full()
            .max_w(self.max_width)
            .bg(Palette::card_bg())
            .border_1()
            .border_color(Palette::border())
            .rounded_lg()
            .shadow_md()
            .overflow_hidden()
            .flex()
            .flex_col()
            .when_some(self.on_mouse_down, |el, handler| {
                el.on_mouse_down(MouseButton::Left, move |_event, window, cx| handler(window, cx))
            })
            // Body
            .child(div().px_6().py_6().flex().flex_col().children(self.children))
            // Footer
            .when(has_footer, |el| {
                el.child(
                    div()
                        .px_6()
                        .py_3()
                        .bg(Palette::footer_bg())
                        .border_t_1()
                        .border_color(Palette::border())
                        .flex()
                        .items_center()
                        .justify_between()
                        .children(self.footer),
                )
            })
    }
}
