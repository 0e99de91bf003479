//! LiveRegion Component
//!
//! Small block of text whose content is meant to be announced assertively as
//! soon as it changes. GPUI has no accessibility tree, so the region is
//! identified by its element id.

use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, RenderOnce, Rgba, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::typography::Typography;

#[derive(IntoElement)]
pub struct LiveRegion {
    id: ElementId,
    color: Rgba,
    children: Vec<AnyElement>,
}

impl LiveRegion {
    pub fn new(id: impl Into<ElementId>, color: Rgba) -> Self {
        Self {
            id: id.into(),
            color,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for LiveRegion {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id(self.id)
            .w_full()
            .pt_2()
            .flex()
            .flex_wrap()
            .items_center()
            .gap_1()
            .text_color(self.color)
            .text_size(px(Typography::TINY))
            .line_height(px(Typography::TINY_LINE_HEIGHT))
            .children(self.children)
    }
}
