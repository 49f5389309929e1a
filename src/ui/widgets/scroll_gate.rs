// SPDX-License-Identifier: MPL-2.0
//! Transparent wrapper that drops wheel events while a modal scroll
//! lock is engaged. The page scrollable stays put under an open overlay
//! and resumes scrolling the moment the overlay closes, without the
//! shell having to rebuild the widget tree.

use crate::lightbox::ScrollLock;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wrap `content` so its wheel events are gated by `lock`.
pub fn scroll_gate<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    lock: ScrollLock,
) -> ScrollGate<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollGate {
        inner: content.into(),
        lock,
    }
}

/// See [`scroll_gate`].
pub struct ScrollGate<'a, Message, Theme, Renderer> {
    inner: Element<'a, Message, Theme, Renderer>,
    lock: ScrollLock,
}

impl<'a, Message, Theme, Renderer> ScrollGate<'a, Message, Theme, Renderer> {
    fn swallows(&self, event: &Event) -> bool {
        self.lock.is_engaged() && matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGate<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.inner)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.inner]);
    }

    fn size(&self) -> Size<Length> {
        self.inner.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let child = &mut tree.children[0];
        self.inner.as_widget_mut().layout(child, renderer, limits)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.swallows(event) {
            return;
        }

        let child = &mut tree.children[0];
        self.inner
            .as_widget_mut()
            .update(child, event, layout, cursor, renderer, clipboard, shell, viewport);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let child = &tree.children[0];
        self.inner
            .as_widget()
            .draw(child, renderer, theme, style, layout, cursor, viewport);
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let child = &tree.children[0];
        self.inner
            .as_widget()
            .mouse_interaction(child, layout, cursor, viewport, renderer)
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        let child = &mut tree.children[0];
        self.inner
            .as_widget_mut()
            .operate(child, layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let child = &mut tree.children[0];
        self.inner
            .as_widget_mut()
            .overlay(child, layout, renderer, viewport, translation)
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollGate<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(gate: ScrollGate<'a, Message, Theme, Renderer>) -> Self {
        Self::new(gate)
    }
}
