// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports how much of its content is visible.
//!
//! On each redraw the probe intersects its layout bounds with the current
//! viewport and, once the visible fraction reaches the configured threshold,
//! publishes a sighting message. The receiving side latches the region and
//! stops wrapping it in a probe, so duplicate sightings are bounded to the
//! frames before the next view rebuild and are dropped there.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size};

/// A widget that wraps content and reports its visible fraction.
pub struct RegionProbe<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    threshold: f32,
    on_sighting: Box<dyn Fn(f32) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> RegionProbe<'a, Message, Theme, Renderer> {
    /// Wraps `content`, publishing `on_sighting` with the measured fraction
    /// once at least `threshold` of the content's area is inside the
    /// viewport.
    pub fn new(
        threshold: f32,
        on_sighting: impl Fn(f32) -> Message + 'a,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            content: content.into(),
            threshold,
            on_sighting: Box::new(on_sighting),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for RegionProbe<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
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
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
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
        if matches!(event, Event::Window(window::Event::RedrawRequested(_))) {
            let fraction = visible_fraction(layout.bounds(), viewport);
            if fraction >= self.threshold {
                shell.publish((self.on_sighting)(fraction));
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<RegionProbe<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(probe: RegionProbe<'a, Message, Theme, Renderer>) -> Self {
        Self::new(probe)
    }
}

/// Helper function to create a region probe wrapper.
pub fn region_probe<'a, Message, Theme, Renderer>(
    threshold: f32,
    on_sighting: impl Fn(f32) -> Message + 'a,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> RegionProbe<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    RegionProbe::new(threshold, on_sighting, content)
}

/// Fraction of `bounds` covered by `viewport`, in `[0, 1]`.
///
/// Degenerate bounds report zero so a zero-area layout pass can never
/// trigger a sighting.
fn visible_fraction(bounds: Rectangle, viewport: &Rectangle) -> f32 {
    let area = bounds.width * bounds.height;
    if area <= 0.0 {
        return 0.0;
    }

    match bounds.intersection(viewport) {
        Some(overlap) => (overlap.width * overlap.height / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn fully_visible_region_reports_one() {
        let bounds = rect(0.0, 100.0, 800.0, 400.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        assert!((visible_fraction(bounds, &viewport) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn half_scrolled_region_reports_half() {
        let bounds = rect(0.0, 400.0, 800.0, 400.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let fraction = visible_fraction(bounds, &viewport);
        assert!((fraction - 0.5).abs() < 1e-4);
    }

    #[test]
    fn offscreen_region_reports_zero() {
        let bounds = rect(0.0, 1000.0, 800.0, 400.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        assert_eq!(visible_fraction(bounds, &viewport), 0.0);
    }

    #[test]
    fn zero_area_bounds_report_zero() {
        let bounds = rect(0.0, 0.0, 800.0, 0.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        assert_eq!(visible_fraction(bounds, &viewport), 0.0);
    }

    #[test]
    fn tall_region_inside_short_viewport_reports_partial() {
        // A 2000px section in a 600px window can show at most 30% of itself.
        let bounds = rect(0.0, 0.0, 800.0, 2000.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let fraction = visible_fraction(bounds, &viewport);
        assert!((fraction - 0.3).abs() < 1e-4);
    }
}
