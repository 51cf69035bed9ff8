// SPDX-License-Identifier: MPL-2.0
//! Page sections in scroll order.
//!
//! Every section renders from a shared read-only [`PageContext`]; interaction
//! flows back out through [`Message`] values that the application maps onto
//! engine commands. Sections never mutate state directly.

pub mod about;
pub mod contact;
pub mod hero;
pub mod showcase;
pub mod skills;

use crate::content::{Catalog, ImageRef};
use crate::engine::{MediaTab, ShowcaseEngine};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::state::EntranceTimeline;
use crate::ui::styles;
use crate::ui::theme::ColorScheme;
use crate::ui::widgets::region_probe::region_probe;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};

/// Widget id of the page scrollable, used for programmatic section jumps.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Contact address used by the hire-me capsule and the contact section.
pub const CONTACT_EMAIL: &str = "jeremy@example.com";

/// Social profiles listed in the contact section. Clicking copies the URL.
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://linkedin.com"),
    ("GitHub", "https://github.com"),
    ("Instagram", "https://instagram.com"),
];

/// Region identifiers for entrance reveals.
///
/// One id per independently animated block; sub-blocks of a section reveal
/// on their own when they carry their own id.
pub mod region {
    pub const HERO: &str = "hero";
    pub const SHOWCASE: &str = "showcase";
    pub const ABOUT_INTRO: &str = "about-intro";
    pub const ABOUT_SKILLS: &str = "about-skills";
    pub const SKILLS: &str = "skills";
    pub const SKILLS_QUOTE: &str = "skills-quote";
    pub const CONTACT: &str = "contact";
    pub const CONTACT_DETAILS: &str = "contact-details";
}

/// One region the application watches for its scroll reveal.
#[derive(Debug, Clone, Copy)]
pub struct RegionPlan {
    pub id: &'static str,
    /// Fraction of the region that must be visible before the reveal latches.
    pub threshold: f32,
    /// Staggered item count, used to size the animation window.
    pub items: usize,
}

/// Scroll-watched regions. The hero is absent: it reveals on startup.
pub const WATCHED_REGIONS: [RegionPlan; 7] = [
    RegionPlan { id: region::SHOWCASE, threshold: 0.05, items: 4 },
    RegionPlan { id: region::ABOUT_INTRO, threshold: 0.05, items: 10 },
    RegionPlan { id: region::ABOUT_SKILLS, threshold: 0.1, items: 8 },
    RegionPlan { id: region::SKILLS, threshold: 0.05, items: 6 },
    RegionPlan { id: region::SKILLS_QUOTE, threshold: 0.1, items: 2 },
    RegionPlan { id: region::CONTACT, threshold: 0.05, items: 5 },
    RegionPlan { id: region::CONTACT_DETAILS, threshold: 0.1, items: 6 },
];

/// Staggered item count of the hero block revealed at startup.
pub const HERO_ITEMS: usize = 6;

/// Looks up the watch plan of a region.
#[must_use]
pub fn plan_of(region_id: &str) -> Option<&'static RegionPlan> {
    WATCHED_REGIONS.iter().find(|plan| plan.id == region_id)
}

/// Section anchors reachable from the navigation bar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Projects,
    About,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Skills,
        Section::Contact,
    ];

    /// Approximate scroll position of the section within the page.
    ///
    /// Tuned to the collapsed section heights; expanding cases shifts the
    /// later anchors slightly, which is acceptable for jump navigation.
    #[must_use]
    pub fn anchor(self) -> RelativeOffset {
        let y = match self {
            Section::Home => 0.0,
            Section::Projects => 0.2,
            Section::About => 0.45,
            Section::Skills => 0.7,
            Section::Contact => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Projects => "nav-projects",
            Section::About => "nav-about",
            Section::Skills => "nav-skills",
            Section::Contact => "nav-contact",
        }
    }
}

/// Messages emitted by the page sections.
#[derive(Debug, Clone)]
pub enum Message {
    /// A disclosure row was clicked.
    ToggleItem(String),
    /// A media tab of an expanded case was selected.
    SelectTab(String, MediaTab),
    /// An image or gallery tile asked for the lightbox.
    OpenLightbox { images: Vec<ImageRef>, start: usize },
    /// A navigation affordance inside a section was used.
    JumpTo(Section),
    /// A contact link was clicked; the value goes to the clipboard.
    CopyContact(&'static str),
    /// A watched region crossed its visibility threshold.
    RegionSighted {
        region: &'static str,
        fraction: f32,
    },
}

/// Read-only state shared by every section view.
pub struct PageContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub engine: &'a ShowcaseEngine,
    pub entrance: &'a EntranceTimeline,
    /// Colors of the active theme, resolved once per view pass.
    pub scheme: ColorScheme,
    pub now: Instant,
    pub reveal_enabled: bool,
    pub base_delay: Duration,
    pub step_delay: Duration,
}

impl PageContext<'_> {
    /// Entrance opacity of the item at `index` inside a region.
    ///
    /// With reveals disabled everything renders fully opaque; the latch
    /// state still advances through the engine either way.
    #[must_use]
    pub fn reveal(&self, region_id: &str, index: usize) -> f32 {
        if !self.reveal_enabled {
            return 1.0;
        }
        self.entrance
            .opacity(region_id, index, self.base_delay, self.step_delay, self.now)
    }
}

/// The whole page: all sections stacked in scroll order.
pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx))
        .push(showcase::view(ctx))
        .push(about::view(ctx))
        .push(skills::view(ctx))
        .push(contact::view(ctx))
        .into()
}

/// Wraps `content` in a one-shot visibility probe while the region is still
/// watched. Latched regions render unwrapped, so the probe detaches itself
/// from the widget tree after its single report.
pub fn probed<'a>(
    ctx: &PageContext<'a>,
    region_id: &'static str,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    if !ctx.engine.is_watched(region_id) {
        return content;
    }
    let threshold = plan_of(region_id).map_or(1.0, |plan| plan.threshold);
    region_probe(
        threshold,
        move |fraction| Message::RegionSighted {
            region: region_id,
            fraction,
        },
        content,
    )
    .into()
}

/// Applies an entrance fraction to a color's alpha channel.
#[must_use]
pub fn faded(color: Color, reveal: f32) -> Color {
    Color {
        a: color.a * reveal,
        ..color
    }
}

/// Uppercase tracked caption above a section heading.
pub(crate) fn eyebrow<'a>(ctx: &PageContext<'a>, label: String, reveal: f32) -> Text<'a> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(faded(ctx.scheme.text_faint, reveal))
}

/// Oversized heading lines; muted lines render ghosted and indented.
pub(crate) fn display_lines<'a>(
    ctx: &PageContext<'a>,
    region_id: &str,
    lines: &[(String, bool)],
    first_index: usize,
) -> Column<'a, Message> {
    let mut column = Column::new();
    for (offset, (line, muted)) in lines.iter().enumerate() {
        let reveal = ctx.reveal(region_id, first_index + offset);
        let base = if *muted {
            ctx.scheme.text_ghost
        } else {
            ctx.scheme.text_display
        };
        let text = Text::new(line.clone())
            .size(typography::DISPLAY_XL)
            .color(faded(base, reveal));
        let row = if *muted {
            Container::new(text).padding(iced::Padding::ZERO.left(96.0))
        } else {
            Container::new(text)
        };
        column = column.push(row);
    }
    column
}

/// Centers section content inside the page's maximum content width.
pub(crate) fn content_band<'a>(
    inner: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    let body = Container::new(inner)
        .max_width(crate::ui::design_tokens::sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);
    Container::new(body)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
}

/// Ghosted single-line text band under a hairline, standing in for the
/// scrolling marquee strips of the page design.
pub(crate) fn marquee_band<'a>(
    ctx: &PageContext<'a>,
    label: String,
    size: f32,
    alpha: f32,
) -> Element<'a, Message> {
    let strip = Container::new(Text::new(label).size(size).color(Color {
        a: alpha,
        ..ctx.scheme.text_display
    }))
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .clip(true);

    Column::new()
        .width(Length::Fill)
        .push(horizontal_rule(1).style(styles::container::hairline))
        .push(strip)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_plan_covers_every_region_except_hero() {
        assert!(plan_of(region::HERO).is_none());
        for plan in &WATCHED_REGIONS {
            assert!(plan.threshold > 0.0 && plan.threshold <= 1.0);
            assert!(plan.items > 0);
        }
    }

    #[test]
    fn section_anchors_increase_down_the_page() {
        let offsets: Vec<f32> = Section::ALL.iter().map(|s| s.anchor().y).collect();
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(offsets.first(), Some(&0.0));
        assert_eq!(offsets.last(), Some(&1.0));
    }

    #[test]
    fn faded_scales_existing_alpha() {
        let half = faded(Color { a: 0.5, ..Color::WHITE }, 0.5);
        assert!((half.a - 0.25).abs() < f32::EPSILON);
    }
}
