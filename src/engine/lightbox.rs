// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox session.
//!
//! At most one session exists at a time; opening while another is active
//! replaces it. Navigation wraps modularly in both directions. Navigation
//! and close requests arriving while no session is open are stale input
//! from the just-dismissed overlay and are dropped silently.

use crate::content::ImageRef;

/// The active lightbox session, if any.
#[derive(Debug, Clone, Default)]
pub struct LightboxState {
    session: Option<Session>,
}

#[derive(Debug, Clone)]
struct Session {
    images: Vec<ImageRef>,
    index: usize,
}

/// Read-only view of an open session, handed to the overlay renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxView<'a> {
    pub image: &'a ImageRef,
    pub index: usize,
    pub len: usize,
}

impl LightboxView<'_> {
    /// Position counter, one-based and zero-padded: `04 / 09`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{:02} / {:02}", self.index + 1, self.len)
    }
}

impl LightboxState {
    /// Opens a session over `images` starting at `start`.
    ///
    /// Callers must pass a non-empty sequence and an in-range start index;
    /// anything else is a caller bug. Debug builds assert, release builds
    /// drop an empty open and clamp an out-of-range start.
    pub fn open(&mut self, images: Vec<ImageRef>, start: usize) {
        debug_assert!(!images.is_empty(), "lightbox opened with no images");
        debug_assert!(
            images.is_empty() || start < images.len(),
            "lightbox start index {start} out of range for {} images",
            images.len()
        );

        if images.is_empty() {
            return;
        }
        let index = start.min(images.len() - 1);
        self.session = Some(Session { images, index });
    }

    /// Advances to the next image, wrapping past the end.
    pub fn next(&mut self) {
        if let Some(session) = &mut self.session {
            session.index = (session.index + 1) % session.images.len();
        }
    }

    /// Steps back to the previous image, wrapping past the start.
    pub fn previous(&mut self) {
        if let Some(session) = &mut self.session {
            session.index =
                (session.index + session.images.len() - 1) % session.images.len();
        }
    }

    /// Dismisses the session. Safe to call when none is open.
    pub fn close(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Snapshot of the open session for rendering.
    #[must_use]
    pub fn view(&self) -> Option<LightboxView<'_>> {
        self.session.as_ref().map(|session| LightboxView {
            image: &session.images[session.index],
            index: session.index,
            len: session.images.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets(count: usize) -> Vec<ImageRef> {
        (1..=count)
            .map(|i| ImageRef::new(format!("assets/test/sheet-{i:02}.jpg")))
            .collect()
    }

    #[test]
    fn open_starts_at_requested_index() {
        let mut state = LightboxState::default();
        state.open(sheets(9), 3);

        let view = state.view().expect("session open");
        assert_eq!(view.index, 3);
        assert_eq!(view.len, 9);
        assert_eq!(view.image.as_str(), "assets/test/sheet-04.jpg");
    }

    #[test]
    fn next_wraps_past_the_end() {
        let mut state = LightboxState::default();
        state.open(sheets(3), 2);

        state.next();
        assert_eq!(state.view().expect("open").index, 0);
    }

    #[test]
    fn previous_wraps_past_the_start() {
        let mut state = LightboxState::default();
        state.open(sheets(3), 0);

        state.previous();
        assert_eq!(state.view().expect("open").index, 2);
    }

    #[test]
    fn single_image_wraps_to_itself() {
        let mut state = LightboxState::default();
        state.open(sheets(1), 0);

        state.next();
        assert_eq!(state.view().expect("open").index, 0);
        state.previous();
        assert_eq!(state.view().expect("open").index, 0);
    }

    #[test]
    fn navigation_after_close_is_a_no_op() {
        let mut state = LightboxState::default();
        state.open(sheets(3), 1);
        state.close();

        state.next();
        state.previous();
        state.close();
        assert!(!state.is_open());
        assert!(state.view().is_none());
    }

    #[test]
    fn navigation_before_any_open_is_a_no_op() {
        let mut state = LightboxState::default();
        state.next();
        state.previous();
        assert!(!state.is_open());
    }

    #[test]
    fn reopening_replaces_the_session() {
        let mut state = LightboxState::default();
        state.open(sheets(9), 5);
        state.open(sheets(2), 1);

        let view = state.view().expect("session open");
        assert_eq!(view.len, 2);
        assert_eq!(view.index, 1);
    }

    #[test]
    fn counter_label_is_one_based_and_padded() {
        let mut state = LightboxState::default();
        state.open(sheets(9), 3);
        assert_eq!(state.view().expect("open").counter_label(), "04 / 09");

        state.open(sheets(12), 11);
        assert_eq!(state.view().expect("open").counter_label(), "12 / 12");
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn release_build_ignores_empty_open() {
        let mut state = LightboxState::default();
        state.open(Vec::new(), 0);
        assert!(!state.is_open());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn release_build_clamps_out_of_range_start() {
        let mut state = LightboxState::default();
        state.open(sheets(3), 7);
        assert_eq!(state.view().expect("open").index, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no images")]
    fn debug_build_rejects_empty_open() {
        let mut state = LightboxState::default();
        state.open(Vec::new(), 0);
    }
}
