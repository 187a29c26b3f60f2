// SPDX-License-Identifier: MPL-2.0
//! Page scroll model: section geometry, active-section tracking, and
//! the smooth-scroll animation.
//!
//! The whole page lives in a single scrollable. Section positions are
//! derived from the viewport size (each section's height is a multiple
//! of the viewport height), so the same math serves layout, the
//! progress bar, the indicator dots, and programmatic scrolling.

use crate::app::config::{HEADER_OFFSET_PX, SCROLL_ANIMATION_MS};
use crate::domain::section::{self, Section};
use iced::Size;
use std::time::{Duration, Instant};

/// Identifier of the page scrollable widget.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Footer height as a fraction of the viewport height.
pub const FOOTER_HEIGHT_FACTOR: f32 = 0.25;

/// Section heights as multiples of the viewport height. The work grid
/// is the tallest section; the hero fills exactly one screen.
fn height_factor(section: Section) -> f32 {
    match section {
        Section::Hero => 1.0,
        Section::Work => 1.6,
        Section::About => 1.2,
        Section::Services => 1.2,
        Section::Contact => 1.2,
    }
}

/// Computed vertical geometry of the page for a given viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    viewport: Size,
    tops: [f32; Section::ALL.len()],
    total_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut tops = [0.0; Section::ALL.len()];
        let mut cursor = 0.0;
        for (i, s) in Section::ALL.iter().enumerate() {
            tops[i] = cursor;
            cursor += height_factor(*s) * viewport.height;
        }
        let total_height = cursor + FOOTER_HEIGHT_FACTOR * viewport.height;

        Self {
            viewport,
            tops,
            total_height,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Distance from the top of the page to the top of a section.
    #[must_use]
    pub fn section_top(&self, section: Section) -> f32 {
        self.tops[section.index()]
    }

    #[must_use]
    pub fn section_height(&self, section: Section) -> f32 {
        height_factor(section) * self.viewport.height
    }

    /// Full page height including the footer.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// The largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.total_height - self.viewport.height).max(0.0)
    }

    /// Scroll offset that brings a section into view, leaving room for
    /// the fixed header. The hero always maps to the very top.
    #[must_use]
    pub fn scroll_target(&self, section: Section) -> f32 {
        if section == Section::Hero {
            return 0.0;
        }
        (self.section_top(section) - HEADER_OFFSET_PX).clamp(0.0, self.max_offset())
    }

    /// The section whose center is nearest to the viewport center at
    /// the given scroll offset.
    #[must_use]
    pub fn active_section(&self, offset: f32) -> Section {
        let target_center = offset + self.viewport.height / 2.0;
        let centers: Vec<(Section, f32)> = Section::ALL
            .iter()
            .map(|s| (*s, self.section_top(*s) + self.section_height(*s) / 2.0))
            .collect();
        section::nearest_to_center(&centers, target_center)
    }

    /// Reading progress through the page, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (offset / max).clamp(0.0, 1.0)
    }
}

/// An in-flight animated scroll between two offsets.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
            duration: Duration::from_millis(SCROLL_ANIMATION_MS),
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset after `elapsed` time, and whether the animation is done.
    #[must_use]
    pub fn sample_at(&self, elapsed: Duration) -> (f32, bool) {
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t);
        (self.from + (self.to - self.from) * eased, false)
    }

    /// Samples against the wall clock.
    #[must_use]
    pub fn sample(&self) -> (f32, bool) {
        self.sample_at(self.started.elapsed())
    }
}

/// Scroll state owned by the application root.
#[derive(Debug)]
pub struct PageState {
    /// Current absolute scroll offset, updated from `on_scroll`.
    pub offset: f32,
    /// Current viewport (window content) size.
    pub viewport: Size,
    /// In-flight smooth scroll, if any.
    pub animation: Option<ScrollAnimation>,
    /// Section targeted by the last programmatic scroll. Keeps the
    /// navbar highlight on the destination while the animation passes
    /// through intermediate sections.
    pub pending_target: Option<Section>,
    /// Last offset pushed by the animation, used to tell its echo from
    /// a user-initiated scroll.
    last_applied: Option<f32>,
}

impl PageState {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            offset: 0.0,
            viewport,
            animation: None,
            pending_target: None,
            last_applied: None,
        }
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout::new(self.viewport)
    }

    /// Records an offset reported by the scrollable widget.
    ///
    /// While an animation runs, the widget echoes back exactly the
    /// offsets [`Self::animation_frame`] applied; anything else is a
    /// user-initiated scroll and cancels the animation. With no
    /// animation running, any reported offset resolves the pending
    /// target: an instant jump resolves on its own echo, and every
    /// other offset is the user scrolling freely.
    pub fn record_offset(&mut self, offset: f32) {
        self.offset = offset;
        if self.animation.is_none() {
            self.pending_target = None;
            self.last_applied = None;
            return;
        }
        let echo = self
            .last_applied
            .is_some_and(|applied| (offset - applied).abs() <= 1.0);
        if !echo {
            self.animation = None;
            self.pending_target = None;
            self.last_applied = None;
        }
    }

    /// Starts a smooth scroll (or an instant jump when `reduced_motion`
    /// is set) toward a section. Returns the final offset for the
    /// instant case, `None` when an animation was started.
    pub fn scroll_to_section(&mut self, target: Section, reduced_motion: bool) -> Option<f32> {
        let destination = self.layout().scroll_target(target);
        self.pending_target = Some(target);
        if reduced_motion {
            self.animation = None;
            self.last_applied = None;
            Some(destination)
        } else {
            self.animation = Some(ScrollAnimation::new(self.offset, destination));
            self.last_applied = Some(self.offset);
            None
        }
    }

    /// Advances the animation by one tick. Returns the offset to apply
    /// to the scrollable, or `None` when no animation is running.
    pub fn animation_frame(&mut self) -> Option<f32> {
        let animation = self.animation?;
        let (offset, finished) = animation.sample();
        self.last_applied = Some(offset);
        if finished {
            self.animation = None;
            self.pending_target = None;
        }
        Some(offset)
    }

    /// The section to highlight in the chrome: the scroll destination
    /// while animating, otherwise the section nearest the viewport
    /// center.
    #[must_use]
    pub fn highlighted_section(&self) -> Section {
        self.pending_target
            .unwrap_or_else(|| self.layout().active_section(self.offset))
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        // Geometry shifted under the animation; drop it rather than
        // land on a stale target.
        self.animation = None;
        self.pending_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::new(Size::new(1280.0, 800.0))
    }

    #[test]
    fn ease_out_cubic_hits_both_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let layout = layout();
        let mut last_top = -1.0;
        for s in Section::ALL {
            let top = layout.section_top(s);
            assert!(top > last_top, "{s:?} should start after the previous");
            last_top = top;
        }
    }

    #[test]
    fn hero_starts_at_zero_and_fills_the_viewport() {
        let layout = layout();
        assert_eq!(layout.section_top(Section::Hero), 0.0);
        assert_eq!(layout.section_height(Section::Hero), 800.0);
        assert_eq!(layout.section_top(Section::Work), 800.0);
    }

    #[test]
    fn total_height_includes_the_footer() {
        let layout = layout();
        let sections: f32 = Section::ALL
            .iter()
            .map(|s| layout.section_height(*s))
            .sum();
        assert!(layout.total_height() > sections);
    }

    #[test]
    fn scroll_target_leaves_header_room() {
        let layout = layout();
        assert_eq!(
            layout.scroll_target(Section::Work),
            layout.section_top(Section::Work) - HEADER_OFFSET_PX
        );
    }

    #[test]
    fn scroll_target_for_hero_is_the_top() {
        assert_eq!(layout().scroll_target(Section::Hero), 0.0);
    }

    #[test]
    fn scroll_target_is_clamped_to_max_offset() {
        let layout = layout();
        assert!(layout.scroll_target(Section::Contact) <= layout.max_offset());
    }

    #[test]
    fn active_section_at_top_is_hero() {
        assert_eq!(layout().active_section(0.0), Section::Hero);
    }

    #[test]
    fn active_section_at_bottom_is_contact() {
        let layout = layout();
        assert_eq!(layout.active_section(layout.max_offset()), Section::Contact);
    }

    #[test]
    fn active_section_tracks_the_viewport_center() {
        let layout = layout();
        let work_center =
            layout.section_top(Section::Work) + layout.section_height(Section::Work) / 2.0;
        let offset = work_center - 400.0; // viewport h / 2
        assert_eq!(layout.active_section(offset), Section::Work);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let layout = layout();
        assert_eq!(layout.progress(0.0), 0.0);
        assert_eq!(layout.progress(layout.max_offset()), 1.0);
        let halfway = layout.progress(layout.max_offset() / 2.0);
        assert!(halfway > 0.4 && halfway < 0.6);
    }

    #[test]
    fn progress_is_clamped_on_overscroll() {
        let layout = layout();
        assert_eq!(layout.progress(layout.max_offset() + 500.0), 1.0);
        assert_eq!(layout.progress(-50.0), 0.0);
    }

    #[test]
    fn zero_height_viewport_has_no_scroll_range() {
        let layout = PageLayout::new(Size::new(1280.0, 0.0));
        assert_eq!(layout.max_offset(), 0.0);
        assert_eq!(layout.progress(100.0), 0.0);
    }

    #[test]
    fn animation_starts_at_from_and_ends_at_to() {
        let animation = ScrollAnimation::new(0.0, 1000.0);
        let (start, done) = animation.sample_at(Duration::ZERO);
        assert_eq!(start, 0.0);
        assert!(!done);

        let (end, done) = animation.sample_at(Duration::from_millis(SCROLL_ANIMATION_MS));
        assert_eq!(end, 1000.0);
        assert!(done);
    }

    #[test]
    fn animation_eases_out() {
        let animation = ScrollAnimation::new(0.0, 1000.0);
        let half = Duration::from_millis(SCROLL_ANIMATION_MS / 2);
        let (mid, _) = animation.sample_at(half);
        // Ease-out covers more than half the distance in the first half.
        assert!(mid > 500.0);
        assert!(mid < 1000.0);
    }

    #[test]
    fn animation_is_monotonic() {
        let animation = ScrollAnimation::new(200.0, 1400.0);
        let mut last = 0.0;
        for ms in (0..=SCROLL_ANIMATION_MS).step_by(50) {
            let (value, _) = animation.sample_at(Duration::from_millis(ms));
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn reduced_motion_jumps_instantly() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        let jump = state.scroll_to_section(Section::Services, true);
        assert!(jump.is_some());
        assert!(state.animation.is_none());
        assert_eq!(state.pending_target, Some(Section::Services));
    }

    #[test]
    fn smooth_scroll_starts_an_animation() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        let jump = state.scroll_to_section(Section::Contact, false);
        assert!(jump.is_none());
        assert!(state.animation.is_some());
    }

    #[test]
    fn highlight_sticks_to_target_while_animating() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        state.scroll_to_section(Section::Contact, false);
        // Still at offset 0 (hero), but the highlight follows the target.
        assert_eq!(state.highlighted_section(), Section::Contact);
    }

    #[test]
    fn manual_scroll_cancels_the_animation() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        state.scroll_to_section(Section::Contact, false);
        // An offset far from the animation's current sample means the
        // user grabbed the scrollbar.
        state.record_offset(3000.0);
        assert!(state.animation.is_none());
        assert!(state.pending_target.is_none());
    }

    #[test]
    fn reduced_motion_jump_releases_the_highlight() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        let jump = state.scroll_to_section(Section::Contact, true);
        assert!(jump.is_some());
        // The widget reports the user back at the top; the highlight
        // must track the viewport again, not the old click target.
        state.record_offset(0.0);
        assert_eq!(state.highlighted_section(), Section::Hero);
    }

    #[test]
    fn jump_echo_resolves_the_pending_target() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        let destination = state
            .scroll_to_section(Section::Services, true)
            .expect("instant jump returns a destination");
        state.record_offset(destination);
        assert!(state.pending_target.is_none());
        assert_eq!(state.offset, destination);
    }

    #[test]
    fn resize_drops_the_animation() {
        let mut state = PageState::new(Size::new(1280.0, 800.0));
        state.scroll_to_section(Section::Work, false);
        state.resize(Size::new(900.0, 600.0));
        assert!(state.animation.is_none());
    }
}
