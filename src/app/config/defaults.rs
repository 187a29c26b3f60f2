// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and tuning constants.
//!
//! Single source of truth for the timing and layout numbers used across
//! the application, organized by category.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 900.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long a toast stays on screen before auto-dismissal, in
/// milliseconds. All toast categories share the same duration.
pub const TOAST_DURATION_MS: u64 = 4000;

/// Housekeeping tick interval in milliseconds (toast expiry, success
/// holds). Runs only while there is pending work.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Animation tick interval in milliseconds (smooth scrolling), roughly
/// one frame at 60 Hz.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Vertical offset subtracted from a section's top when scrolling to
/// it, so the fixed header never covers the section heading.
pub const HEADER_OFFSET_PX: f32 = 100.0;

/// Scroll offset past which the navigation bar condenses.
pub const NAVBAR_CONDENSE_THRESHOLD_PX: f32 = 50.0;

/// Window width below which the navbar collapses its link row behind a
/// menu toggle.
pub const COMPACT_NAV_WIDTH_PX: f32 = 1000.0;

/// Duration of an animated scroll to a section, in milliseconds.
pub const SCROLL_ANIMATION_MS: u64 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);

    assert!(TOAST_DURATION_MS > 0);
    assert!(TICK_INTERVAL_MS > 0);
    // Expiry checks happen on the housekeeping tick, so it must be
    // finer-grained than the things it expires.
    assert!(TICK_INTERVAL_MS < TOAST_DURATION_MS);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(ANIMATION_TICK_MS <= TICK_INTERVAL_MS);

    assert!(HEADER_OFFSET_PX >= 0.0);
    assert!(NAVBAR_CONDENSE_THRESHOLD_PX >= 0.0);
    // Compact mode must be reachable within the allowed window sizes.
    assert!(MIN_WINDOW_WIDTH < COMPACT_NAV_WIDTH_PX);
    assert!(SCROLL_ANIMATION_MS > 0);
};
