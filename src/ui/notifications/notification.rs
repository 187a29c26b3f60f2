// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::app::config::TOAST_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Opaque, time-based unique identifier for a toast.
///
/// Built from the wall-clock millisecond the toast was created plus a
/// process-wide sequence counter, so two toasts created within the same
/// millisecond still get distinct IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates the next unique ID.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static SEQUENCE: AtomicU64 = AtomicU64::new(0);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        // 10 bits of sequence is plenty within a single millisecond.
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed) & 0x3FF;
        Self((millis << 10) | seq)
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::next()
    }
}

/// Severity level, determining color and icon. Unlike duration-per-level
/// schemes, every severity shares the same fixed display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed (green, checkmark).
    #[default]
    Success,
    /// Operation failed (red, cross).
    Error,
    /// Neutral information (blue, circled i).
    Info,
    /// Non-blocking problem (orange, warning sign).
    Warning,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Returns the icon glyph shown next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}",
            Severity::Error => "\u{2715}",
            Severity::Info => "\u{2139}",
            Severity::Warning => "\u{26A0}",
        }
    }
}

/// How long every toast stays on screen.
#[must_use]
pub fn display_duration() -> Duration {
    Duration::from_millis(TOAST_DURATION_MS)
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: ToastId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a notification with the given severity and message key.
    /// The key is resolved through i18n at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: ToastId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Whether the fixed display window has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age() >= display_duration()
    }

    /// Rewinds the creation time, simulating elapsed display time.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created_at -= by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_allocated_in_a_tight_loop_stay_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(ToastId::next()));
        }
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Error.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_severity_shares_the_same_display_window() {
        assert_eq!(display_duration(), Duration::from_millis(4000));
    }

    #[test]
    fn fresh_notification_is_not_expired() {
        let notification = Notification::error("test-error");
        assert!(!notification.is_expired());
    }

    #[test]
    fn notification_expires_once_the_display_window_elapses() {
        let mut notification = Notification::success("test");

        notification.backdate(Duration::from_millis(3000));
        assert!(!notification.is_expired());

        notification.backdate(Duration::from_millis(1000));
        assert!(notification.is_expired());
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::error("").severity(), Severity::Error);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
    }

    #[test]
    fn builder_collects_message_args() {
        let notification = Notification::success("toast-copied")
            .with_arg("label", "Email")
            .with_arg("value", "hello@rofa.ai");

        assert_eq!(notification.message_key(), "toast-copied");
        assert_eq!(notification.message_args().len(), 2);
    }
}
