// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::scroll_indicator;
use crate::ui::sections::{contact, footer, hero};
use crate::ui::signup_modal;
use iced::widget::scrollable::Viewport;
use iced::{Point, Size};
use std::time::Instant;

/// Command-line flags parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang fr`.
    pub lang: Option<String>,
    /// Draft storage override, e.g. `--data-dir /tmp/rofa`.
    pub data_dir: Option<String>,
    /// Config storage override, e.g. `--config-dir /tmp/rofa-config`.
    pub config_dir: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Contact(contact::Message),
    Signup(signup_modal::Message),
    Footer(footer::Message),
    ScrollIndicator(scroll_indicator::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable reported a new offset.
    PageScrolled(Viewport),
    WindowResized(Size),
    /// Escape closes the signup modal.
    EscapePressed,
    /// Cursor moved inside the window; drives background parallax.
    PointerMoved(Point),
    PointerLeft,
    /// Housekeeping tick (toast expiry, success holds), 100 ms.
    Tick(Instant),
    /// Animation frame tick (smooth scroll, scene, counters), ~16 ms.
    AnimationTick(Instant),
}
