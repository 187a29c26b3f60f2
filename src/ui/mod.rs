// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized as Elm-style components, "state down, messages up":
//!
//! - [`sections`] - The five page sections plus the footer
//! - [`signup_modal`] - Account signup dialog with password strength meter
//! - [`navbar`] - Fixed navigation bar with section links
//! - [`progress_bar`] - Thin read-progress bar across the top edge
//! - [`scroll_indicator`] - Per-section dot rail on the right edge
//! - [`scroll`] - Page geometry, smooth-scroll animation, scroll state
//! - [`background`] - Animated wireframe canvas behind the content
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (submit spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod background;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod progress_bar;
pub mod scroll;
pub mod scroll_indicator;
pub mod sections;
pub mod signup_modal;
pub mod styles;
pub mod theming;
pub mod widgets;
