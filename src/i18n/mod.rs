// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system: `.ftl` translation files are
//! embedded in the binary, the locale is resolved from CLI, config, or
//! the OS at startup, and every user-facing string goes through
//! [`fluent::I18n::tr`].

pub mod fluent;

pub use fluent::I18n;
