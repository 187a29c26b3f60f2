// SPDX-License-Identifier: MPL-2.0
//! `rofa_studio` is a single-page studio portfolio built with the Iced
//! GUI framework.
//!
//! One scrollable page of five sections over an animated wireframe
//! background, with smooth programmatic scrolling, validated contact
//! and signup forms whose drafts persist to disk, toast notifications,
//! and Fluent-based internationalization.

#![doc(html_root_url = "https://docs.rs/rofa_studio/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
