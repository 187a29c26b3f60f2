// SPDX-License-Identifier: MPL-2.0
//! Domain logic independent of any UI toolkit.
//!
//! - [`section`] - The fixed list of page sections and anchor math
//! - [`validation`] - Pure per-field form validation rules
//! - [`submission`] - The submit state machine shared by both forms

pub mod section;
pub mod submission;
pub mod validation;
