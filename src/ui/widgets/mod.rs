// SPDX-License-Identifier: MPL-2.0
//! Small reusable widgets.

pub mod spinner;

pub use spinner::Spinner;
