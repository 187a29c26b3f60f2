// SPDX-License-Identifier: MPL-2.0
//! The five page sections plus the footer, stacked into one scrollable
//! column. Stateless sections expose a free `view` function; stateful
//! ones (about counters, contact form) expose a state struct with
//! `update`/`view` in the same shape as the signup modal.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod services;
pub mod work;
