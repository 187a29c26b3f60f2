// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive toasts appear temporarily to confirm actions (message
//! sent, link copied) or report problems (draft write failed) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` owning the queue and lifecycle
//! - [`toast`] - Toast widget rendering visible notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("toast-message-sent"));
//!
//! // In the view function:
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Every toast auto-dismisses after the same fixed window (4s)
//! - Max visible toasts: 3 (others are queued FIFO)
//! - Position: bottom-right corner, oldest on top

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity, ToastId};
pub use toast::Toast;
