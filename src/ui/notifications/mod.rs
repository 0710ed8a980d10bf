// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record with severity levels
//! - [`manager`] - `Manager` for the visible window and auto-dismiss deadlines
//! - [`facade`] - `Toaster` handle and scoped free functions for call sites
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{facade, Manager, Notification};
//!
//! let mut manager = Manager::new();
//!
//! // Direct access
//! manager.push(Notification::success("Image saved"));
//!
//! // Ambient access while the manager is bound
//! let scope = manager.enter();
//! facade::warning("Disk almost full");
//! drop(scope);
//! manager.flush();
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&manager, &i18n, Position::BottomRight)
//!     .map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3, newest kept; older ones are evicted, not queued
//! - Position: bottom-right corner by default

pub mod facade;
mod manager;
mod notification;
mod timers;
mod toast;

pub use facade::{ScopeGuard, Toaster};
pub use manager::{Event as NotificationEvent, Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{
    Action, AutoDismiss, Durations, Notification, NotificationId, Severity, ToastOptions,
};
pub use toast::{Position, Toast};
