// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification system built with the Iced GUI framework.
//!
//! At most three toasts are visible at once, oldest first. Pushing a fourth
//! evicts the oldest one permanently. Each toast may expire after a
//! severity-dependent delay and can be dismissed by the user at any time.
//!
//! Application code raises toasts either directly on a
//! [`ui::notifications::Manager`] or through the ambient functions in
//! [`ui::notifications::facade`] while the manager is bound with
//! [`Manager::enter`](ui::notifications::Manager::enter).
//!
//! The `app` module hosts a gallery demonstrating every variant, with
//! Fluent localization and persisted preferences.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
