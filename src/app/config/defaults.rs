// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default on-screen time of success toasts (in seconds).
pub const DEFAULT_SUCCESS_TOAST_SECS: u32 = 3;

/// Default on-screen time of info toasts (in seconds).
pub const DEFAULT_INFO_TOAST_SECS: u32 = 3;

/// Default on-screen time of warning toasts (in seconds).
pub const DEFAULT_WARNING_TOAST_SECS: u32 = 5;

/// Shortest configurable toast duration (in seconds).
pub const MIN_TOAST_SECS: u32 = 1;

/// Longest configurable toast duration (in seconds).
pub const MAX_TOAST_SECS: u32 = 60;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_SECS > 0);
    assert!(MAX_TOAST_SECS >= MIN_TOAST_SECS);
    assert!(DEFAULT_SUCCESS_TOAST_SECS >= MIN_TOAST_SECS);
    assert!(DEFAULT_SUCCESS_TOAST_SECS <= MAX_TOAST_SECS);
    assert!(DEFAULT_INFO_TOAST_SECS >= MIN_TOAST_SECS);
    assert!(DEFAULT_INFO_TOAST_SECS <= MAX_TOAST_SECS);
    assert!(DEFAULT_WARNING_TOAST_SECS >= DEFAULT_SUCCESS_TOAST_SECS);
    assert!(DEFAULT_WARNING_TOAST_SECS <= MAX_TOAST_SECS);
};
