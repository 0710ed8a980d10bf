// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Severity`, the optional
//! follow-up `Action` and the per-severity auto-dismiss table (`Durations`).

use crate::app::config::{
    DEFAULT_INFO_TOAST_SECS, DEFAULT_SUCCESS_TOAST_SECS, DEFAULT_WARNING_TOAST_SECS,
};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Identifiers are handed out by the manager (or reserved by a `Toaster`) when
/// a notification is pushed, from a process-wide counter. They are never
/// reused, so a stale expiry for a removed notification can never hit a newer
/// one, and pushing the same record twice yields two distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Id carried by a notification that has not been pushed yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Reserves the next identifier.
    pub(super) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Informational message (blue, 3s duration).
    #[default]
    Info,
    /// Operation completed successfully (green, 3s duration).
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// All severities, in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the built-in auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(DEFAULT_SUCCESS_TOAST_SECS.into())),
            Severity::Info => Some(Duration::from_secs(DEFAULT_INFO_TOAST_SECS.into())),
            Severity::Warning => Some(Duration::from_secs(DEFAULT_WARNING_TOAST_SECS.into())),
            Severity::Error => None,
        }
    }

    /// Returns the i18n key naming this severity (used for tooltips).
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Severity::Success => "notification-severity-success",
            Severity::Info => "notification-severity-info",
            Severity::Warning => "notification-severity-warning",
            Severity::Error => "notification-severity-error",
        }
    }
}

/// Per-severity auto-dismiss durations used when a notification does not
/// carry its own override. `None` means "persist until dismissed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub success: Option<Duration>,
    pub info: Option<Duration>,
    pub warning: Option<Duration>,
    pub error: Option<Duration>,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            success: Severity::Success.auto_dismiss_duration(),
            info: Severity::Info.auto_dismiss_duration(),
            warning: Severity::Warning.auto_dismiss_duration(),
            error: Severity::Error.auto_dismiss_duration(),
        }
    }
}

impl Durations {
    /// Returns the duration configured for `severity`.
    #[must_use]
    pub fn for_severity(&self, severity: Severity) -> Option<Duration> {
        match severity {
            Severity::Success => self.success,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

/// How long a notification stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoDismiss {
    /// Use the manager's duration for the notification's severity.
    #[default]
    SeverityDefault,
    /// Dismiss after the given duration.
    After(Duration),
    /// Stay until dismissed by the user or the application.
    Never,
}

/// A single user-triggered follow-up attached to a notification.
///
/// Activating it makes the manager emit its `key` back to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    label: String,
    key: String,
}

impl Action {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Optional fields accepted by the `enqueue` family of operations.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub title: Option<String>,
    pub action: Option<Action>,
    pub auto_dismiss: AutoDismiss,
}

impl ToastOptions {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, auto_dismiss: AutoDismiss) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier assigned on push.
    id: NotificationId,
    /// Severity level (determines color and auto-dismiss behavior).
    severity: Severity,
    /// Optional short heading.
    title: Option<String>,
    /// Body text.
    message: String,
    /// Optional follow-up offered to the user.
    action: Option<Action>,
    /// Auto-dismiss override (defaults to the severity duration).
    auto_dismiss: AutoDismiss,
    /// Insertion order, assigned by the manager on enqueue.
    sequence: u64,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::UNASSIGNED,
            severity,
            title: None,
            message: message.into(),
            action: None,
            auto_dismiss: AutoDismiss::SeverityDefault,
            sequence: 0,
        }
    }

    /// Creates a notification from a message and a set of options.
    pub fn with_options(
        severity: Severity,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Self {
        Self {
            title: options.title,
            action: options.action,
            auto_dismiss: options.auto_dismiss,
            ..Self::new(severity, message)
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets the heading shown above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attaches a follow-up action.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.auto_dismiss = AutoDismiss::After(duration);
        self
    }

    /// Keeps the notification on screen until it is dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_dismiss = AutoDismiss::Never;
        self
    }

    /// Returns the id assigned when the notification was pushed, or
    /// `NotificationId::UNASSIGNED` for a record built but not pushed.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Returns the insertion order assigned by the manager (0 before enqueue).
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub(super) fn assign(&mut self, id: NotificationId, sequence: u64) {
        self.id = id;
        self.sequence = sequence;
    }

    /// Returns whether the message carries visible text.
    #[must_use]
    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// Resolves the effective auto-dismiss duration against `durations`.
    #[must_use]
    pub fn effective_duration(&self, durations: &Durations) -> Option<Duration> {
        match self.auto_dismiss {
            AutoDismiss::SeverityDefault => durations.for_severity(self.severity),
            AutoDismiss::After(duration) => Some(duration),
            AutoDismiss::Never => None,
        }
    }
}
