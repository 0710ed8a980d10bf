// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{self, Position, Severity};
use crate::ui::theming::ThemeMode;

/// Gallery buttons that raise notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A plain toast of the given severity.
    Severity(Severity),
    /// An info toast with a heading.
    Titled,
    /// A toast offering an undo action.
    WithAction,
    /// A success toast that never expires.
    Persistent,
    /// Five info toasts raised in the same turn.
    Burst,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Trigger(Trigger),
    DismissAll,
    PositionSelected(Position),
    ThemeSelected(ThemeMode),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Optional theme override for this session.
    pub theme: Option<ThemeMode>,
}
