// SPDX-License-Identifier: MPL-2.0
//! Gallery application exercising the notification system.
//!
//! The `App` struct wires localization, persisted preferences and the toast
//! `Manager` together. Every toast raised by the gallery goes through the
//! ambient facade while the manager is bound with `Manager::enter()`, and the
//! recorded requests are applied once per update with `Manager::flush()`.

pub mod config;
mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message, Trigger};

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{
    facade, Action, Manager, NotificationEvent, Position, Severity, ToastOptions,
};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Number of toasts raised by the burst trigger.
pub const BURST_SIZE: usize = 5;

/// Action key of the undo button offered by the gallery.
const UNDO_ACTION: &str = "gallery-undo";

pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    position: Position,
    /// Toast notification manager for user feedback.
    notifications: Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("position", &self.position)
            .field("visible_toasts", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once and
    // later calls fall back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launcher flags and the
    /// persisted configuration.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::from_config(flags, config, config_warning);
        (app, Task::none())
    }

    /// Builds the application around an already loaded configuration.
    pub fn from_config(flags: Flags, config: Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let position = config.notifications.position.unwrap_or_default();
        let mut notifications = Manager::with_durations(config.notifications.durations());

        if let Some(key) = config_warning {
            notifications.warning(i18n.tr(&key), ToastOptions::default());
        }

        tracing::info!(locale = %i18n.current_locale(), ?theme_mode, ?position, "gallery started");

        Self {
            i18n,
            config,
            theme_mode,
            position,
            notifications,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.notifications
            .subscription()
            .map(Message::Notification)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        {
            let _scope = self.notifications.enter();
            match message {
                Message::Trigger(trigger) => self.raise(trigger),
                Message::DismissAll => facade::dismiss_all(),
                Message::PositionSelected(position) => {
                    self.position = position;
                    self.config.notifications.position = Some(position);
                    self.persist();
                }
                Message::ThemeSelected(mode) => {
                    self.theme_mode = mode;
                    self.config.general.theme_mode = mode;
                    self.persist();
                }
                Message::Notification(notification_message) => {
                    if let Some(event) = self.notifications.update(notification_message) {
                        self.handle_notification_event(event);
                    }
                }
            }
        }
        self.notifications.flush();
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            position: self.position,
            theme_mode: self.theme_mode,
        })
    }

    /// Returns the toast manager, for inspection.
    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Raises the toasts of a gallery trigger through the active scope.
    fn raise(&self, trigger: Trigger) {
        match trigger {
            Trigger::Severity(severity) => {
                let key = match severity {
                    Severity::Info => "gallery-info-message",
                    Severity::Success => "gallery-success-message",
                    Severity::Warning => "gallery-warning-message",
                    Severity::Error => "gallery-error-message",
                };
                facade::enqueue(severity, self.i18n.tr(key), ToastOptions::default());
            }
            Trigger::Titled => {
                facade::enqueue(
                    Severity::Info,
                    self.i18n.tr("gallery-titled-message"),
                    ToastOptions::default().title(self.i18n.tr("gallery-titled-title")),
                );
            }
            Trigger::WithAction => {
                let undo = Action::new(self.i18n.tr("gallery-action-label"), UNDO_ACTION);
                facade::enqueue(
                    Severity::Success,
                    self.i18n.tr("gallery-action-message"),
                    ToastOptions::default().action(undo),
                );
            }
            Trigger::Persistent => {
                facade::push(
                    crate::ui::notifications::Notification::success(
                        self.i18n.tr("gallery-persistent-message"),
                    )
                    .persistent(),
                );
            }
            Trigger::Burst => {
                for index in 1..=BURST_SIZE {
                    let index = index.to_string();
                    facade::info(
                        self.i18n
                            .tr_with_args("gallery-burst-message", &[("index", &index)]),
                    );
                }
            }
        }
    }

    fn handle_notification_event(&self, event: NotificationEvent) {
        match event {
            NotificationEvent::ActionTriggered { id, key } => {
                tracing::debug!(%id, %key, "toast action triggered");
                if key == UNDO_ACTION {
                    facade::info(self.i18n.tr("gallery-action-undone"));
                }
            }
        }
    }

    /// Saves the configuration, reporting failures as an error toast.
    fn persist(&self) {
        if let Err(err) = config::save(&self.config) {
            tracing::warn!(%err, "failed to save config");
            facade::error(self.i18n.tr("notification-config-save-error"));
        }
    }
}
