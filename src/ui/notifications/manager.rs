// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active notifications, assigns their insertion order,
//! keeps only the `MAX_VISIBLE` most recent ones and runs their auto-dismiss
//! deadlines.
//!
//! The window is a "show newest N" policy, not a waiting room: when a new
//! notification arrives while the window is full, the oldest one is evicted
//! for good. Dismissing a visible notification never brings an evicted one
//! back.

use super::facade::{self, Command, Inbox, ScopeGuard, Toaster};
use super::notification::{Durations, Notification, NotificationId, Severity, ToastOptions};
use super::timers::Timers;
use iced::{time, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Polling interval of the expiry subscription while deadlines are pending.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Activate the action of a notification.
    Activate(NotificationId),
    /// Dismiss every notification.
    DismissAll,
    /// Tick for checking auto-dismiss deadlines.
    Tick(Instant),
}

/// Outcomes the host application has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user activated the action attached to a notification.
    ActionTriggered { id: NotificationId, key: String },
}

/// Manages the visible notifications and their deadlines.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (oldest first).
    visible: VecDeque<Notification>,
    /// Pending auto-dismiss deadlines.
    timers: Timers,
    /// Auto-dismiss durations per severity.
    durations: Durations,
    /// Next insertion order value.
    next_sequence: u64,
    /// Number of notifications pushed out of the window by newer ones.
    evicted: u64,
    /// Commands recorded by toasters, applied on `flush`.
    inbox: Inbox,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager using custom per-severity durations.
    #[must_use]
    pub fn with_durations(durations: Durations) -> Self {
        Self {
            durations,
            ..Self::default()
        }
    }

    /// Replaces the per-severity durations used by later notifications.
    pub fn set_durations(&mut self, durations: Durations) {
        self.durations = durations;
    }

    #[must_use]
    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// Pushes a new notification to be displayed.
    ///
    /// Returns the notification's id, or `None` if its message is empty.
    pub fn push(&mut self, notification: Notification) -> Option<NotificationId> {
        self.push_at(notification, Instant::now())
    }

    /// Pushes a notification, measuring its auto-dismiss deadline from `now`.
    ///
    /// Every push gets a fresh id, even when the same record is pushed again.
    pub fn push_at(&mut self, notification: Notification, now: Instant) -> Option<NotificationId> {
        if !notification.has_message() {
            tracing::warn!(
                severity = ?notification.severity(),
                "ignoring notification with an empty message"
            );
            return None;
        }

        let id = NotificationId::next();
        self.insert(id, notification, now);
        Some(id)
    }

    /// Inserts a non-blank notification under `id`, evicting the oldest
    /// entries to keep the window bounded.
    fn insert(&mut self, id: NotificationId, mut notification: Notification, now: Instant) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(%id, message = notification.message(), "warning notification");
            }
            Severity::Error => {
                tracing::error!(%id, message = notification.message(), "error notification");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(%id, message = notification.message(), "notification");
            }
        }

        notification.assign(id, self.next_sequence);
        self.next_sequence += 1;

        if let Some(duration) = notification.effective_duration(&self.durations) {
            self.timers.schedule(id, now + duration);
        }

        while self.visible.len() >= MAX_VISIBLE {
            let Some(evicted) = self.visible.pop_front() else {
                break;
            };
            self.timers.cancel(evicted.id());
            self.evicted += 1;
            tracing::debug!(id = %evicted.id(), "notification evicted by a newer one");
        }

        self.visible.push_back(notification);
    }

    /// Creates and pushes a notification.
    pub fn enqueue(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.push(Notification::with_options(severity, message, options))
    }

    pub fn success(
        &mut self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.enqueue(Severity::Success, message, options)
    }

    pub fn info(
        &mut self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.enqueue(Severity::Info, message, options)
    }

    pub fn warning(
        &mut self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.enqueue(Severity::Warning, message, options)
    }

    pub fn error(
        &mut self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.enqueue(Severity::Error, message, options)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown ids
    /// are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.visible.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.visible.remove(pos);
        self.timers.cancel(id);
        true
    }

    /// Dismisses every notification matching `predicate`.
    ///
    /// Returns the number of notifications removed.
    pub fn dismiss_where(&mut self, mut predicate: impl FnMut(&Notification) -> bool) -> usize {
        let before = self.visible.len();
        let timers = &mut self.timers;
        self.visible.retain(|n| {
            if predicate(n) {
                timers.cancel(n.id());
                false
            } else {
                true
            }
        });
        before - self.visible.len()
    }

    /// Clears all notifications and cancels their deadlines.
    pub fn dismiss_all(&mut self) {
        self.visible.clear();
        self.timers.clear();
    }

    /// Dismisses every notification whose deadline has passed at `now`.
    pub fn tick(&mut self, now: Instant) {
        for id in self.timers.take_expired(now) {
            if self.dismiss(id) {
                tracing::debug!(%id, "notification expired");
            }
        }
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
                None
            }
            Message::Activate(id) => {
                let key = self
                    .visible
                    .iter()
                    .find(|n| n.id() == id)
                    .and_then(Notification::action)
                    .map(|action| action.key().to_string())?;
                self.dismiss(id);
                Some(Event::ActionTriggered { id, key })
            }
            Message::DismissAll => {
                self.dismiss_all();
                None
            }
            Message::Tick(now) => {
                self.tick(now);
                None
            }
        }
    }

    /// Returns a handle that records requests for this manager.
    #[must_use]
    pub fn toaster(&self) -> Toaster {
        Toaster::new(&self.inbox)
    }

    /// Binds this manager as the current thread's notification scope until
    /// the returned guard is dropped.
    pub fn enter(&self) -> ScopeGuard {
        facade::bind(self.toaster())
    }

    /// Applies the requests recorded by toasters, in call order.
    pub fn flush(&mut self) {
        loop {
            let Some(command) = self.inbox.borrow_mut().pop_front() else {
                break;
            };
            match command {
                Command::Push(id, notification) => {
                    self.insert(id, notification, Instant::now());
                }
                Command::Dismiss(id) => {
                    self.dismiss(id);
                }
                Command::DismissAll => self.dismiss_all(),
            }
        }
    }

    /// Subscription driving auto-dismiss, idle while no deadline is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.timers.is_empty() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the visible notification with the given id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id() == id)
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any notification is visible.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Returns the number of armed auto-dismiss deadlines.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns whether `id` still has an armed auto-dismiss deadline.
    #[must_use]
    pub fn is_pending(&self, id: NotificationId) -> bool {
        self.timers.is_pending(id)
    }

    /// Returns the earliest armed auto-dismiss deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns how many notifications were evicted by newer ones.
    #[must_use]
    pub fn evicted_count(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Action;

    fn messages(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message).collect()
    }

    #[test]
    fn pushing_the_same_record_twice_yields_distinct_entries() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let notification = Notification::info("hello");

        let first = manager.push_at(notification.clone(), now).unwrap();
        let second = manager.push_at(notification, now).unwrap();

        assert_ne!(first, second);
        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.pending_timers(), 2);
        assert!(manager.is_pending(first));
        assert!(manager.is_pending(second));

        manager.tick(now + Duration::from_secs(4));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn flushed_pushes_keep_their_reserved_ids() {
        let mut manager = Manager::new();
        let toaster = manager.toaster();
        let notification = Notification::warning("twice");

        let first = toaster.push(notification.clone()).unwrap();
        let second = toaster.push(notification).unwrap();
        manager.flush();

        assert_ne!(first, second);
        assert!(manager.get(first).is_some());
        assert!(manager.get(second).is_some());
        assert!(manager.dismiss(first));
        assert_eq!(manager.visible().map(Notification::id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.pending_timers(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("test")).unwrap();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.get(id).map(Notification::message), Some("test"));
    }

    #[test]
    fn sequences_increase_with_insertion_order() {
        let mut manager = Manager::new();
        manager.push(Notification::info("a"));
        manager.push(Notification::info("b"));

        let sequences: Vec<u64> = manager.visible().map(Notification::sequence).collect();
        assert!(sequences[0] < sequences[1]);
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let mut manager = Manager::new();
        for i in 1..=MAX_VISIBLE + 1 {
            manager.push(Notification::info(format!("test-{i}")));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(messages(&manager), vec!["test-2", "test-3", "test-4"]);
        assert_eq!(manager.evicted_count(), 1);
    }

    #[test]
    fn eviction_cancels_the_evicted_deadline() {
        let mut manager = Manager::new();
        let first = manager.push(Notification::info("first")).unwrap();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("later-{i}")));
        }

        assert!(manager.get(first).is_none());
        assert_eq!(manager.pending_timers(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_removes_from_visible() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("test")).unwrap();

        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("test")).unwrap();
        manager.push(Notification::success("other"));

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert_eq!(messages(&manager), vec!["other"]);
    }

    #[test]
    fn dismiss_does_not_restore_evicted() {
        let mut manager = Manager::new();
        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(manager.push(Notification::info(format!("Toast {i}"))).unwrap());
        }

        manager.dismiss(ids[4]);
        assert_eq!(messages(&manager), vec!["Toast 3", "Toast 4"]);
    }

    #[test]
    fn dismiss_where_removes_matching() {
        let mut manager = Manager::new();
        manager.push(Notification::error("load failed: a.png"));
        manager.push(Notification::success("saved"));
        manager.push(Notification::error("load failed: b.png"));

        let removed = manager.dismiss_where(|n| n.message().starts_with("load failed"));
        assert_eq!(removed, 2);
        assert_eq!(messages(&manager), vec!["saved"]);
        assert_eq!(manager.pending_timers(), 1);
    }

    #[test]
    fn dismiss_all_clears_everything() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.dismiss_all();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn tick_dismisses_expired_notifications() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.push_at(Notification::info("short").auto_dismiss(Duration::from_millis(50)), start);
        manager.push_at(Notification::info("long").auto_dismiss(Duration::from_secs(60)), start);

        manager.tick(start + Duration::from_millis(10));
        assert_eq!(manager.visible_count(), 2);

        manager.tick(start + Duration::from_millis(50));
        assert_eq!(messages(&manager), vec!["long"]);
        assert_eq!(manager.pending_timers(), 1);
    }

    #[test]
    fn error_notifications_do_not_auto_dismiss() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.push_at(Notification::error("test-error"), start).unwrap();

        manager.tick(start + Duration::from_secs(3600));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.pending_timers(), 0);

        manager.dismiss(id);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn custom_durations_apply_to_defaults() {
        let durations = Durations {
            error: Some(Duration::from_secs(1)),
            ..Durations::default()
        };
        let mut manager = Manager::with_durations(durations);
        let start = Instant::now();
        manager.push_at(Notification::error("boom"), start);

        manager.tick(start + Duration::from_secs(1));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn empty_message_is_ignored() {
        let mut manager = Manager::new();
        assert!(manager.info("", ToastOptions::default()).is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn activate_emits_action_and_dismisses() {
        let mut manager = Manager::new();
        let id = manager
            .push(Notification::error("Upload failed").with_action(Action::new("Retry", "retry")))
            .unwrap();

        let event = manager.update(Message::Activate(id));
        assert_eq!(
            event,
            Some(Event::ActionTriggered {
                id,
                key: "retry".to_string()
            })
        );
        assert!(!manager.has_notifications());
    }

    #[test]
    fn activate_without_action_is_ignored() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::info("plain")).unwrap();

        assert_eq!(manager.update(Message::Activate(id)), None);
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn update_dispatches_dismiss_messages() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("test")).unwrap();
        manager.push(Notification::success("other"));

        manager.update(Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 1);

        manager.update(Message::DismissAll);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn flush_applies_toaster_commands_in_order() {
        let mut manager = Manager::new();
        let toaster = manager.toaster();

        let first = toaster.info("first", ToastOptions::default()).unwrap();
        toaster.info("second", ToastOptions::default());
        toaster.dismiss(first);
        assert!(!manager.has_notifications());

        manager.flush();
        assert_eq!(messages(&manager), vec!["second"]);
    }

    #[test]
    fn scoped_facade_reaches_manager() {
        let mut manager = Manager::new();
        {
            let _scope = manager.enter();
            facade::warning("disk almost full");
            facade::success("saved");
        }
        manager.flush();

        let severities: Vec<Severity> = manager.visible().map(Notification::severity).collect();
        assert_eq!(severities, vec![Severity::Warning, Severity::Success]);
    }

    #[test]
    fn deadlines_are_armed_only_for_timed_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("sticky"));
        assert_eq!(manager.pending_timers(), 0);
        assert!(manager.next_deadline().is_none());

        manager.push(Notification::info("timed"));
        assert!(manager.next_deadline().is_some());
    }
}
