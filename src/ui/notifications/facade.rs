// SPDX-License-Identifier: MPL-2.0
//! Call-site access to the notification manager.
//!
//! Two ways to reach a [`Manager`](super::Manager) without holding it:
//!
//! - [`Toaster`]: an explicit handle from `Manager::toaster()` that can be
//!   cloned and passed to whoever needs to raise notifications.
//! - The free functions of this module ([`success`], [`error`], ...), which use
//!   the toaster bound by `Manager::enter()` on the current thread.
//!
//! Both only record commands. The manager applies them in call order when the
//! host calls `Manager::flush()`. Using either while no manager is reachable is
//! a wiring bug and panics.
//!
//! ```ignore
//! let scope = manager.enter();
//! let id = facade::success("Saved");
//! facade::dismiss(id.unwrap());
//! drop(scope);
//! manager.flush();
//! ```

use super::notification::{Notification, NotificationId, Severity, ToastOptions};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

/// A facade request waiting to be applied by the manager.
#[derive(Debug, Clone)]
pub(super) enum Command {
    Push(NotificationId, Notification),
    Dismiss(NotificationId),
    DismissAll,
}

pub(super) type Inbox = Rc<RefCell<VecDeque<Command>>>;

/// Handle for raising and dismissing notifications on a manager.
///
/// The handle does not keep the manager alive: once the manager is dropped,
/// every call panics.
#[derive(Debug, Clone)]
pub struct Toaster {
    inbox: Weak<RefCell<VecDeque<Command>>>,
}

impl Toaster {
    pub(super) fn new(inbox: &Inbox) -> Self {
        Self {
            inbox: Rc::downgrade(inbox),
        }
    }

    /// Returns whether the manager behind this handle still exists.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inbox.strong_count() > 0
    }

    fn send(&self, command: Command) {
        let Some(inbox) = self.inbox.upgrade() else {
            panic!("toaster used after its notification manager was dropped");
        };
        inbox.borrow_mut().push_back(command);
    }

    /// Queues `notification` and returns the id it will be shown under.
    ///
    /// The id is reserved here so callers can dismiss the notification before
    /// the manager flushes. Notifications without visible text are ignored
    /// with a warning.
    pub fn push(&self, notification: Notification) -> Option<NotificationId> {
        if !notification.has_message() {
            tracing::warn!(
                severity = ?notification.severity(),
                "ignoring notification with an empty message"
            );
            return None;
        }
        let id = NotificationId::next();
        self.send(Command::Push(id, notification));
        Some(id)
    }

    pub fn enqueue(
        &self,
        severity: Severity,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.push(Notification::with_options(severity, message, options))
    }

    pub fn success(
        &self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.enqueue(Severity::Success, message, options)
    }

    pub fn info(&self, message: impl Into<String>, options: ToastOptions) -> Option<NotificationId> {
        self.enqueue(Severity::Info, message, options)
    }

    pub fn warning(
        &self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Option<NotificationId> {
        self.enqueue(Severity::Warning, message, options)
    }

    pub fn error(&self, message: impl Into<String>, options: ToastOptions) -> Option<NotificationId> {
        self.enqueue(Severity::Error, message, options)
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.send(Command::Dismiss(id));
    }

    pub fn dismiss_all(&self) {
        self.send(Command::DismissAll);
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Toaster>> = const { RefCell::new(None) };
}

/// Keeps a manager bound as the current thread's notification scope.
///
/// Dropping the guard restores whatever scope was active before it.
#[must_use = "the scope ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScopeGuard {
    previous: Option<Toaster>,
    // Bindings are per-thread.
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        ACTIVE.with(|active| *active.borrow_mut() = previous);
    }
}

pub(super) fn bind(toaster: Toaster) -> ScopeGuard {
    let previous = ACTIVE.with(|active| active.replace(Some(toaster)));
    ScopeGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Returns the toaster of the active scope, if any.
pub fn try_current() -> Result<Toaster> {
    ACTIVE
        .with(|active| active.borrow().clone())
        .ok_or(Error::NoActiveScope)
}

/// Returns the toaster of the active scope.
///
/// # Panics
///
/// Panics when called outside of `Manager::enter()`.
#[must_use]
pub fn current() -> Toaster {
    match try_current() {
        Ok(toaster) => toaster,
        Err(err) => panic!("{err}: bind a manager with `Manager::enter()` first"),
    }
}

pub fn push(notification: Notification) -> Option<NotificationId> {
    current().push(notification)
}

pub fn enqueue(
    severity: Severity,
    message: impl Into<String>,
    options: ToastOptions,
) -> Option<NotificationId> {
    current().enqueue(severity, message, options)
}

pub fn success(message: impl Into<String>) -> Option<NotificationId> {
    current().success(message, ToastOptions::default())
}

pub fn info(message: impl Into<String>) -> Option<NotificationId> {
    current().info(message, ToastOptions::default())
}

pub fn warning(message: impl Into<String>) -> Option<NotificationId> {
    current().warning(message, ToastOptions::default())
}

pub fn error(message: impl Into<String>) -> Option<NotificationId> {
    current().error(message, ToastOptions::default())
}

pub fn dismiss(id: NotificationId) {
    current().dismiss(id);
}

pub fn dismiss_all() {
    current().dismiss_all();
}
