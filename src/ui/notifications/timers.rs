// SPDX-License-Identifier: MPL-2.0
//! Single-shot expiry deadlines keyed by notification.
//!
//! Each notification owns at most one deadline. Removing a notification through
//! any path must cancel its deadline, so an expiry can only ever dismiss the
//! notification it was scheduled for.

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct Timers {
    deadlines: HashMap<NotificationId, Instant>,
}

impl Timers {
    /// Arms a deadline for `id`, replacing any previous one.
    pub fn schedule(&mut self, id: NotificationId, at: Instant) {
        self.deadlines.insert(id, at);
    }

    /// Cancels the deadline for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    /// Cancels every pending deadline.
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_pending(&self, id: NotificationId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Removes and returns every deadline that is due at `now`, earliest first.
    ///
    /// A fired deadline is consumed: it never fires twice.
    pub fn take_expired(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due: Vec<(Instant, NotificationId)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, at)| (*at, *id))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn expired_deadlines_fire_once_in_order() {
        let mut timers = Timers::default();
        let now = Instant::now();
        let late = NotificationId::next();
        let early = NotificationId::next();
        let pending = NotificationId::next();

        timers.schedule(late, now + Duration::from_millis(20));
        timers.schedule(early, now + Duration::from_millis(10));
        timers.schedule(pending, now + Duration::from_secs(10));

        let fired = timers.take_expired(now + Duration::from_millis(30));
        assert_eq!(fired, vec![early, late]);
        assert!(timers.take_expired(now + Duration::from_millis(30)).is_empty());
        assert_eq!(timers.len(), 1);
        assert!(timers.is_pending(pending));
    }

    #[test]
    fn canceled_deadline_never_fires() {
        let mut timers = Timers::default();
        let now = Instant::now();
        let id = NotificationId::next();

        timers.schedule(id, now);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.take_expired(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn next_deadline_is_earliest() {
        let mut timers = Timers::default();
        let now = Instant::now();
        assert_eq!(timers.next_deadline(), None);

        timers.schedule(NotificationId::next(), now + Duration::from_secs(5));
        timers.schedule(NotificationId::next(), now + Duration::from_secs(2));
        assert_eq!(timers.next_deadline(), Some(now + Duration::from_secs(2)));

        timers.clear();
        assert!(timers.is_empty());
    }
}
