// SPDX-License-Identifier: MPL-2.0
//! Bounded toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts show at once; the rest wait in
//! arrival order and move up as visible slots free, whether through a
//! dismiss click or an expiry tick.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

const MAX_VISIBLE: usize = 3;

/// Interactions routed back into the queue.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of one toast was pressed.
    Dismiss(NotificationId),
    /// Periodic check for expired lifetimes.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On-screen toasts, newest first.
    visible: VecDeque<Notification>,
    /// Waiting toasts in arrival order.
    pending: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the toast now if a slot is free, otherwise enqueue it.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.pending.push_back(notification);
        }
    }

    /// Drop the toast with the given id wherever it currently sits.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|toast| toast.id() != id);
        self.pending.retain(|toast| toast.id() != id);
        self.fill_free_slots();
    }

    /// Drop expired toasts and promote waiting ones.
    pub fn tick(&mut self) {
        self.visible.retain(|toast| !toast.is_expired());
        self.fill_free_slots();
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Tick => self.tick(),
        }
    }

    fn fill_free_slots(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.pending.pop_front() {
                Some(toast) => self.visible.push_back(toast),
                None => break,
            }
        }
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether anything is on screen or waiting. The shell only runs
    /// the expiry tick subscription while this is true.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_shows_immediately_while_slots_remain() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn push_enqueues_once_slots_are_full() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::info("shown"));
        }
        manager.push(Notification::info("waiting"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn newest_toast_comes_first() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::info("second"));

        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["second", "first"]);
    }

    #[test]
    fn dismiss_frees_a_slot_for_the_queue() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::info("shown"));
        }
        manager.push(Notification::info("waiting"));

        let front = manager.visible().next().unwrap().id();
        manager.dismiss(front);

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_reaches_queued_toasts_too() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::info("shown"));
        }
        let waiting = Notification::info("waiting");
        let waiting_id = waiting.id();
        manager.push(waiting);

        manager.dismiss(waiting_id);

        assert_eq!(manager.queued_count(), 0);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
    }

    #[test]
    fn dismissing_an_unknown_id_changes_nothing() {
        let mut manager = Manager::new();
        manager.push(Notification::info("shown"));

        manager.dismiss(NotificationId::new());

        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn tick_drops_expired_and_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("done").auto_dismiss(Duration::ZERO));
        manager.push(Notification::error("broken"));

        manager.tick();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().unwrap().message_key(), "broken");
    }

    #[test]
    fn tick_promotes_after_expiry() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::success("done").auto_dismiss(Duration::ZERO));
        }
        manager.push(Notification::info("waiting"));

        manager.tick();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_message_is_routed() {
        let mut manager = Manager::new();
        let toast = Notification::info("shown");
        let id = toast.id();
        manager.push(toast);

        manager.handle_message(Message::Dismiss(id));

        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 2 {
            manager.push(Notification::info("shown"));
        }

        manager.clear();

        assert!(!manager.has_notifications());
    }
}
