//! In-window toast queue.
//!
//! [`ToastQueue`] is cheap to clone (`Arc` inside) and implements
//! [`Notifier`], so the orchestrator pushes into it while the egui update loop
//! reads and prunes it every frame.  Toasts expire after a fixed time to live;
//! only the newest [`ToastQueue::MAX_VISIBLE`] are kept.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::{Notification, Notifier};

/// A notification plus the time it was shown.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug, Default)]
struct Inner {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

/// Thread-shared queue of on-screen notifications.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
}

impl ToastQueue {
    pub const MAX_VISIBLE: usize = 3;

    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Push a notification as if shown at `now`.
    pub fn push_at(&self, notification: Notification, now: Instant) {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.toasts.push_back(Toast {
            id,
            notification,
            shown_at: now,
        });
        while inner.toasts.len() > Self::MAX_VISIBLE {
            inner.toasts.pop_front();
        }
    }

    /// Drop every toast older than the time to live.
    pub fn prune(&self, now: Instant) {
        let ttl = self.ttl;
        self.lock()
            .toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < ttl);
    }

    /// Remove a toast before it expires (close button).
    pub fn dismiss(&self, id: u64) {
        self.lock().toasts.retain(|t| t.id != id);
    }

    /// Snapshot of the toasts currently on screen, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.lock().toasts.iter().cloned().collect()
    }

    /// Time until the next toast expires, for repaint scheduling.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        let ttl = self.ttl;
        self.lock()
            .toasts
            .iter()
            .map(|t| ttl.saturating_sub(now.saturating_duration_since(t.shown_at)))
            .min()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        log::debug!("toast: {}: {}", notification.title, notification.description);
        self.push_at(notification, Instant::now());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> ToastQueue {
        ToastQueue::new(Duration::from_secs(4))
    }

    #[test]
    fn starts_empty() {
        let q = queue();
        assert!(q.is_empty());
        assert!(q.next_expiry(Instant::now()).is_none());
    }

    #[test]
    fn notify_makes_toast_visible() {
        let q = queue();
        q.notify(Notification::copied());
        let visible = q.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].notification, Notification::copied());
    }

    #[test]
    fn prune_drops_expired_toasts() {
        let q = queue();
        let t0 = Instant::now();
        q.push_at(Notification::copied(), t0);
        q.push_at(Notification::corrected(), t0 + Duration::from_secs(3));

        q.prune(t0 + Duration::from_secs(5));
        let visible = q.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].notification, Notification::corrected());
    }

    #[test]
    fn keeps_only_newest_toasts() {
        let q = queue();
        let now = Instant::now();
        for i in 0..5 {
            q.push_at(Notification::rejected(format!("e{i}")), now);
        }
        let descriptions: Vec<_> = q
            .visible()
            .into_iter()
            .map(|t| t.notification.description)
            .collect();
        assert_eq!(descriptions, vec!["e2", "e3", "e4"]);
    }

    #[test]
    fn dismiss_removes_by_id() {
        let q = queue();
        let now = Instant::now();
        q.push_at(Notification::copied(), now);
        q.push_at(Notification::corrected(), now);
        let first = q.visible()[0].id;

        q.dismiss(first);
        let visible = q.visible();
        assert_eq!(visible.len(), 1);
        assert_ne!(visible[0].id, first);
    }

    #[test]
    fn next_expiry_reports_soonest_toast() {
        let q = queue();
        let t0 = Instant::now();
        q.push_at(Notification::copied(), t0);
        q.push_at(Notification::corrected(), t0 + Duration::from_secs(2));

        let remaining = q.next_expiry(t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(remaining, Duration::from_secs(3));
    }

    #[test]
    fn clones_share_the_same_queue() {
        let q = queue();
        let handle = q.clone();
        handle.notify(Notification::copied());
        assert_eq!(q.visible().len(), 1);
    }
}
