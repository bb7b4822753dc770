//! Tracked set of toast notifications.
//!
//! A toast enters, is revealed on the next tick, and on removal plays an
//! exit phase before it is dropped. Timers live in `notifier`; this type
//! only records which phase each toast is in.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    // The page itself only raises success and error toasts.
    #[allow(dead_code)]
    Info,
    Success,
    #[allow(dead_code)]
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
    duration_ms: u32,
}

impl Notification {
    /// A zero duration means the toast stays until removed explicitly.
    pub fn auto_dismiss_after(&self) -> Option<u32> {
        (self.duration_ms > 0).then_some(self.duration_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shown {
    pub id: NotificationId,
    /// Oldest toast pushed into its exit phase to respect the limit.
    pub evicted: Option<NotificationId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationStack {
    next_id: u64,
    items: Vec<Notification>,
    limit: Option<usize>,
}

impl NotificationStack {
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, duration_ms: u32) -> Shown {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let evicted = self.evict_for_limit();

        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            phase: Phase::Entering,
            duration_ms,
        });
        debug!(notification_id = id.0, kind = kind.as_class(), "notification shown");
        Shown { id, evicted }
    }

    fn evict_for_limit(&mut self) -> Option<NotificationId> {
        let limit = self.limit?;
        let live = self
            .items
            .iter()
            .filter(|item| item.phase != Phase::Leaving)
            .count();
        if live < limit {
            return None;
        }

        let oldest = self
            .items
            .iter()
            .find(|item| item.phase != Phase::Leaving)
            .map(|item| item.id)?;
        self.begin_remove(oldest);
        Some(oldest)
    }

    pub fn reveal(&mut self, id: NotificationId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            if item.phase == Phase::Entering {
                item.phase = Phase::Shown;
            }
        }
    }

    /// Starts the exit phase. Returns false if the toast is unknown or
    /// already leaving, so the caller schedules the final drop only once.
    pub fn begin_remove(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.phase != Phase::Leaving => {
                item.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn finish_remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(notification_id = id.0, "notification removed");
        }
        removed
    }

    /// Starts the exit phase for every tracked toast and returns the ids that
    /// newly began leaving.
    pub fn clear(&mut self) -> Vec<NotificationId> {
        let ids: Vec<_> = self.items.iter().map(|item| item.id).collect();
        ids.into_iter().filter(|id| self.begin_remove(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_in_insertion_order_with_unique_ids() {
        let mut stack = NotificationStack::default();
        let first = stack.show("one", NotificationKind::Info, 5_000).id;
        let second = stack.show("one", NotificationKind::Info, 5_000).id;

        assert_ne!(first, second);
        let messages: Vec<_> = stack.items().iter().map(|item| item.id).collect();
        assert_eq!(messages, vec![first, second]);
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let mut stack = NotificationStack::default();
        let id = stack.show("sticky", NotificationKind::Error, 0).id;

        let toast = stack.get(id).expect("tracked");
        assert_eq!(toast.auto_dismiss_after(), None);
        assert_eq!(stack.items().len(), 1);

        assert!(stack.begin_remove(id));
        assert!(stack.finish_remove(id));
        assert!(stack.items().is_empty());
    }

    #[test]
    fn positive_duration_schedules_dismissal() {
        let mut stack = NotificationStack::default();
        let id = stack.show("hello", NotificationKind::Success, 5_000).id;
        assert_eq!(stack.get(id).and_then(Notification::auto_dismiss_after), Some(5_000));
    }

    #[test]
    fn phases_advance_and_remove_is_idempotent() {
        let mut stack = NotificationStack::default();
        let id = stack.show("hello", NotificationKind::Info, 5_000).id;
        assert_eq!(stack.get(id).map(|item| item.phase), Some(Phase::Entering));

        stack.reveal(id);
        assert_eq!(stack.get(id).map(|item| item.phase), Some(Phase::Shown));

        assert!(stack.begin_remove(id));
        assert!(!stack.begin_remove(id));
        assert_eq!(stack.get(id).map(|item| item.phase), Some(Phase::Leaving));

        stack.reveal(id);
        assert_eq!(stack.get(id).map(|item| item.phase), Some(Phase::Leaving));
        assert!(stack.finish_remove(id));
        assert!(!stack.finish_remove(id));
    }

    #[test]
    fn clear_starts_exit_for_every_live_toast() {
        let mut stack = NotificationStack::default();
        let a = stack.show("a", NotificationKind::Info, 0).id;
        let b = stack.show("b", NotificationKind::Info, 0).id;
        stack.begin_remove(a);

        assert_eq!(stack.clear(), vec![b]);
        assert!(stack.items().iter().all(|item| item.phase == Phase::Leaving));
    }

    #[test]
    fn unbounded_by_default() {
        let mut stack = NotificationStack::default();
        for index in 0..20 {
            assert_eq!(stack.show(format!("n{index}"), NotificationKind::Info, 0).evicted, None);
        }
        assert_eq!(stack.items().len(), 20);
    }

    #[test]
    fn limit_evicts_oldest_live_toast() {
        let mut stack = NotificationStack::with_limit(Some(2));
        let a = stack.show("a", NotificationKind::Info, 0).id;
        let b = stack.show("b", NotificationKind::Info, 0).id;
        let shown = stack.show("c", NotificationKind::Info, 0);

        assert_eq!(shown.evicted, Some(a));
        assert_eq!(stack.get(a).map(|item| item.phase), Some(Phase::Leaving));

        let next = stack.show("d", NotificationKind::Info, 0);
        assert_eq!(next.evicted, Some(b));
    }
}
