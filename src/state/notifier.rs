//! Toast lifecycle: the tracked stack plus the timers that move each toast
//! through it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::contact::Notify;
use super::notifications::{Notification, NotificationId, NotificationKind, NotificationStack};
use crate::config::UiConfig;

/// Delay between inserting a toast and starting its entry animation.
pub const REVEAL_DELAY_MS: u32 = 10;

/// One-shot timers. Dropping a returned timer cancels it.
pub trait Scheduler {
    type Timer;

    fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Timer;

    /// Disposes of timers that are done. May run inside one of their own
    /// callbacks.
    fn retire(&self, timers: Vec<Self::Timer>) {
        drop(timers);
    }
}

struct NotifierInner<S: Scheduler> {
    scheduler: S,
    stack: RefCell<NotificationStack>,
    timers: RefCell<HashMap<NotificationId, Vec<S::Timer>>>,
    listener: RefCell<Option<Rc<dyn Fn()>>>,
    default_duration_ms: u32,
    exit_ms: u32,
}

impl<S: Scheduler> NotifierInner<S> {
    fn refresh(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    fn track(&self, id: NotificationId, timer: S::Timer) {
        self.timers.borrow_mut().entry(id).or_default().push(timer);
    }
}

/// Toast manager shared by everything that reports to the user. Owns the
/// timers of every tracked toast; dropping the last handle cancels them.
pub struct Notifier<S: Scheduler>(Rc<NotifierInner<S>>);

impl<S: Scheduler> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S: Scheduler> PartialEq for Notifier<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S: Scheduler + 'static> Notifier<S> {
    pub fn new(scheduler: S, config: &UiConfig) -> Self {
        Self(Rc::new(NotifierInner {
            scheduler,
            stack: RefCell::new(NotificationStack::with_limit(config.notification_limit)),
            timers: RefCell::new(HashMap::new()),
            listener: RefCell::new(None),
            default_duration_ms: config.notification_duration_ms,
            exit_ms: config.notification_exit_ms,
        }))
    }

    fn weak(&self) -> Weak<NotifierInner<S>> {
        Rc::downgrade(&self.0)
    }

    /// Called after every change to the tracked set.
    pub fn set_listener(&self, listener: Option<Rc<dyn Fn()>>) {
        *self.0.listener.borrow_mut() = listener;
    }

    pub fn items(&self) -> Vec<Notification> {
        self.0.stack.borrow().items().to_vec()
    }

    /// Adds a toast, reveals it on the next tick and, for a positive
    /// duration, removes it once the duration has passed.
    pub fn show(&self, message: &str, kind: NotificationKind, duration_ms: u32) -> NotificationId {
        let shown = self.0.stack.borrow_mut().show(message, kind, duration_ms);
        if let Some(evicted) = shown.evicted {
            self.schedule_detach(evicted);
        }

        let id = shown.id;
        let weak = self.weak();
        let reveal = self.0.scheduler.after(REVEAL_DELAY_MS, move || {
            if let Some(inner) = weak.upgrade() {
                inner.stack.borrow_mut().reveal(id);
                inner.refresh();
            }
        });
        self.0.track(id, reveal);

        let dismiss_after = self
            .0
            .stack
            .borrow()
            .get(id)
            .and_then(Notification::auto_dismiss_after);
        if let Some(after_ms) = dismiss_after {
            let weak = self.weak();
            let dismiss = self.0.scheduler.after(after_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    Notifier(inner).remove(id);
                }
            });
            self.0.track(id, dismiss);
        }

        self.0.refresh();
        id
    }

    /// Starts the exit animation; the toast leaves the tracked set after the
    /// exit delay. Repeated calls are ignored.
    pub fn remove(&self, id: NotificationId) {
        let leaving = self.0.stack.borrow_mut().begin_remove(id);
        if leaving {
            self.schedule_detach(id);
            self.0.refresh();
        }
    }

    pub fn clear(&self) {
        let leaving = self.0.stack.borrow_mut().clear();
        for id in leaving {
            self.schedule_detach(id);
        }
        self.0.refresh();
    }

    fn schedule_detach(&self, id: NotificationId) {
        let weak = self.weak();
        let detach = self.0.scheduler.after(self.0.exit_ms, move || {
            if let Some(inner) = weak.upgrade() {
                inner.stack.borrow_mut().finish_remove(id);
                let finished = inner.timers.borrow_mut().remove(&id).unwrap_or_default();
                inner.scheduler.retire(finished);
                inner.refresh();
            }
        });
        self.0.track(id, detach);
    }
}

impl<S: Scheduler + 'static> Notify for Notifier<S> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.show(message, kind, self.0.default_duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notifications::Phase;
    use std::cell::Cell;

    type Callback = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_seq: u64,
        pending: Vec<(u64, u64, Callback)>,
    }

    /// Virtual clock: timers fire only when the test advances it.
    #[derive(Clone, Default)]
    struct ManualClock(Rc<RefCell<ClockState>>);

    struct ManualTimer {
        seq: u64,
        clock: Weak<RefCell<ClockState>>,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().pending.retain(|(_, seq, _)| *seq != self.seq);
            }
        }
    }

    impl Scheduler for ManualClock {
        type Timer = ManualTimer;

        fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> ManualTimer {
            let mut state = self.0.borrow_mut();
            state.next_seq += 1;
            let seq = state.next_seq;
            let due = state.now + u64::from(delay_ms);
            state.pending.push((due, seq, Box::new(callback)));
            ManualTimer {
                seq,
                clock: Rc::downgrade(&self.0),
            }
        }
    }

    impl ManualClock {
        fn advance(&self, millis: u64) {
            let until = self.0.borrow().now + millis;
            loop {
                let callback = {
                    let mut state = self.0.borrow_mut();
                    let next = state
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, (due, _, _))| *due <= until)
                        .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                        .map(|(index, _)| index);
                    match next {
                        Some(index) => {
                            let (due, _, callback) = state.pending.remove(index);
                            state.now = due;
                            callback
                        }
                        None => {
                            state.now = until;
                            break;
                        }
                    }
                };
                callback();
            }
        }

        fn pending(&self) -> usize {
            self.0.borrow().pending.len()
        }
    }

    fn notifier(clock: &ManualClock) -> Notifier<ManualClock> {
        Notifier::new(clock.clone(), &UiConfig::default())
    }

    fn phase(notifier: &Notifier<ManualClock>, id: NotificationId) -> Option<Phase> {
        notifier
            .items()
            .into_iter()
            .find(|item| item.id == id)
            .map(|item| item.phase)
    }

    #[test]
    fn toast_is_revealed_after_one_tick() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        let id = notifier.show("hello", NotificationKind::Info, 5_000);

        assert_eq!(phase(&notifier, id), Some(Phase::Entering));
        clock.advance(9);
        assert_eq!(phase(&notifier, id), Some(Phase::Entering));
        clock.advance(1);
        assert_eq!(phase(&notifier, id), Some(Phase::Shown));
    }

    #[test]
    fn timed_toast_leaves_after_duration_plus_exit() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        let id = notifier.show("saved", NotificationKind::Success, 5_000);

        clock.advance(5_000);
        assert_eq!(phase(&notifier, id), Some(Phase::Leaving));
        clock.advance(299);
        assert_eq!(notifier.items().len(), 1);
        clock.advance(1);
        assert!(notifier.items().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn zero_duration_toast_stays_until_removed() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        let id = notifier.show("sticky", NotificationKind::Error, 0);

        clock.advance(60_000);
        assert_eq!(phase(&notifier, id), Some(Phase::Shown));

        notifier.remove(id);
        notifier.remove(id);
        clock.advance(299);
        assert_eq!(phase(&notifier, id), Some(Phase::Leaving));
        clock.advance(1);
        assert!(notifier.items().is_empty());
    }

    #[test]
    fn manual_removal_cancels_pending_dismissal() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        let id = notifier.show("hello", NotificationKind::Info, 5_000);

        notifier.remove(id);
        clock.advance(300);
        assert!(notifier.items().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn clear_drops_every_toast_after_exit() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        notifier.show("a", NotificationKind::Info, 0);
        notifier.show("b", NotificationKind::Warning, 5_000);

        notifier.clear();
        clock.advance(300);
        assert!(notifier.items().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn limit_detaches_evicted_toast() {
        let clock = ManualClock::default();
        let config = UiConfig {
            notification_limit: Some(1),
            ..UiConfig::default()
        };
        let notifier = Notifier::new(clock.clone(), &config);
        let first = notifier.show("first", NotificationKind::Info, 0);
        let second = notifier.show("second", NotificationKind::Info, 0);

        clock.advance(300);
        let ids: Vec<_> = notifier.items().into_iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![second]);
        assert_ne!(first, second);
    }

    #[test]
    fn dropping_the_notifier_cancels_its_timers() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        notifier.show("hello", NotificationKind::Info, 5_000);
        assert_eq!(clock.pending(), 2);

        drop(notifier);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn listener_hears_every_change() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            notifier.set_listener(Some(Rc::new(move || calls.set(calls.get() + 1))));
        }

        let id = notifier.show("hello", NotificationKind::Info, 0);
        assert_eq!(calls.get(), 1);
        clock.advance(10);
        assert_eq!(calls.get(), 2);
        notifier.remove(id);
        clock.advance(300);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn default_notify_uses_configured_duration() {
        let clock = ManualClock::default();
        let notifier = notifier(&clock);
        notifier.notify("sent", NotificationKind::Success);

        clock.advance(5_300);
        assert!(notifier.items().is_empty());
    }
}
