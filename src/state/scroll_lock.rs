//! Page scroll suppression shared by the slide-out menu and modals.
//!
//! Each overlay acquires the lock under its own owner key and releases the
//! same key when it closes. The page stays locked while any owner remains,
//! so closing the menu never unlocks scrolling underneath an open modal.

use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockOwner {
    NavMenu,
    Modal(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    owners: BTreeSet<LockOwner>,
}

impl ScrollLock {
    pub fn is_locked(&self) -> bool {
        !self.owners.is_empty()
    }

    /// Idempotent per owner. Returns true when the page went from scrollable
    /// to locked.
    pub fn acquire(&mut self, owner: LockOwner) -> bool {
        let was_locked = self.is_locked();
        self.owners.insert(owner);
        !was_locked
    }

    /// Returns true when the page became scrollable again.
    pub fn release(&mut self, owner: &LockOwner) -> bool {
        let removed = self.owners.remove(owner);
        removed && !self.is_locked()
    }

    pub fn release_modals(&mut self) -> bool {
        let was_locked = self.is_locked();
        self.owners
            .retain(|owner| !matches!(owner, LockOwner::Modal(_)));
        was_locked && !self.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_acquire_by_one_owner_needs_one_release() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire(LockOwner::NavMenu));
        assert!(!lock.acquire(LockOwner::NavMenu));
        assert!(lock.release(&LockOwner::NavMenu));
        assert!(!lock.is_locked());
    }

    #[test]
    fn closing_menu_keeps_lock_while_modal_open() {
        let mut lock = ScrollLock::default();
        lock.acquire(LockOwner::NavMenu);
        lock.acquire(LockOwner::Modal("certificate-modal".into()));

        assert!(!lock.release(&LockOwner::NavMenu));
        assert!(lock.is_locked());
        assert!(lock.release(&LockOwner::Modal("certificate-modal".into())));
        assert!(!lock.is_locked());
    }

    #[test]
    fn releasing_unknown_owner_is_a_no_op() {
        let mut lock = ScrollLock::default();
        assert!(!lock.release(&LockOwner::NavMenu));
        assert!(!lock.is_locked());
    }

    #[test]
    fn release_modals_keeps_menu_owner() {
        let mut lock = ScrollLock::default();
        lock.acquire(LockOwner::Modal("a".into()));
        lock.acquire(LockOwner::Modal("b".into()));
        lock.acquire(LockOwner::NavMenu);

        assert!(!lock.release_modals());
        assert!(lock.is_locked());
        assert!(lock.release(&LockOwner::NavMenu));
    }
}
