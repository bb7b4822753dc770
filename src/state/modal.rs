use std::collections::BTreeSet;
use tracing::info;

use super::scroll_lock::{LockOwner, ScrollLock};

pub const CERTIFICATE_MODAL: &str = "certificate-modal";

/// Open/closed flag per known modal. Ids that were never registered behave
/// like missing markup: showing or hiding them does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    known: BTreeSet<String>,
    open: BTreeSet<String>,
}

impl ModalRegistry {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: ids.into_iter().map(Into::into).collect(),
            open: BTreeSet::new(),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn show(&mut self, id: &str, lock: &mut ScrollLock) -> bool {
        if !self.known.contains(id) {
            return false;
        }
        self.open.insert(id.to_string());
        lock.acquire(LockOwner::Modal(id.to_string()));
        info!(modal = id, "modal shown");
        true
    }

    pub fn hide(&mut self, id: &str, lock: &mut ScrollLock) -> bool {
        if !self.known.contains(id) {
            return false;
        }
        self.open.remove(id);
        lock.release(&LockOwner::Modal(id.to_string()));
        info!(modal = id, "modal hidden");
        true
    }

    pub fn hide_all(&mut self, lock: &mut ScrollLock) {
        self.open.clear();
        lock.release_modals();
    }
}

/// A click closes a modal only when it lands on the modal's own root, the
/// backdrop, and not on anything inside its content.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, modal_root: Option<T>) -> bool {
    match (target, modal_root) {
        (Some(target), Some(root)) => target == root,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_modal_is_a_no_op() {
        let mut registry = ModalRegistry::new([CERTIFICATE_MODAL]);
        let mut lock = ScrollLock::default();

        assert!(!registry.show("missing", &mut lock));
        assert!(!lock.is_locked());
    }

    #[test]
    fn show_and_hide_toggle_flag_and_lock() {
        let mut registry = ModalRegistry::new([CERTIFICATE_MODAL]);
        let mut lock = ScrollLock::default();

        assert!(registry.show(CERTIFICATE_MODAL, &mut lock));
        assert!(registry.is_open(CERTIFICATE_MODAL));
        assert!(lock.is_locked());

        assert!(registry.hide(CERTIFICATE_MODAL, &mut lock));
        assert!(!registry.is_open(CERTIFICATE_MODAL));
        assert!(!lock.is_locked());
    }

    #[test]
    fn several_modals_may_be_open_at_once() {
        let mut registry = ModalRegistry::new(["a", "b"]);
        let mut lock = ScrollLock::default();
        registry.show("a", &mut lock);
        registry.show("b", &mut lock);

        registry.hide("a", &mut lock);
        assert!(registry.is_open("b"));
        assert!(lock.is_locked());

        registry.hide_all(&mut lock);
        assert!(!registry.is_open("b"));
        assert!(!lock.is_locked());
    }

    #[test]
    fn hide_all_leaves_menu_lock_in_place() {
        let mut registry = ModalRegistry::new([CERTIFICATE_MODAL]);
        let mut lock = ScrollLock::default();
        lock.acquire(LockOwner::NavMenu);
        registry.show(CERTIFICATE_MODAL, &mut lock);

        registry.hide_all(&mut lock);
        assert!(lock.is_locked());
    }

    #[test]
    fn backdrop_click_requires_the_modal_root_itself() {
        assert!(is_backdrop_click(Some("certificate-modal"), Some("certificate-modal")));
        assert!(!is_backdrop_click(Some("modal-content"), Some("certificate-modal")));
        assert!(!is_backdrop_click(Some("app"), Some("certificate-modal")));
    }

    #[test]
    fn backdrop_click_needs_both_ends() {
        assert!(!is_backdrop_click(None, Some("certificate-modal")));
        assert!(!is_backdrop_click(Some("certificate-modal"), None));
        assert!(!is_backdrop_click::<&str>(None, None));
    }
}
