//! Page behavior that does not need a browser to reason about.

pub mod carousel;
pub mod contact;
pub mod counter;
pub mod modal;
pub mod navigation;
pub mod notifications;
pub mod notifier;
pub mod scroll_lock;
pub mod theme;
pub mod typewriter;
pub mod validation;
