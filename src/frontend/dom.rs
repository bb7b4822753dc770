use js_sys::{Array, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Storage,
};
use yew::Callback;

use crate::config::{UiConfig, CONFIG_ELEMENT_ID};
use crate::error::{ConfigError, UiError};
use crate::state::navigation::SectionOffset;
use crate::state::scroll_lock::{LockOwner, ScrollLock};
use crate::state::theme::{PreferenceStore, Theme};

pub fn document() -> Result<Document, UiError> {
    window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

pub fn read_config() -> Result<UiConfig, ConfigError> {
    let source = document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    UiConfig::from_json(&source)
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        local_storage()
            .ok_or(UiError::StorageUnavailable)?
            .set_item(key, value)?;
        Ok(())
    }
}

pub fn apply_theme(theme: Theme) {
    let applied = document()
        .and_then(|document| document.document_element().ok_or(UiError::NoDocument))
        .and_then(|root| {
            root.set_attribute("data-theme", theme.as_str())
                .map_err(UiError::from)
        });
    if let Err(err) = applied {
        warn!(error = %err, theme = theme.as_str(), "theme not applied");
    }
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn section_offsets() -> Vec<SectionOffset> {
    let Ok(nodes) = document().and_then(|document| {
        document
            .query_selector_all("section[id]")
            .map_err(UiError::from)
    }) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionOffset {
            id: section.id(),
            top: f64::from(section.offset_top()),
        })
        .collect()
}

pub fn smooth_scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls the element with `id` to the top of the viewport. Returns
/// false when no such element exists.
pub fn scroll_to_element(id: &str) -> bool {
    let Some(target) = document()
        .ok()
        .and_then(|document| document.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

fn set_body_scroll_locked(locked: bool) -> Result<(), UiError> {
    let body = document()?.body().ok_or(UiError::NoDocument)?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

/// Drops `value` once the current callback has returned. Used when a timer
/// callback finishes with the handle that owns it.
pub fn defer_drop<T: 'static>(value: T) {
    spawn_local(async move { drop(value) });
}

/// The page's scroll lock, mirrored onto `body` after every change.
#[derive(Clone, Default)]
pub struct ScrollLockHandle(Rc<RefCell<ScrollLock>>);

impl PartialEq for ScrollLockHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ScrollLockHandle {
    pub fn with<R>(&self, update: impl FnOnce(&mut ScrollLock) -> R) -> R {
        let (result, locked) = {
            let mut lock = self.0.borrow_mut();
            let result = update(&mut lock);
            (result, lock.is_locked())
        };
        if let Err(err) = set_body_scroll_locked(locked) {
            warn!(error = %err, "scroll lock not applied");
        }
        result
    }

    pub fn acquire(&self, owner: LockOwner) {
        self.with(|lock| lock.acquire(owner));
    }

    pub fn release(&self, owner: &LockOwner) {
        self.with(|lock| lock.release(owner));
    }
}

/// A function published on `window` for inline markup handlers. Removed
/// again when dropped.
pub struct GlobalFunction {
    name: &'static str,
    _closure: Closure<dyn FnMut()>,
}

impl GlobalFunction {
    pub fn install(name: &'static str, callback: impl FnMut() + 'static) -> Result<Self, UiError> {
        let win = window().ok_or(UiError::NoWindow)?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        Reflect::set(&win, &JsValue::from_str(name), closure.as_ref())?;
        Ok(Self {
            name,
            _closure: closure,
        })
    }
}

impl Drop for GlobalFunction {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = Reflect::delete_property(&win, &JsValue::from_str(self.name));
        }
    }
}

/// Fires `on_reveal` the first time `element` intersects the viewport, then
/// stops watching it. Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(element: &Element, on_reveal: Callback<()>) -> Result<Self, UiError> {
        let mut fired = false;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() && !fired {
                        fired = true;
                        observer.unobserve(&entry.target());
                        on_reveal.emit(());
                    }
                }
            },
        );

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
