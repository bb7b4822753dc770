use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

use super::content;
use super::dom::{document, GlobalFunction, ScrollLockHandle};
use crate::state::modal::{is_backdrop_click, ModalRegistry, CERTIFICATE_MODAL};

const SHOW_CERTIFICATE_FN: &str = "showCertificate";

struct ModalInner {
    registry: RefCell<ModalRegistry>,
    scroll_lock: ScrollLockHandle,
    listener: RefCell<Option<Callback<()>>>,
}

#[derive(Clone)]
pub struct ModalHandle(Rc<ModalInner>);

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ModalHandle {
    pub fn new(ids: &[&str], scroll_lock: ScrollLockHandle) -> Self {
        Self(Rc::new(ModalInner {
            registry: RefCell::new(ModalRegistry::new(ids.iter().copied())),
            scroll_lock,
            listener: RefCell::new(None),
        }))
    }

    fn refresh(&self) {
        let listener = self.0.listener.borrow().clone();
        if let Some(listener) = listener {
            listener.emit(());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.0.registry.borrow().is_open(id)
    }

    pub fn show(&self, id: &str) {
        let shown = self
            .0
            .scroll_lock
            .with(|lock| self.0.registry.borrow_mut().show(id, lock));
        if shown {
            self.refresh();
        }
    }

    pub fn hide(&self, id: &str) {
        let hidden = self
            .0
            .scroll_lock
            .with(|lock| self.0.registry.borrow_mut().hide(id, lock));
        if hidden {
            self.refresh();
        }
    }

    pub fn hide_all(&self) {
        self.0
            .scroll_lock
            .with(|lock| self.0.registry.borrow_mut().hide_all(lock));
        self.refresh();
    }
}

#[derive(Properties, PartialEq)]
pub struct CertificateModalProps {
    pub modals: ModalHandle,
}

/// The certificate dialog, plus the page-wide bindings every modal shares:
/// Escape closes all of them and `window.showCertificate()` opens this one.
#[function_component(CertificateModal)]
pub fn certificate_modal(props: &CertificateModalProps) -> Html {
    let update = use_force_update();
    let root_ref = use_node_ref();

    use_effect_with(props.modals.clone(), move |modals| {
        *modals.0.listener.borrow_mut() = Some(Callback::from(move |_| update.force_update()));

        let escape = document().ok().map(|document| {
            let modals = modals.clone();
            EventListener::new(&document, "keydown", move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|event| event.key() == "Escape");
                if escape {
                    modals.hide_all();
                }
            })
        });

        let trigger = {
            let modals = modals.clone();
            GlobalFunction::install(SHOW_CERTIFICATE_FN, move || modals.show(CERTIFICATE_MODAL))
                .map_err(|err| warn!(error = %err, "certificate trigger not installed"))
                .ok()
        };

        let modals = modals.clone();
        move || {
            drop(trigger);
            drop(escape);
            *modals.0.listener.borrow_mut() = None;
        }
    });

    let open = props.modals.is_open(CERTIFICATE_MODAL);

    // Yew delegates events from the mount point, so `current_target` is never
    // the modal; compare against the rendered root instead.
    let on_backdrop = {
        let modals = props.modals.clone();
        let root_ref = root_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
            if is_backdrop_click(target, root_ref.get()) {
                modals.hide(CERTIFICATE_MODAL);
            }
        })
    };

    let on_close = {
        let modals = props.modals.clone();
        Callback::from(move |_: MouseEvent| modals.hide(CERTIFICATE_MODAL))
    };

    html! {
        <div
            id={CERTIFICATE_MODAL}
            ref={root_ref}
            class={classes!("modal", open.then_some("show"))}
            onclick={on_backdrop}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!open).to_string()}
        >
            <div class="modal-content">
                <button class="modal-close" type="button" onclick={on_close} aria-label="Close">
                    <i class="fas fa-times"></i>
                </button>
                <h3>{ content::CERTIFICATE.title }</h3>
                <img src={content::CERTIFICATE.image} alt={content::CERTIFICATE.title} loading="lazy" />
                <p>{ content::CERTIFICATE.issuer }</p>
            </div>
        </div>
    }
}
