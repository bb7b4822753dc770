mod back_to_top;
mod contact;
mod content;
mod dom;
mod hero;
mod hooks;
mod loading;
mod modal;
mod navbar;
mod notifications;
mod projects;
mod skills;
mod testimonials;

use gloo_events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::UiConfig;
use crate::state::modal::CERTIFICATE_MODAL;
use crate::state::navigation::{anchor_target, should_collapse_menu, ScrollState};
use crate::state::scroll_lock::LockOwner;
use crate::state::theme::ThemeManager;
use crate::telemetry;
use back_to_top::BackToTop;
use contact::Contact;
use dom::{LocalStorageStore, ScrollLockHandle};
use hero::Hero;
use loading::LoadingScreen;
use modal::{CertificateModal, ModalHandle};
use navbar::Navbar;
use notifications::{NotificationContainer, Notifier, TimeoutScheduler};
use projects::Projects;
use skills::{Skills, StatCounter};
use testimonials::Testimonials;

const MOUNT_ID: &str = "app";
const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<UiConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();

    let scroll_lock = use_state(ScrollLockHandle::default);
    let notifier = {
        let config = config.clone();
        use_state(move || Notifier::new(TimeoutScheduler, &config))
    };
    let modals = {
        let scroll_lock = (*scroll_lock).clone();
        use_state(move || ModalHandle::new(&[CERTIFICATE_MODAL], scroll_lock))
    };

    let themes = use_mut_ref(|| ThemeManager::load(LocalStorageStore));
    let initial_theme = themes.borrow().theme();
    let theme = use_state_eq(move || initial_theme);

    let menu_open = use_state_eq(|| false);
    let scroll = use_state_eq(ScrollState::default);

    use_effect_with(*theme, |theme| {
        dom::apply_theme(*theme);
        || ()
    });

    let on_toggle_theme = {
        let themes = themes.clone();
        let theme = theme.clone();
        Callback::from(move |_| theme.set(themes.borrow_mut().toggle()))
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        let scroll_lock = (*scroll_lock).clone();
        Callback::from(move |_| {
            scroll_lock.acquire(LockOwner::NavMenu);
            menu_open.set(true);
            debug!("navigation menu opened");
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let scroll_lock = (*scroll_lock).clone();
        Callback::from(move |_| {
            scroll_lock.release(&LockOwner::NavMenu);
            menu_open.set(false);
        })
    };

    // Scroll-derived chrome: navbar shade, back-to-top, active link.
    {
        let scroll = scroll.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let measure = move || {
                scroll.set(ScrollState::measure(
                    dom::scroll_y(),
                    &dom::section_offsets(),
                    &config,
                ));
            };
            measure();
            let listener = window().map(|win| EventListener::new(&win, "scroll", move |_| measure()));
            move || drop(listener)
        });
    }

    {
        let close_menu = close_menu.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "resize", move |_| {
                    if should_collapse_menu(dom::viewport_width(), &config) {
                        close_menu.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    // In-page anchors scroll smoothly instead of jumping.
    use_effect_with((), |_| {
        let listener = dom::document().ok().map(|document| {
            EventListener::new_with_options(
                &document,
                "click",
                EventListenerOptions::enable_prevent_default(),
                |event| {
                    let anchor = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| element.closest(IN_PAGE_ANCHOR).ok().flatten());
                    let Some(href) = anchor.and_then(|anchor| anchor.get_attribute("href")) else {
                        return;
                    };
                    event.prevent_default();
                    if let Some(id) = anchor_target(&href) {
                        if !dom::scroll_to_element(id) {
                            debug!(target_id = id, "anchor target not found");
                        }
                    }
                },
            )
        });
        move || drop(listener)
    });

    let show_certificate = {
        let modals = (*modals).clone();
        Callback::from(move |_: MouseEvent| modals.show(CERTIFICATE_MODAL))
    };

    html! {
        <>
            <LoadingScreen delay_ms={config.loading_screen_delay_ms} fade_ms={config.loading_screen_fade_ms} />
            <Navbar
                scroll={(*scroll).clone()}
                menu_open={*menu_open}
                theme={*theme}
                on_open={open_menu}
                on_close={close_menu}
                on_toggle_theme={on_toggle_theme}
            />
            <main>
                <Hero />
                <section id="about" class="about">
                    <div class="container">
                        <h2 class="section-title">{ "About Me" }</h2>
                        <div class="about-content">
                            <p class="about-text">{ content::HERO_BLURB }</p>
                            <div class="about-stats">
                                { for content::STATS.iter().map(|stat| html! {
                                    <StatCounter stat={stat} config={config.clone()} />
                                }) }
                            </div>
                        </div>
                    </div>
                </section>
                <Skills config={config.clone()} />
                <Projects />
                <Testimonials interval_ms={config.carousel_interval_ms} />
                <Contact notifier={(*notifier).clone()} config={config.clone()} />
            </main>
            <footer class="footer">
                <div class="container">
                    <p>{ format!("© {}. All rights reserved.", content::OWNER_NAME) }</p>
                    <button type="button" class="certificate-link" onclick={show_certificate}>
                        <i class="fas fa-certificate"></i>{ " View certificate" }
                    </button>
                </div>
            </footer>
            <CertificateModal modals={(*modals).clone()} />
            <BackToTop visible={scroll.back_to_top_visible} />
            <NotificationContainer notifier={(*notifier).clone()} />
        </>
    }
}

pub fn run() {
    let loaded = dom::read_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    telemetry::init(config.log_level);
    match loaded {
        Ok(_) => info!(log_level = config.log_level.as_str(), "configuration loaded"),
        Err(err) => warn!(error = %err, "invalid configuration block, using defaults"),
    }

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .expect("missing #app mount point");

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
