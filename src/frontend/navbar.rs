use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use super::content;
use super::dom::document;
use crate::state::navigation::ScrollState;
use crate::state::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scroll: ScrollState,
    pub menu_open: bool,
    pub theme: Theme,
    pub on_open: Callback<()>,
    pub on_close: Callback<()>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Clicks anywhere outside the menu and its toggle close the menu.
    {
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = document().ok().map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .is_some_and(|node| node.contains(target.as_ref()))
                    };
                    if !inside(&menu_ref) && !inside(&toggle_ref) {
                        on_close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_open = props.on_open.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    html! {
        <nav id="navbar" class={classes!("navbar", props.scroll.navbar_scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{ content::OWNER_INITIALS }</a>
                <div
                    id="nav-menu"
                    ref={menu_ref}
                    class={classes!("nav-menu", props.menu_open.then_some("show"))}
                >
                    <ul class="nav-list">
                        { for content::NAV_LINKS.iter().map(|(href, label)| html! {
                            <li class="nav-item">
                                <a
                                    href={*href}
                                    class={classes!("nav-link", props.scroll.is_link_active(href).then_some("active"))}
                                    onclick={on_close.clone()}
                                >
                                    { *label }
                                </a>
                            </li>
                        }) }
                    </ul>
                    <div id="nav-close" class="nav-close" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </div>
                </div>
                <div class="nav-buttons">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        onclick={on_toggle_theme}
                    >
                        <i class={props.theme.icon_class()}></i>
                    </button>
                    <div id="nav-toggle" ref={toggle_ref} class="nav-toggle" onclick={on_open}>
                        <i class="fas fa-bars"></i>
                    </div>
                </div>
            </div>
        </nav>
    }
}
