use tracing::warn;
use web_sys::Element;
use yew::prelude::*;

use super::dom::RevealObserver;

/// Calls `on_reveal` once, when the referenced element first scrolls into
/// view.
#[hook]
pub fn use_reveal_once(node: NodeRef, on_reveal: Callback<()>) {
    use_effect_with(node, move |node| {
        let observer = node.cast::<Element>().and_then(|element| {
            RevealObserver::observe(&element, on_reveal)
                .map_err(|err| warn!(error = %err, "visibility observer unavailable"))
                .ok()
        });
        move || drop(observer)
    });
}
