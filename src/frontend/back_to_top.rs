use yew::prelude::*;

use super::dom::smooth_scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to_top());

    html! {
        <button
            id="back-to-top"
            class={classes!("back-to-top", props.visible.then_some("show"))}
            type="button"
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
