use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Stage {
    Visible,
    Fading,
    Gone,
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

/// Full-page overlay: starts fading after `delay_ms`, leaves layout after a
/// further `fade_ms`.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let stage = use_state_eq(|| Stage::Visible);

    {
        let stage = stage.clone();
        use_effect_with((props.delay_ms, props.fade_ms), move |&(delay_ms, fade_ms)| {
            let removal: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let fade = {
                let removal = removal.clone();
                Timeout::new(delay_ms, move || {
                    stage.set(Stage::Fading);
                    let stage = stage.clone();
                    *removal.borrow_mut() = Some(Timeout::new(fade_ms, move || stage.set(Stage::Gone)));
                })
            };
            move || {
                drop(fade);
                removal.borrow_mut().take();
            }
        });
    }

    html! {
        <div
            id="loading-screen"
            class={classes!("loading-screen", (*stage != Stage::Visible).then_some("hide"))}
            style={(*stage == Stage::Gone).then_some("display: none;")}
        >
            <div class="loader"></div>
        </div>
    }
}
