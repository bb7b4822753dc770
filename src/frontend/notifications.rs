use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use super::dom::defer_drop;
use crate::state::notifications::Phase;
use crate::state::notifier::{self, Scheduler};

/// Browser timers for the toast lifecycle.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Timer = Timeout;

    fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn retire(&self, timers: Vec<Timeout>) {
        defer_drop(timers);
    }
}

pub type Notifier = notifier::Notifier<TimeoutScheduler>;

#[derive(Properties, PartialEq)]
pub struct NotificationContainerProps {
    pub notifier: Notifier,
}

#[function_component(NotificationContainer)]
pub fn notification_container(props: &NotificationContainerProps) -> Html {
    let update = use_force_update();

    use_effect_with(props.notifier.clone(), move |notifier| {
        notifier.set_listener(Some(Rc::new(move || update.force_update())));
        let notifier = notifier.clone();
        move || {
            notifier.set_listener(None);
            notifier.clear();
        }
    });

    html! {
        <div id="notification-container" class="notification-container" aria-live="polite">
            { for props.notifier.items().into_iter().map(|item| {
                let onclose = {
                    let notifier = props.notifier.clone();
                    let id = item.id;
                    Callback::from(move |_: MouseEvent| notifier.remove(id))
                };
                let style = (item.phase != Phase::Entering)
                    .then_some("transform: translateX(0); opacity: 1;");

                html! {
                    <div
                        class={classes!(
                            "notification",
                            item.kind.as_class(),
                            (item.phase == Phase::Leaving).then_some("hide"),
                        )}
                        style={style}
                        role="status"
                    >
                        <div class="notification-icon"></div>
                        <div class="notification-content">
                            <div class="notification-message">{ item.message.clone() }</div>
                        </div>
                        <div class="notification-close" onclick={onclose} aria-label="Dismiss notification"></div>
                        <div class="notification-progress"></div>
                    </div>
                }
            }) }
        </div>
    }
}
