use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use super::content;
use crate::state::typewriter::{Typewriter, HERO_PHRASES};

type TimerSlot = Rc<RefCell<Option<Timeout>>>;

fn schedule(typewriter: Rc<RefCell<Typewriter>>, text: UseStateHandle<String>, slot: TimerSlot, delay_ms: u32) {
    let next_slot = slot.clone();
    let timeout = Timeout::new(delay_ms, move || {
        let next_delay = typewriter.borrow_mut().tick();
        text.set(typewriter.borrow().text());
        if let Some(next_delay) = next_delay {
            schedule(typewriter, text, next_slot, next_delay);
        }
    });
    // Replacing the slot drops the timeout that just fired, never a pending one.
    let fired = slot.borrow_mut().replace(timeout);
    super::dom::defer_drop(fired);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with((), move |_| {
            let slot: TimerSlot = Rc::new(RefCell::new(None));
            let typewriter = Rc::new(RefCell::new(Typewriter::new(HERO_PHRASES)));
            schedule(typewriter, text, slot.clone(), 0);
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    html! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <p class="hero-greeting">{ "Hello, I'm" }</p>
                    <h1 class="hero-name">{ content::OWNER_NAME }</h1>
                    <h2 class="hero-title">
                        { "I'm a " }<span class="typed-text">{ (*text).clone() }</span>
                    </h2>
                    <p class="hero-description">{ content::HERO_BLURB }</p>
                    <div class="hero-buttons">
                        <a href="#projects" class="btn btn-primary">{ "View My Work" }</a>
                        <a href="#contact" class="btn btn-secondary">{ "Get In Touch" }</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
