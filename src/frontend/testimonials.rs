use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

use super::content;
use crate::state::carousel::Carousel;

pub enum CarouselAction {
    Next,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => {
                next.next();
            }
            CarouselAction::GoTo(index) => {
                next.go_to(index);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub interval_ms: u32,
}

/// Auto-advancing carousel. Picking a dot jumps straight to that slide; the
/// timer keeps its own phase.
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = use_reducer(|| Carousel::new(content::TESTIMONIALS.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(props.interval_ms, move |interval_ms| {
            let interval = Interval::new(*interval_ms, move || dispatcher.dispatch(CarouselAction::Next));
            move || drop(interval)
        });
    }

    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <h2 class="section-title">{ "What People Say" }</h2>
                <div class="testimonials-slider">
                    { for content::TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div class={classes!("testimonial-card", carousel.is_active(index).then_some("active"))}>
                            <p class="testimonial-text">{ testimonial.quote }</p>
                            <div class="testimonial-author">
                                <img src={testimonial.avatar} alt={testimonial.author} loading="lazy" />
                                <div class="author-info">
                                    <h4>{ testimonial.author }</h4>
                                    <span>{ testimonial.role }</span>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="testimonial-nav">
                    { for (0..carousel.len()).map(|index| {
                        let onclick = {
                            let dispatcher = carousel.dispatcher();
                            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(index)))
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("nav-dot", carousel.is_active(index).then_some("active"))}
                                aria-label={format!("Show testimonial {}", index + 1)}
                                aria-current={(carousel.current() == index).then_some("true")}
                                onclick={onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
