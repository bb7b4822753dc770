use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use super::content::{self, Skill, Stat};
use super::dom::defer_drop;
use super::hooks::use_reveal_once;
use crate::config::UiConfig;
use crate::state::counter::CounterAnimation;

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    skill: &'static Skill,
    reveal_delay_ms: u32,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let card_ref = use_node_ref();
    let width = use_state(|| None::<u8>);
    let pending = use_mut_ref(|| None::<Timeout>);

    let on_reveal = {
        let width = width.clone();
        let pending = pending.clone();
        let percent = props.skill.percent;
        let delay = props.reveal_delay_ms;
        Callback::from(move |_| {
            let width = width.clone();
            *pending.borrow_mut() = Some(Timeout::new(delay, move || width.set(Some(percent))));
        })
    };
    use_reveal_once(card_ref.clone(), on_reveal);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| move || drop(pending.borrow_mut().take()));
    }

    let style = width.map(|percent| format!("width: {percent}%"));

    html! {
        <div class="skill-card" ref={card_ref}>
            <div class="skill-icon"><i class={props.skill.icon}></i></div>
            <h3>{ props.skill.name }</h3>
            <div class="skill-progress">
                <div class="progress-bar" data-width={format!("{}%", props.skill.percent)} style={style}></div>
            </div>
            <span class="skill-percentage">{ format!("{}%", props.skill.percent) }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub config: Rc<UiConfig>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title">{ "Skills & Expertise" }</h2>
                <div class="skills-grid">
                    { for content::SKILLS.iter().map(|skill| html! {
                        <SkillCard skill={skill} reveal_delay_ms={props.config.progress_reveal_delay_ms} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: &'static Stat,
    pub config: Rc<UiConfig>,
}

/// Counts up from zero the first time the stat scrolls into view.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| 0_i64);
    let ticker: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    let on_reveal = {
        let shown = shown.clone();
        let ticker = ticker.clone();
        let target = props.stat.count;
        let duration = props.config.counter_duration_ms;
        let tick = props.config.counter_tick_ms;
        Callback::from(move |_| {
            let mut animation = CounterAnimation::new(target, duration, tick);
            let shown = shown.clone();
            let slot = ticker.clone();
            let interval = Interval::new(tick, move || match animation.tick() {
                Some(value) => {
                    shown.set(value);
                    if animation.is_finished() {
                        defer_drop(slot.borrow_mut().take());
                    }
                }
                None => defer_drop(slot.borrow_mut().take()),
            });
            *ticker.borrow_mut() = Some(interval);
        })
    };
    use_reveal_once(node.clone(), on_reveal);

    {
        let ticker = ticker.clone();
        use_effect_with((), move |_| move || drop(ticker.borrow_mut().take()));
    }

    html! {
        <div class="stat-item">
            <span class="stat-number" ref={node} data-count={props.stat.count.to_string()}>
                { shown.to_string() }
            </span>
            <span class="stat-label">{ props.stat.label }</span>
        </div>
    }
}
