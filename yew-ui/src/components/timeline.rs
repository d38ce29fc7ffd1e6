/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */


//! Process timeline inside the About section.
//!
//! The highlighted step follows the page scroll through [`TimelineMapper`]
//! and can be picked directly by clicking a card or a dot. A click only moves
//! the highlight; the next scroll tick recomputes it from geometry.

use std::num::NonZeroUsize;

use codarise_core::timeline::{is_left, TIMELINE_ELEMENT_ID};
use codarise_core::TimelineMapper;
use yew::prelude::*;

use crate::context::LocaleCtx;
use crate::dom_layout::DomLayout;
use crate::hooks::use_scroll_subscription;

pub struct TimelineStep {
    /// Suffix of the `about.timeline.steps.*` translation keys.
    pub key: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

const STEP_TOTAL: usize = 5;

pub static TIMELINE_STEPS: [TimelineStep; STEP_TOTAL] = [
    TimelineStep { key: "0", icon: "\u{1F52E}", accent: "accent-cyan" },
    TimelineStep { key: "1", icon: "\u{1F9F5}", accent: "accent-violet" },
    TimelineStep { key: "2", icon: "\u{2728}", accent: "accent-emerald" },
    TimelineStep { key: "3", icon: "\u{26A1}", accent: "accent-amber" },
    TimelineStep { key: "4", icon: "\u{1F680}", accent: "accent-rose" },
];

const STEP_COUNT: NonZeroUsize = match NonZeroUsize::new(STEP_TOTAL) {
    Some(count) => count,
    None => panic!("timeline needs at least one step"),
};

/// Height of the filled progress rail, in percent.
pub fn rail_fill_percent(active: usize, step_count: usize) -> f64 {
    if step_count == 0 {
        return 0.0;
    }
    ((active + 1).min(step_count) as f64 / step_count as f64) * 100.0
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let locale = use_context::<LocaleCtx>();
    let mapper = use_mut_ref(|| TimelineMapper::with_step_count(STEP_COUNT));
    let active = use_state_eq(|| 0usize);

    {
        let mapper = mapper.clone();
        let active = active.clone();
        use_scroll_subscription((), move |_tick| {
            let layout = DomLayout::new();
            if let Some(step) = mapper.borrow_mut().recompute(&layout, TIMELINE_ELEMENT_ID) {
                active.set(step);
            }
        });
    }

    let Some(locale) = locale else {
        log::error!("Timeline rendered outside LocaleProvider");
        return html! {};
    };

    let select = {
        let mapper = mapper.clone();
        let active = active.clone();
        move |index: usize| {
            let mapper = mapper.clone();
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                let step = mapper.borrow_mut().select(index);
                active.set(step);
            })
        }
    };

    let direction = locale.locale.direction();
    let step_label = locale.t("about.timeline.stepLabel");
    let fill = format!("height: {}%;", rail_fill_percent(*active, STEP_COUNT.get()));

    let steps = TIMELINE_STEPS.iter().enumerate().map(|(index, step)| {
        let is_active = index == *active;
        let row_class = classes!(
            "timeline-row",
            if is_left(index, direction) { "timeline-left" } else { "timeline-right" },
            is_active.then_some("active"),
        );
        let title = locale.t(&format!("about.timeline.steps.{}.title", step.key));
        let desc = locale.t(&format!("about.timeline.steps.{}.desc", step.key));
        html! {
            <li key={step.key} class={row_class} data-step={index.to_string()}>
                <div
                    class={classes!("timeline-card", step.accent)}
                    role="button"
                    tabindex="0"
                    onclick={select(index)}
                >
                    <span class="timeline-icon" aria-hidden="true">{ step.icon }</span>
                    <h4 class="timeline-card-title">{ title }</h4>
                    <p class="timeline-card-desc">{ desc }</p>
                </div>
                <button
                    class={classes!("timeline-dot", step.accent, is_active.then_some("active"))}
                    aria-label={format!("{step_label} {}", index + 1)}
                    aria-current={is_active.then_some("step")}
                    onclick={select(index)}
                />
            </li>
        }
    });

    let controls = (0..STEP_COUNT.get()).map(|index| {
        let is_active = index == *active;
        html! {
            <button
                key={index}
                class={classes!("timeline-control", is_active.then_some("active"))}
                aria-label={format!("{step_label} {}", index + 1)}
                aria-pressed={is_active.to_string()}
                onclick={select(index)}
            />
        }
    });

    html! {
        <div id={TIMELINE_ELEMENT_ID} class="timeline" data-active-step={(*active).to_string()}>
            <div class="timeline-header">
                <h3 class="timeline-title">{ locale.t("about.timeline.title") }</h3>
                <p class="timeline-subtitle">{ locale.t("about.timeline.subtitle") }</p>
            </div>
            <div class="timeline-body">
                <div class="timeline-rail" aria-hidden="true">
                    <div class="timeline-rail-fill" style={fill} />
                </div>
                <ol class="timeline-steps">
                    { for steps }
                </ol>
            </div>
            <div class="timeline-controls">
                { for controls }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_fills_up_to_the_active_step() {
        assert_eq!(rail_fill_percent(0, 5), 20.0);
        assert_eq!(rail_fill_percent(4, 5), 100.0);
        assert_eq!(rail_fill_percent(9, 5), 100.0);
        assert_eq!(rail_fill_percent(0, 0), 0.0);
    }

    #[test]
    fn every_step_has_a_translation_key() {
        for (index, step) in TIMELINE_STEPS.iter().enumerate() {
            assert_eq!(step.key, index.to_string());
        }
    }
}
