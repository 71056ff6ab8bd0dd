use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::counter::CountUp;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    /// Anything integer-like, e.g. `"1200"`. Unusable values count to 0.
    pub target: AttrValue,
    pub label: AttrValue,
}

/// Counts from 0 up to `target` once, roughly over a second, then holds.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    // Re-render trigger only; the text comes from the cycle itself
    let count = use_state_eq(|| 0u32);
    let count_up = use_mut_ref(CountUp::<Interval>::default);

    // Start a fresh cycle on mount and whenever the raw target changes
    {
        let count = count.clone();
        let count_up = count_up.clone();

        use_effect_with_deps(
            move |raw_target: &AttrValue| {
                let schedule = {
                    let count = count.clone();
                    let count_up = count_up.clone();
                    move |interval_ms| {
                        Interval::new(interval_ms, move || {
                            let next = count_up.borrow_mut().tick();
                            if let Some(next) = next {
                                count.set(next);
                            }
                        })
                    }
                };
                count_up.borrow_mut().retarget(raw_target, schedule);
                count.set(count_up.borrow().current());

                move || count_up.borrow_mut().teardown()
            },
            props.target.clone(),
        );
    }

    // Release the timer as soon as the current cycle is at rest
    {
        let count_up = count_up.clone();
        let label = props.label.clone();

        use_effect_with_deps(
            move |_| {
                let mut count_up = count_up.borrow_mut();
                if count_up.release_if_resting() {
                    debug!("counter '{}' reached {}", label, count_up.target());
                }
                || ()
            },
            *count,
        );
    }

    html! {
        <div class="stat">
            <div class="stat-value">{count_up.borrow().display()}</div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}
