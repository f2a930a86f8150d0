use gloo_timers::callback::Interval;
use log::{debug, error};
use yew::prelude::*;

use crate::countdown::{parse_deadline, CountdownState};

const NOT_CONFIGURED: &str = "Set the registration deadline in the site configuration";
const CLOSED: &str = "Registration Closed";

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[derive(Properties, Clone, PartialEq)]
pub struct CountdownProps {
    /// ISO 8601 deadline with offset; `None` renders the setup hint.
    pub deadline_iso: Option<AttrValue>,
}

/// Live `DDd : HHh : MMm : SSs` display driven by a one-second interval.
///
/// The interval is owned here and exists only while the countdown is
/// running: reaching zero flips the state to closed, the effect re-runs
/// and its cleanup cancels the timer. Closed is terminal until reload.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let deadline_ms: Option<i64> = *use_memo(props.deadline_iso.clone(), |iso| match iso {
        Some(iso) => match parse_deadline(iso) {
            Ok(ms) => Some(ms),
            Err(err) => {
                error!("Invalid deadline {:?}: {}", iso, err);
                None
            }
        },
        None => None,
    });

    // Immediate first render, before the first tick fires.
    let state = use_state(|| deadline_ms.map(|ms| CountdownState::at(ms, now_ms())));

    let running = matches!(*state, Some(CountdownState::Running(_)));
    {
        let state = state.clone();
        use_effect_with(running, move |running| {
            if *running {
                if let Some(deadline_ms) = deadline_ms {
                    debug!("Starting countdown interval");
                    let interval = Interval::new(1000, move || {
                        state.set(Some(CountdownState::at(deadline_ms, now_ms())));
                    });
                    return Box::new(move || {
                        debug!("Countdown interval cancelled");
                        interval.cancel();
                    }) as Box<dyn FnOnce()>;
                }
            }
            Box::new(|| {}) as Box<dyn FnOnce()>
        });
    }

    let text = match *state {
        None => {
            if props.deadline_iso.is_some() {
                // Malformed deadline: logged above, nothing to count.
                String::new()
            } else {
                NOT_CONFIGURED.to_string()
            }
        }
        Some(CountdownState::Closed) => CLOSED.to_string(),
        Some(CountdownState::Running(remaining)) => remaining.to_string(),
    };

    html! {
        <div id="countdown" class="font-mono text-2xl sm:text-3xl font-semibold tracking-wider text-amber-300">
            { text }
        </div>
    }
}
