use gloo_timers::callback::Timeout;
use yew::prelude::*;

use shared::constants::{ERROR_DISPLAY_MS, SHAKE_DURATION_MS};

#[derive(Clone, PartialEq)]
pub struct TimedError {
    pub message: Option<String>,
    pub shaking: bool,
    pub show: Callback<String>,
    pub clear: Callback<()>,
}

/// Inline error that shakes its field briefly and clears itself. Showing a
/// new error restarts both timers.
#[hook]
pub fn use_timed_error() -> TimedError {
    let message = use_state(|| None::<String>);
    let shaking = use_state(|| false);
    let timers = use_mut_ref(Vec::<Timeout>::new);

    let show = {
        let message = message.clone();
        let shaking = shaking.clone();
        let timers = timers.clone();
        Callback::from(move |msg: String| {
            message.set(Some(msg));
            shaking.set(true);

            let mut timers = timers.borrow_mut();
            // Dropping a Timeout cancels it
            timers.clear();
            let shaking = shaking.clone();
            timers.push(Timeout::new(SHAKE_DURATION_MS, move || shaking.set(false)));
            let message = message.clone();
            timers.push(Timeout::new(ERROR_DISPLAY_MS, move || message.set(None)));
        })
    };

    let clear = {
        let message = message.clone();
        let shaking = shaking.clone();
        let timers = timers.clone();
        Callback::from(move |_| {
            timers.borrow_mut().clear();
            message.set(None);
            shaking.set(false);
        })
    };

    TimedError {
        message: (*message).clone(),
        shaking: *shaking,
        show,
        clear,
    }
}
