use yew::prelude::*;

use crate::components::Modal;
use crate::styles;
use shared::game_mode::GameMode;
use shared::screen::{end_game_choices, AppEvent, EndGameChoice, EndGameStep};

#[derive(Properties, PartialEq)]
pub struct EndGameModalProps {
    pub is_open: bool,
    pub mode: GameMode,
    pub result: String,
    // None while the solution is still loading
    pub answer: Option<String>,
    pub share_text: String,
    pub still_alive: bool,
    pub on_next_round: Callback<()>,
    pub on_event: Callback<AppEvent>,
}

fn choice_callback(choice: &EndGameChoice, on_next_round: &Callback<()>, on_event: &Callback<AppEvent>) -> Callback<()> {
    match &choice.step {
        EndGameStep::NextRound => on_next_round.clone(),
        EndGameStep::Navigate(event) => {
            let event = event.clone();
            let on_event = on_event.clone();
            Callback::from(move |_| on_event.emit(event.clone()))
        }
    }
}

#[function_component(EndGameModal)]
pub fn end_game_modal(props: &EndGameModalProps) -> Html {
    let (primary, secondary) = end_game_choices(props.mode, props.still_alive);
    let on_primary = choice_callback(&primary, &props.on_next_round, &props.on_event);

    html! {
        <Modal is_open={props.is_open} on_close={on_primary.clone()}>
            <h2 class={classes!(styles::TEXT_H2, "text-center", "mb-4")}>{props.result.clone()}</h2>
            <p class={classes!(styles::TEXT_BODY, "text-center", "mb-6")}>
                {"The answer was: "}
                <strong>{props.answer.clone().unwrap_or_else(|| "...".to_string())}</strong>
            </p>
            <pre class="mb-8 text-center text-xl leading-tight whitespace-pre-wrap select-all">{props.share_text.clone()}</pre>
            <button type="button" class={styles::BUTTON_PRIMARY_WIDE} onclick={on_primary.reform(|_: MouseEvent| ())}>
                {primary.label}
            </button>
            if let Some(secondary) = secondary {
                <button
                    type="button"
                    class={styles::BUTTON_TEXT}
                    onclick={choice_callback(&secondary, &props.on_next_round, &props.on_event).reform(|_: MouseEvent| ())}
                >
                    {secondary.label}
                </button>
            }
        </Modal>
    }
}
