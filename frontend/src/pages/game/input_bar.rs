use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::TimedError;
use crate::styles;
use shared::validation::{classify_key, normalize_guess, KeyAction};

#[derive(Properties, PartialEq)]
pub struct InputBarProps {
    pub current_guess: String,
    pub on_change: Callback<String>,
    // Trimmed, non-empty guess; the caller checks it against the acronym
    pub on_submit: Callback<String>,
    pub on_exit: Callback<()>,
    pub error: TimedError,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub input_ref: NodeRef,
}

#[function_component(InputBar)]
pub fn input_bar(props: &InputBarProps) -> Html {
    {
        let input_ref = props.input_ref.clone();
        use_effect_with(props.disabled, move |disabled| {
            if !*disabled {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    let onkeydown = {
        let current = props.current_guess.clone();
        let on_submit = props.on_submit.clone();
        let on_exit = props.on_exit.clone();
        Callback::from(move |e: KeyboardEvent| match classify_key(&e.key(), &current) {
            KeyAction::Exit => {
                e.prevent_default();
                on_exit.emit(());
            }
            KeyAction::Submit => {
                e.prevent_default();
                let guess = current.trim();
                if !guess.is_empty() {
                    on_submit.emit(guess.to_string());
                }
            }
            // Shortcuts such as paste stay available
            KeyAction::Block if !(e.ctrl_key() || e.meta_key()) => e.prevent_default(),
            _ => {}
        })
    };

    let oninput = {
        let on_change = props.on_change.clone();
        let clear_error = props.error.clear.clone();
        let has_error = props.error.message.is_some();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let normalized = normalize_guess(&input.value());
            if normalized != input.value() {
                input.set_value(&normalized);
            }
            if has_error {
                clear_error.emit(());
            }
            on_change.emit(normalized);
        })
    };

    let field_class = if props.error.message.is_some() { styles::INPUT_ERROR } else { styles::INPUT };

    html! {
        <div class={classes!(props.error.shaking.then_some(styles::SHAKE))}>
            <input
                ref={props.input_ref.clone()}
                type="text"
                class={field_class}
                value={props.current_guess.clone()}
                placeholder="Type your guess..."
                autocomplete="off"
                spellcheck="false"
                disabled={props.disabled}
                {onkeydown}
                {oninput}
            />
            <p class={classes!(styles::TEXT_ERROR, "mt-2", "h-5", "text-center")}>
                { props.error.message.clone().unwrap_or_default() }
            </p>
        </div>
    }
}
