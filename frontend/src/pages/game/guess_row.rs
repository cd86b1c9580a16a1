use yew::prelude::*;

use crate::styles;
use shared::feedback::{Guess, WordStatus};

#[derive(Properties, PartialEq)]
pub struct GuessRowProps {
    pub guess: Guess,
    #[prop_or_default]
    pub highlighted: bool,
}

#[function_component(GuessRow)]
pub fn guess_row(props: &GuessRowProps) -> Html {
    let width = format!("width: {:.0}%", props.guess.similarity.clamp(0.0, 100.0));

    html! {
        <div class={if props.highlighted { styles::GUESS_ROW_HIGHLIGHT } else { styles::GUESS_ROW }}>
            <div class="flex flex-wrap gap-2 justify-center">
                { for props.guess.words.iter().map(|word| {
                    let class = match word.status {
                        WordStatus::Correct => styles::WORD_CORRECT,
                        WordStatus::Misplaced => styles::WORD_MISPLACED,
                        WordStatus::Incorrect => styles::WORD_INCORRECT,
                    };
                    html! { <span {class}>{word.text.clone()}</span> }
                }) }
            </div>
            <div class={styles::SIMILARITY_TRACK}>
                <div class={styles::SIMILARITY_BAR} style={width}></div>
            </div>
        </div>
    }
}
