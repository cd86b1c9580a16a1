use yew::prelude::*;

use crate::components::ScreenWrapper;
use crate::styles;
use shared::feedback::WordStatus;
use shared::game_mode::GameMode;
use shared::screen::AppEvent;

#[derive(Properties, PartialEq)]
pub struct InstructionsProps {
    pub on_event: Callback<AppEvent>,
}

fn section(title: &'static str, body: Html) -> Html {
    html! {
        <section class={classes!(styles::CARD, "mb-6")}>
            <h2 class={classes!(styles::CARD_TITLE, "mb-3")}>{title}</h2>
            { body }
        </section>
    }
}

fn word_badge(status: WordStatus, label: &'static str, meaning: &'static str) -> Html {
    let class = match status {
        WordStatus::Correct => styles::WORD_CORRECT,
        WordStatus::Misplaced => styles::WORD_MISPLACED,
        WordStatus::Incorrect => styles::WORD_INCORRECT,
    };
    html! {
        <div class="flex items-center gap-3 mb-2">
            <span class={class}>{label}</span>
            <span class={styles::TEXT_BODY}>{meaning}</span>
        </div>
    }
}

#[function_component(Instructions)]
pub fn instructions(props: &InstructionsProps) -> Html {
    let on_dismiss = {
        let on_event = props.on_event.clone();
        Callback::from(move |_| on_event.emit(AppEvent::Back))
    };

    html! {
        <ScreenWrapper {on_dismiss} title="How to Play">
            <p class={classes!(styles::TEXT_BODY, "text-center", "mb-8")}>{"Master the art of acronym guessing"}</p>

            { section("The Objective", html! {
                <>
                    <p class={styles::TEXT_BODY}>
                        {"Guess the phrase that matches the acronym. Each letter is the first letter of a word in the solution."}
                    </p>
                    <div class="mt-4 text-center">
                        <div class={styles::ACRONYM}>{"B R B"}</div>
                        <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{"Answer: "}<strong>{"Be Right Back"}</strong></p>
                    </div>
                </>
            }) }

            { section("How to Guess", html! {
                <ul class={classes!(styles::TEXT_BODY, "list-disc", "pl-6", "space-y-1")}>
                    <li>{"Type your guess for the complete phrase"}</li>
                    <li>{"Use one word per letter of the acronym"}</li>
                    <li>{"Each word must start with its letter"}</li>
                    <li>{"Press Enter to submit, Escape to leave the game"}</li>
                </ul>
            }) }

            { section("Understanding Feedback", html! {
                <>
                    { word_badge(WordStatus::Correct, "Correct", "Right word in the right position") }
                    { word_badge(WordStatus::Misplaced, "Misplaced", "Right word but wrong position") }
                    { word_badge(WordStatus::Incorrect, "Incorrect", "Word not in the solution") }
                    <p class={classes!(styles::TEXT_BODY, "mt-3")}>
                        {"The bar under each guess shows how close its meaning is to the answer. Only an exact match solves the puzzle."}
                    </p>
                </>
            }) }

            { section("Game Modes", html! {
                <ul class={classes!(styles::TEXT_BODY, "space-y-2")}>
                    { for GameMode::ALL.iter().map(|mode| {
                        let config = mode.config();
                        html! {
                            <li><strong>{format!("{}: ", config.display_name)}</strong>{config.description}</li>
                        }
                    }) }
                </ul>
            }) }
        </ScreenWrapper>
    }
}
