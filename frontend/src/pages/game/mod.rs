mod end_game_modal;
mod exit_game_modal;
mod guess_row;
mod input_bar;
mod pip_counter;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ScreenWrapper;
use crate::hooks::{use_mounted, use_progress_saver, use_puzzle_loader, use_timed_error};
use crate::styles;
use shared::api::{title_case, Category, Puzzle};
use shared::feedback::{failure_message, result_message, share_text};
use shared::game_mode::{GameMode, LoadingStrategy};
use shared::round::{FinishedRound, Round, RoundOutcome};
use shared::screen::AppEvent;

use end_game_modal::EndGameModal;
use exit_game_modal::ExitGameModal;
use guess_row::GuessRow;
use input_bar::InputBar;
use pip_counter::PipCounter;

#[derive(Properties, PartialEq)]
pub struct GameScreenProps {
    pub mode: GameMode,
    pub category: Option<Category>,
    // Preloaded by level selection; other modes load their own
    #[prop_or_default]
    pub puzzle: Option<Puzzle>,
    #[prop_or(1)]
    pub level: u32,
    pub on_event: Callback<AppEvent>,
}

/// Everything the end-of-round dialog shows.
#[derive(Clone, PartialEq)]
struct RoundSummary {
    finished: FinishedRound,
    result: String,
    share_text: String,
    answer: Option<String>,
}

#[function_component(GameScreen)]
pub fn game_screen(props: &GameScreenProps) -> Html {
    let mode = props.mode;
    let loader = use_puzzle_loader(props.category.clone(), props.puzzle.clone());
    let save_progress = use_progress_saver(mode, props.category.clone());
    let round = use_mut_ref(|| None::<Round>);
    let summary = use_state(|| None::<RoundSummary>);
    let current_guess = use_state(String::new);
    let exit_open = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_timed_error();
    let refresh = use_force_update();
    let mounted = use_mounted();
    let client = use_memo((), |_| ApiClient::new());
    let input_ref = use_node_ref();
    let guess_area_ref = use_node_ref();

    let load_puzzle = {
        let loader = loader.clone();
        let level = props.level;
        Callback::from(move |_: ()| match mode.config().loading_strategy {
            LoadingStrategy::LevelBased => loader.load_level.emit(level),
            LoadingStrategy::Random => loader.load_random.emit(()),
            LoadingStrategy::Daily => loader.load_daily.emit(()),
        })
    };

    // Initial load for modes that were not handed a puzzle
    {
        let load_puzzle = load_puzzle.clone();
        let has_category = props.category.is_some();
        let preloaded = props.puzzle.is_some();
        use_effect_with((), move |_| {
            if !preloaded && has_category {
                load_puzzle.emit(());
            }
            || ()
        });
    }

    // Every newly loaded puzzle starts a round
    {
        let round = round.clone();
        let summary = summary.clone();
        let current_guess = current_guess.clone();
        let refresh = refresh.clone();
        let puzzle = loader.puzzle.clone();
        use_effect_with(loader.generation, move |_| {
            if let Some(puzzle) = puzzle {
                let mut slot = round.borrow_mut();
                match slot.as_mut() {
                    Some(round) => round.start(puzzle),
                    None => *slot = Some(Round::new(mode, puzzle)),
                }
                summary.set(None);
                current_guess.set(String::new());
                refresh.force_update();
            }
            || ()
        });
    }

    // Keep the newest guess in view
    {
        let guess_area_ref = guess_area_ref.clone();
        let count = round.borrow().as_ref().map(|r| r.guesses().len()).unwrap_or(0);
        use_effect_with(count, move |_| {
            if let Some(area) = guess_area_ref.cast::<HtmlElement>() {
                area.set_scroll_top(area.scroll_height());
            }
            || ()
        });
    }

    let finish_round = {
        let round = round.clone();
        let summary = summary.clone();
        let category = props.category.clone();
        let save_progress = save_progress.clone();
        let client = client.clone();
        let mounted = mounted.clone();
        move |outcome: RoundOutcome| {
            let Some((finished, rounds_completed)) = round
                .borrow_mut()
                .as_mut()
                .map(|r| (r.finish(), r.rounds_completed()))
            else {
                return;
            };

            let count = finished.guesses.len();
            let par = finished.puzzle.par_score;
            let result = match outcome {
                RoundOutcome::Lost => failure_message(rounds_completed),
                _ => result_message(mode, count, par, rounds_completed),
            };
            let text = share_text(mode, &finished.guesses, par, rounds_completed);
            summary.set(Some(RoundSummary {
                finished: finished.clone(),
                result,
                share_text: text,
                answer: None,
            }));

            save_progress.emit((finished.clone(), rounds_completed));

            if let Some(slug) = category.as_ref().map(|c| c.slug.clone()) {
                let summary = summary.clone();
                let client = client.clone();
                let mounted = mounted.clone();
                let position = finished.puzzle.position;
                spawn_local(async move {
                    let solution = client.solution(&slug, position).await;
                    if !mounted.get() {
                        return;
                    }
                    match solution {
                        Ok(solution) => summary.set(summary.as_ref().map(|s| RoundSummary {
                            answer: Some(title_case(&solution)),
                            ..s.clone()
                        })),
                        Err(err) => log::error!("Failed to fetch solution: {}", err),
                    }
                });
            }
        }
    };

    let on_submit = {
        let round = round.clone();
        let category = props.category.clone();
        let client = client.clone();
        let current_guess = current_guess.clone();
        let submitting = submitting.clone();
        let show_error = error.show.clone();
        let refresh = refresh.clone();
        let mounted = mounted.clone();
        let finish_round = finish_round.clone();
        Callback::from(move |guess: String| {
            if *submitting {
                return;
            }
            let Some(slug) = category.as_ref().map(|c| c.slug.clone()) else {
                return;
            };
            let checked = round.borrow().as_ref().map(|r| r.check(&guess).map(|_| r.puzzle().position));
            let position = match checked {
                Some(Ok(position)) => position,
                Some(Err(err)) => {
                    show_error.emit(err.user_message());
                    return;
                }
                None => return,
            };
            submitting.set(true);

            let round = round.clone();
            let client = client.clone();
            let current_guess = current_guess.clone();
            let submitting = submitting.clone();
            let show_error = show_error.clone();
            let refresh = refresh.clone();
            let mounted = mounted.clone();
            let finish_round = finish_round.clone();
            spawn_local(async move {
                let results = client.submit_guess(&slug, position, &guess).await;
                if !mounted.get() {
                    return;
                }
                submitting.set(false);
                match results {
                    Ok(results) => {
                        let outcome = round
                            .borrow_mut()
                            .as_mut()
                            .map(|r| r.record(&guess, &results))
                            .unwrap_or(RoundOutcome::InProgress);
                        current_guess.set(String::new());
                        if outcome != RoundOutcome::InProgress {
                            finish_round(outcome);
                        }
                        refresh.force_update();
                    }
                    Err(err) => {
                        log::error!("Failed to submit guess: {}", err);
                        show_error.emit(err.user_message());
                    }
                }
            });
        })
    };

    let on_change = {
        let current_guess = current_guess.clone();
        Callback::from(move |value: String| current_guess.set(value))
    };

    let open_exit = {
        let exit_open = exit_open.clone();
        Callback::from(move |_| exit_open.set(true))
    };
    let close_exit = {
        let exit_open = exit_open.clone();
        Callback::from(move |_| exit_open.set(false))
    };
    let on_exit = {
        let on_event = props.on_event.clone();
        Callback::from(move |_| on_event.emit(AppEvent::ExitGame))
    };

    let on_next_round = load_puzzle;

    let focus_input = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };

    let category_title = props
        .category
        .as_ref()
        .map(|c| c.title.clone())
        .unwrap_or_else(|| "No Category".to_string());
    let short_name = mode.config().short_name;

    // Before the first effect runs there is no round yet
    let waiting = round.borrow().is_none() && (loader.puzzle.is_some() || props.category.is_some());
    let status = if loader.is_loading || (waiting && loader.error.is_none()) {
        Some(html! { <p class={styles::LOADING}>{"Loading puzzle..."}</p> })
    } else if let Some(message) = &loader.error {
        Some(html! { <p class={classes!(styles::TEXT_ERROR, "text-center", "my-6")}>{format!("Error: {}", message)}</p> })
    } else if round.borrow().is_none() {
        Some(html! { <p class={classes!(styles::TEXT_ERROR, "text-center", "my-6")}>{"No puzzle available"}</p> })
    } else {
        None
    };

    if let Some(status) = status {
        return html! {
            <ScreenWrapper on_dismiss={open_exit}>
                <div class={styles::GAME_WRAPPER}>
                    <div class={styles::MODE_INDICATOR}>{short_name}</div>
                    { status }
                </div>
                <ExitGameModal is_open={*exit_open} on_close={close_exit} {on_exit} />
            </ScreenWrapper>
        };
    }

    let round_ref = round.borrow();
    let Some(active) = round_ref.as_ref() else {
        return html! {};
    };
    let puzzle = active.puzzle().clone();
    // A finished round hands its guesses to the summary
    let guesses = match &*summary {
        Some(summary) => summary.finished.guesses.clone(),
        None => active.guesses().to_vec(),
    };
    let still_alive = active.outcome() != RoundOutcome::Lost;
    let rounds_completed = active.rounds_completed();
    let round_over = summary.is_some();
    let last = guesses.len().checked_sub(1);

    html! {
        <ScreenWrapper on_dismiss={open_exit.clone()}>
            <ExitGameModal is_open={*exit_open} on_close={close_exit} {on_exit} />
            <div class={styles::GAME_WRAPPER} onclick={focus_input}>
                <div class={styles::MODE_INDICATOR}>{format!("{} • {}", short_name, category_title)}</div>

                if mode.config().continuous_play {
                    <div class={styles::SCORE_DISPLAY}>{format!("Round {}", rounds_completed + 1)}</div>
                }

                <div class={styles::CLUE}>{puzzle.clue.clone()}</div>
                <div class={styles::ACRONYM}>{puzzle.acronym.clone()}</div>

                <PipCounter {mode} guess_count={guesses.len()} par={puzzle.par_score} />

                <div class={styles::GUESS_AREA} ref={guess_area_ref}>
                    { for guesses.iter().enumerate().map(|(index, guess)| html! {
                        <GuessRow
                            key={index}
                            guess={guess.clone()}
                            highlighted={Some(index) == last && current_guess.is_empty()}
                        />
                    }) }
                </div>

                <InputBar
                    current_guess={(*current_guess).clone()}
                    {on_change}
                    {on_submit}
                    on_exit={open_exit}
                    error={error.clone()}
                    disabled={round_over || *submitting}
                    input_ref={input_ref.clone()}
                />
            </div>

            if let Some(summary) = &*summary {
                <EndGameModal
                    is_open=true
                    {mode}
                    result={summary.result.clone()}
                    answer={summary.answer.clone()}
                    share_text={summary.share_text.clone()}
                    {still_alive}
                    {on_next_round}
                    on_event={props.on_event.clone()}
                />
            }
        </ScreenWrapper>
    }
}
