use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::hooks::use_mounted;
use shared::api::{Category, Puzzle};
use shared::constants::{DAILY_LOAD_ERROR, PUZZLE_LOAD_ERROR};
use shared::puzzle_queue::{next_puzzle, PuzzleQueue, QueueState};
use shared::GameError;

#[derive(Clone, PartialEq)]
pub struct PuzzleLoader {
    pub puzzle: Option<Puzzle>,
    // Bumped on every successful load, including repeats of the same puzzle
    pub generation: u32,
    pub is_loading: bool,
    pub error: Option<String>,
    pub load_level: Callback<u32>,
    pub load_daily: Callback<()>,
    pub load_random: Callback<()>,
}

#[derive(Clone, PartialEq)]
struct LoaderState {
    puzzle: Option<Puzzle>,
    generation: u32,
    is_loading: bool,
    error: Option<String>,
}

fn loaded(state: &UseStateHandle<LoaderState>, current: &Rc<RefCell<LoaderState>>, puzzle: Puzzle) {
    let mut next = current.borrow_mut();
    next.puzzle = Some(puzzle);
    next.generation += 1;
    next.is_loading = false;
    next.error = None;
    state.set(next.clone());
}

fn failed(state: &UseStateHandle<LoaderState>, current: &Rc<RefCell<LoaderState>>, message: String) {
    let mut next = current.borrow_mut();
    next.is_loading = false;
    next.error = Some(message);
    state.set(next.clone());
}

fn loading(state: &UseStateHandle<LoaderState>, current: &Rc<RefCell<LoaderState>>) {
    let mut next = current.borrow_mut();
    next.is_loading = true;
    next.error = None;
    state.set(next.clone());
}

/// Loads puzzles for the game screen: a given level, the daily puzzle, or
/// the next one from the endless queue.
#[hook]
pub fn use_puzzle_loader(
    category: Option<Category>,
    initial: Option<Puzzle>,
) -> PuzzleLoader {
    let initial_state = LoaderState {
        puzzle: initial,
        generation: 0,
        is_loading: false,
        error: None,
    };
    let state = use_state(|| initial_state.clone());
    // Latest state for callbacks running after an await
    let current = use_mut_ref(|| initial_state);
    let queue = use_mut_ref(PuzzleQueue::new);
    let mounted = use_mounted();
    let client = use_memo((), |_| ApiClient::new());

    let load_level = {
        let state = state.clone();
        let current = current.clone();
        let category = category.clone();
        let mounted = mounted.clone();
        let client = client.clone();
        Callback::from(move |level: u32| {
            let Some(slug) = category.as_ref().map(|c| c.slug.clone()) else {
                failed(&state, &current, GameError::NoCategorySelected.user_message());
                return;
            };
            loading(&state, &current);

            let state = state.clone();
            let current = current.clone();
            let mounted = mounted.clone();
            let client = client.clone();
            spawn_local(async move {
                let result = client.puzzle(&slug, level).await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(puzzle) => loaded(&state, &current, puzzle),
                    Err(err) => {
                        log::error!("{}: {}", PUZZLE_LOAD_ERROR, err);
                        failed(&state, &current, err.user_message());
                    }
                }
            });
        })
    };

    let load_daily = {
        let state = state.clone();
        let current = current.clone();
        let category = category.clone();
        let mounted = mounted.clone();
        let client = client.clone();
        Callback::from(move |_| {
            let Some(slug) = category.as_ref().map(|c| c.slug.clone()) else {
                failed(&state, &current, GameError::NoCategorySelected.user_message());
                return;
            };
            loading(&state, &current);

            let state = state.clone();
            let current = current.clone();
            let mounted = mounted.clone();
            let client = client.clone();
            spawn_local(async move {
                let result = client.daily(&slug).await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(puzzle) => loaded(&state, &current, puzzle),
                    Err(err) => {
                        log::error!("{}: {}", DAILY_LOAD_ERROR, err);
                        failed(&state, &current, err.user_message());
                    }
                }
            });
        })
    };

    let load_random = {
        let state = state.clone();
        let current = current.clone();
        let category = category.clone();
        let queue = queue.clone();
        let mounted = mounted.clone();
        let client = client.clone();
        Callback::from(move |_| {
            // Only a refill shows the loading state
            let needs_refill = {
                let queue = queue.borrow();
                queue.state() != QueueState::HasBuffer && !queue.is_refilling()
            };
            if needs_refill && category.is_some() {
                loading(&state, &current);
            }

            let state = state.clone();
            let current = current.clone();
            let category = category.clone();
            let queue = queue.clone();
            let mounted = mounted.clone();
            let client = client.clone();
            spawn_local(async move {
                let result = next_puzzle(&queue, category.as_ref(), &*client).await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(puzzle) => loaded(&state, &current, puzzle),
                    // Another refill is already on its way
                    Err(GameError::BatchFetch(message)) => log::debug!("{}", message),
                    Err(err) => failed(&state, &current, err.user_message()),
                }
            });
        })
    };

    PuzzleLoader {
        puzzle: state.puzzle.clone(),
        generation: state.generation,
        is_loading: state.is_loading,
        error: state.error.clone(),
        load_level,
        load_daily,
        load_random,
    }
}
