use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use shared::api::Category;
use shared::game_mode::GameMode;
use shared::progress::ProgressSaver;
use shared::round::FinishedRound;

/// Saves a finished round in the background. Emit the round together with
/// the number of endless rounds completed before it.
#[hook]
pub fn use_progress_saver(mode: GameMode, category: Option<Category>) -> Callback<(FinishedRound, u32)> {
    let client = use_memo((), |_| ApiClient::new());
    let saver = use_memo((mode, category), |(mode, category)| ProgressSaver::new(*mode, category.clone()));

    Callback::from(move |(round, rounds_completed): (FinishedRound, u32)| {
        let client = client.clone();
        let saver = saver.clone();
        spawn_local(async move {
            let saved = saver.save(&*client, &round.guesses, &round.puzzle, rounds_completed).await;
            if !saved {
                log::warn!("Failed to save progress for puzzle {}", round.puzzle.position);
            }
        });
    })
}
