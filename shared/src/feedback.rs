use serde::{Deserialize, Serialize};

use crate::api::GuessResults;
use crate::constants::COMPLETED_SIMILARITY;
use crate::game_mode::GameMode;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Correct,
    Misplaced,
    Incorrect,
}

impl WordStatus {
    /// Backend accuracy code to status. Anything but 0 or 1 is incorrect.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => WordStatus::Correct,
            1 => WordStatus::Misplaced,
            _ => WordStatus::Incorrect,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WordStatus::Correct => "🟩",
            WordStatus::Misplaced => "🟨",
            WordStatus::Incorrect => "⬜",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub status: WordStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Guess {
    pub words: Vec<Word>,
    // Similarity bar value, 0 to 100
    pub similarity: f64,
}

/// Builds the render-ready record for one submitted guess.
///
/// Codes are positional: `codes[i]` describes `guess_words[i]`. A word the
/// backend sent no code for is shown as incorrect.
pub fn map_feedback<S: AsRef<str>>(codes: &[i32], similarity: f64, guess_words: &[S]) -> Guess {
    let words = guess_words
        .iter()
        .enumerate()
        .map(|(i, text)| Word {
            text: text.as_ref().to_string(),
            status: codes.get(i).copied().map(WordStatus::from_code).unwrap_or(WordStatus::Incorrect),
        })
        .collect();

    Guess { words, similarity: similarity * 100.0 }
}

/// Same as [`map_feedback`], splitting the submitted text into words.
pub fn guess_from_results(guess_text: &str, results: &GuessResults) -> Guess {
    let words: Vec<&str> = guess_text.split_whitespace().collect();
    map_feedback(&results.word_results, results.score, &words)
}

/// A round is won only on an exact similarity of 1, whatever the word
/// statuses say.
pub fn is_round_complete(similarity: f64) -> bool {
    similarity == COMPLETED_SIMILARITY
}

/// Endless rounds are lost once the guess count reaches par without a win.
pub fn is_endless_round_lost(guess_count: usize, par_score: u32, won: bool) -> bool {
    !won && guess_count >= par_score as usize
}

pub fn emoji_row(guess: &Guess) -> String {
    guess.words.iter().map(|w| w.status.emoji()).collect()
}

pub fn emoji_grid(guesses: &[Guess]) -> String {
    guesses.iter().map(emoji_row).collect::<Vec<_>>().join("\n")
}

pub fn golf_term(guess_count: usize, par_score: u32) -> String {
    let diff = guess_count as i64 - par_score as i64;
    match diff {
        -3 => "Albatross! 🦅".to_string(),
        -2 => "Eagle! 🦅".to_string(),
        -1 => "Birdie! 🐦".to_string(),
        0 => "Par! ⛳".to_string(),
        1 => "Bogey! 😬".to_string(),
        2 => "Double Bogey! 😰".to_string(),
        3 => "Triple Bogey! 🫨".to_string(),
        d if d < -3 => "Condor! 🦅✨".to_string(),
        d => format!("{} Over Par! 😵", d),
    }
}

pub fn result_message(mode: GameMode, guess_count: usize, par_score: u32, rounds_completed: u32) -> String {
    match mode {
        GameMode::LevelUp => golf_term(guess_count, par_score),
        GameMode::Endless => format!("Round {} Complete! 🎯", rounds_completed + 1),
        GameMode::Daily => "Daily Puzzle Complete! ⭐".to_string(),
    }
}

pub fn failure_message(rounds_completed: u32) -> String {
    format!("Round {} Failed! ‼️", rounds_completed + 1)
}

/// Clipboard text for the end-of-round dialog.
pub fn share_text(mode: GameMode, guesses: &[Guess], par_score: u32, rounds_completed: u32) -> String {
    let header = match mode {
        GameMode::Endless => format!("Acronymize • Endless - Round {}", rounds_completed + 1),
        other => format!(
            "Acronymize • {} - {}",
            other.config().short_name,
            golf_term(guesses.len(), par_score)
        ),
    };
    format!("{}\n\n{}", header, emoji_grid(guesses))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipColor {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pip {
    pub filled: bool,
    pub color: PipColor,
    // Par marker drawn after this pip
    pub par_marker: bool,
}

/// Guess counter shown under the acronym. Endless shows exactly `par` pips,
/// the last one being the losing guess; other modes show par plus three,
/// growing with the guess count.
pub fn pip_track(mode: GameMode, guess_count: usize, par_score: u32) -> Vec<Pip> {
    let par = par_score as usize;
    let endless = mode == GameMode::Endless;
    let total = if endless { par } else { (par + 3).max(guess_count) };
    // Last pip that is still green before the yellow one
    let yellow_at = if endless { par.checked_sub(2) } else { par.checked_sub(1) };

    (0..total)
        .map(|index| Pip {
            filled: index < guess_count,
            color: match yellow_at {
                Some(y) if index < y => PipColor::Green,
                Some(y) if index == y => PipColor::Yellow,
                _ => PipColor::Red,
            },
            par_marker: !endless && index + 1 == par,
        })
        .collect()
}
