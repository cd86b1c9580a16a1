use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessError {
    WordCountMismatch { expected: usize, actual: usize },
    /// `index` is zero-based; the message reports it one-based.
    LetterMismatch { index: usize, expected: char, actual: char },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::WordCountMismatch { expected, actual } => write!(
                f,
                "Expected {} word{}, got {}",
                expected,
                if *expected == 1 { "" } else { "s" },
                actual
            ),
            GuessError::LetterMismatch { index, expected, actual } => write!(
                f,
                "Word {} should start with \"{}\", not \"{}\"",
                index + 1,
                expected,
                actual
            ),
        }
    }
}

impl std::error::Error for GuessError {}

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Letters of a displayed acronym such as `"B R B"`, whitespace removed.
pub fn acronym_letters(acronym: &str) -> Vec<char> {
    acronym.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Checks a guess against the acronym before it is sent to the backend.
///
/// The guess must have one word per acronym letter, and each word must start
/// with the matching letter (case-insensitive). The first failing check wins.
pub fn validate_guess(guess: &str, acronym: &str) -> Result<(), GuessError> {
    let words: Vec<&str> = guess.split_whitespace().collect();
    let letters = acronym_letters(acronym);

    if words.len() != letters.len() {
        return Err(GuessError::WordCountMismatch {
            expected: letters.len(),
            actual: words.len(),
        });
    }

    for (index, (word, letter)) in words.iter().zip(letters.iter()).enumerate() {
        // split_whitespace never yields empty words
        let first = word.chars().next().map(upper).unwrap_or_default();
        let expected = upper(*letter);
        if first != expected {
            return Err(GuessError::LetterMismatch { index, expected, actual: first });
        }
    }

    Ok(())
}

/// Upper-cases typed or pasted input and collapses whitespace runs to a
/// single space. Leading whitespace is dropped; a trailing space is kept so
/// the player can keep typing the next word.
pub fn normalize_guess(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    collapsed.trim_start().to_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Insert,
    Edit,
    Submit,
    Exit,
    Block,
}

/// Keystroke policy for the guess input: letters and digits, editing keys,
/// Enter to submit, Escape to leave, and a space only after a non-space.
pub fn classify_key(key: &str, current_guess: &str) -> KeyAction {
    match key {
        "Escape" => KeyAction::Exit,
        "Enter" => KeyAction::Submit,
        "Backspace" | "Delete" => KeyAction::Edit,
        " " if !current_guess.is_empty() && !current_guess.ends_with(' ') => KeyAction::Insert,
        " " => KeyAction::Block,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphanumeric() => KeyAction::Insert,
                _ => KeyAction::Block,
            }
        }
    }
}
