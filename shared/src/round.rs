use serde::{Deserialize, Serialize};

use crate::api::{GuessResults, Puzzle};
use crate::error::GameError;
use crate::feedback::{emoji_grid, guess_from_results, is_endless_round_lost, is_round_complete, Guess};
use crate::game_mode::GameMode;
use crate::validation::validate_guess;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

/// Outcome of a finished round, handed to the end-of-round dialog and the
/// progress saver.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedRound {
    pub puzzle: Puzzle,
    pub guesses: Vec<Guess>,
    pub outcome: RoundOutcome,
    pub emoji_grid: String,
}

/// One puzzle's worth of play. The guess history only grows while the round
/// is in progress and is emptied when a new puzzle starts or the round ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    mode: GameMode,
    puzzle: Puzzle,
    guesses: Vec<Guess>,
    outcome: RoundOutcome,
    // Endless only: puzzles solved in a row before this one
    rounds_completed: u32,
}

impl Round {
    pub fn new(mode: GameMode, puzzle: Puzzle) -> Self {
        Self {
            mode,
            puzzle,
            guesses: Vec::new(),
            outcome: RoundOutcome::InProgress,
            rounds_completed: 0,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Validates a guess against the current acronym.
    pub fn check(&self, guess: &str) -> Result<(), GameError> {
        validate_guess(guess, &self.puzzle.acronym).map_err(GameError::from)
    }

    /// Appends the backend's verdict for `guess_text` and returns the new
    /// outcome. Ignored once the round is over.
    pub fn record(&mut self, guess_text: &str, results: &GuessResults) -> RoundOutcome {
        if self.outcome != RoundOutcome::InProgress {
            log::warn!("Ignoring guess for a finished round");
            return self.outcome;
        }

        self.guesses.push(guess_from_results(guess_text, results));

        let won = is_round_complete(results.score);
        self.outcome = if won {
            RoundOutcome::Won
        } else if self.mode == GameMode::Endless
            && is_endless_round_lost(self.guesses.len(), self.puzzle.par_score, won)
        {
            RoundOutcome::Lost
        } else {
            RoundOutcome::InProgress
        };
        self.outcome
    }

    /// Ends the round, handing over its guesses and leaving the history empty.
    pub fn finish(&mut self) -> FinishedRound {
        let guesses = std::mem::take(&mut self.guesses);
        FinishedRound {
            puzzle: self.puzzle.clone(),
            emoji_grid: emoji_grid(&guesses),
            guesses,
            outcome: self.outcome,
        }
    }

    /// Starts the next puzzle. A won endless round counts towards the streak.
    pub fn start(&mut self, puzzle: Puzzle) {
        if self.mode == GameMode::Endless && self.outcome == RoundOutcome::Won {
            self.rounds_completed += 1;
        }
        self.puzzle = puzzle;
        self.guesses.clear();
        self.outcome = RoundOutcome::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(position: u32, par: u32) -> Puzzle {
        Puzzle {
            acronym: "B R B".into(),
            clue: "Away briefly".into(),
            par_score: par,
            position,
        }
    }

    fn results(codes: Vec<i32>, score: f64) -> GuessResults {
        GuessResults { word_results: codes, score }
    }

    #[test]
    fn test_win_on_exact_similarity() {
        let mut round = Round::new(GameMode::LevelUp, puzzle(1, 4));
        assert_eq!(round.record("BE RIGHT BACK", &results(vec![0, 0, 0], 0.9)), RoundOutcome::InProgress);
        assert_eq!(round.record("BE RIGHT BACK", &results(vec![0, 0, 0], 1.0)), RoundOutcome::Won);
        assert_eq!(round.guesses().len(), 2);

        let finished = round.finish();
        assert_eq!(finished.guesses.len(), 2);
        assert_eq!(finished.emoji_grid, "🟩🟩🟩\n🟩🟩🟩");
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn test_endless_loss_at_par() {
        let mut round = Round::new(GameMode::Endless, puzzle(1, 2));
        round.record("BIG RED BUS", &results(vec![0, 2, 2], 0.2));
        assert_eq!(round.record("BIG RED BOX", &results(vec![0, 2, 2], 0.3)), RoundOutcome::Lost);
        // finished rounds stay finished
        assert_eq!(round.record("BE RIGHT BACK", &results(vec![0, 0, 0], 1.0)), RoundOutcome::Lost);
        assert_eq!(round.guesses().len(), 2);
    }

    #[test]
    fn test_levelup_never_lost() {
        let mut round = Round::new(GameMode::LevelUp, puzzle(1, 1));
        round.record("BIG RED BUS", &results(vec![0, 2, 2], 0.2));
        assert_eq!(round.record("BIG RED BUS", &results(vec![0, 2, 2], 0.2)), RoundOutcome::InProgress);
    }

    #[test]
    fn test_start_resets_history_and_counts_streak() {
        let mut round = Round::new(GameMode::Endless, puzzle(1, 3));
        round.record("BE RIGHT BACK", &results(vec![0, 0, 0], 1.0));
        round.start(puzzle(2, 3));
        assert_eq!(round.rounds_completed(), 1);
        assert!(round.guesses().is_empty());
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert_eq!(round.puzzle().position, 2);
    }

    #[test]
    fn test_check_uses_acronym() {
        let round = Round::new(GameMode::Daily, puzzle(1, 3));
        assert!(round.check("Be Right Back").is_ok());
        assert!(matches!(round.check("Be Right"), Err(GameError::Validation(_))));
        assert_eq!(
            round.check("Go Right Back").map_err(|e| e.user_message()),
            Err("Word 1 should start with \"B\", not \"G\"".to_string())
        );
    }
}
