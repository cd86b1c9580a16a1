use crate::api::{Category, ProgressStore, Puzzle};
use crate::feedback::{emoji_grid, Guess};
use crate::game_mode::{GameMode, ScoringType};

/// What, if anything, should be persisted for a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePlan {
    Level {
        slug: String,
        level_num: u32,
        score: u32,
        attempts_data: String,
        mode: GameMode,
    },
    HighScore {
        slug: String,
        score: u32,
    },
    // Mode does not persist anything; counts as saved
    Skip,
    // No category to attribute the result to
    Unavailable,
}

pub fn plan_save(
    mode: GameMode,
    category: Option<&Category>,
    guesses: &[Guess],
    puzzle: &Puzzle,
    rounds_completed: u32,
) -> SavePlan {
    let config = mode.config();
    if !config.save_progress {
        return SavePlan::Skip;
    }
    let Some(category) = category else {
        return SavePlan::Unavailable;
    };

    match config.scoring_type {
        ScoringType::GuessCount | ScoringType::DailyCompletion => SavePlan::Level {
            slug: category.slug.clone(),
            level_num: puzzle.position,
            score: guesses.len() as u32,
            attempts_data: emoji_grid(guesses),
            mode,
        },
        // The backend keeps the max, so every finished run is submitted
        ScoringType::HighScore => SavePlan::HighScore {
            slug: category.slug.clone(),
            score: rounds_completed + 1,
        },
    }
}

/// Persists round outcomes for one mode and category. Failures are logged
/// and reported as `false`; they never interrupt the game.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSaver {
    mode: GameMode,
    category: Option<Category>,
}

impl ProgressSaver {
    pub fn new(mode: GameMode, category: Option<Category>) -> Self {
        Self { mode, category }
    }

    pub fn plan(&self, guesses: &[Guess], puzzle: &Puzzle, rounds_completed: u32) -> SavePlan {
        plan_save(self.mode, self.category.as_ref(), guesses, puzzle, rounds_completed)
    }

    pub async fn save<S: ProgressStore>(
        &self,
        store: &S,
        guesses: &[Guess],
        puzzle: &Puzzle,
        rounds_completed: u32,
    ) -> bool {
        execute_plan(store, self.plan(guesses, puzzle, rounds_completed)).await
    }
}

pub async fn execute_plan<S: ProgressStore>(store: &S, plan: SavePlan) -> bool {
    let result = match &plan {
        SavePlan::Skip => return true,
        SavePlan::Unavailable => {
            log::warn!("Not saving progress: no category selected");
            return false;
        }
        SavePlan::Level { slug, level_num, score, attempts_data, mode } => {
            store.record_level(slug, *level_num, *score, attempts_data, *mode).await
        }
        SavePlan::HighScore { slug, score } => store.submit_high_score(slug, *score).await,
    };

    match result {
        Ok(()) => {
            log::info!("Progress saved: {:?}", plan);
            true
        }
        Err(err) => {
            log::error!("Failed to save progress: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::feedback::map_feedback;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn category() -> Category {
        Category {
            icon: "🍕".into(),
            title: "Food".into(),
            description: String::new(),
            slug: "food".into(),
            high_score: None,
            badge: None,
        }
    }

    fn puzzle() -> Puzzle {
        Puzzle { acronym: "B L T".into(), clue: "Sandwich".into(), par_score: 3, position: 12 }
    }

    fn guesses() -> Vec<Guess> {
        vec![
            map_feedback(&[0, 2, 1], 0.5, &["BACON", "LIME", "TOMATO"]),
            map_feedback(&[0, 0, 0], 1.0, &["BACON", "LETTUCE", "TOMATO"]),
        ]
    }

    #[derive(Default)]
    struct RecordingStore {
        fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl ProgressStore for RecordingStore {
        async fn record_level(
            &self,
            slug: &str,
            level_num: u32,
            score: u32,
            attempts_data: &str,
            mode: GameMode,
        ) -> Result<(), GameError> {
            self.calls
                .borrow_mut()
                .push(format!("level {} {} {} {} {}", slug, level_num, score, mode, attempts_data));
            if self.fail {
                Err(GameError::Api { status: 500, message: "Failed to save progress".into() })
            } else {
                Ok(())
            }
        }

        async fn submit_high_score(&self, slug: &str, score: u32) -> Result<(), GameError> {
            self.calls.borrow_mut().push(format!("high {} {}", slug, score));
            if self.fail {
                Err(GameError::Network("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_levelup_saves_guess_count_and_grid() {
        let cat = category();
        let plan = plan_save(GameMode::LevelUp, Some(&cat), &guesses(), &puzzle(), 0);
        assert_eq!(
            plan,
            SavePlan::Level {
                slug: "food".into(),
                level_num: 12,
                score: 2,
                attempts_data: "🟩⬜🟨\n🟩🟩🟩".into(),
                mode: GameMode::LevelUp,
            }
        );
    }

    #[test]
    fn test_daily_uses_level_endpoint_with_daily_mode() {
        let cat = category();
        let plan = plan_save(GameMode::Daily, Some(&cat), &guesses(), &puzzle(), 0);
        assert!(matches!(plan, SavePlan::Level { mode: GameMode::Daily, score: 2, .. }));
    }

    #[test]
    fn test_endless_submits_rounds_plus_one() {
        let cat = category();
        let plan = plan_save(GameMode::Endless, Some(&cat), &guesses(), &puzzle(), 4);
        assert_eq!(plan, SavePlan::HighScore { slug: "food".into(), score: 5 });
    }

    #[test]
    fn test_missing_category_is_not_saved() {
        let plan = plan_save(GameMode::LevelUp, None, &guesses(), &puzzle(), 0);
        assert_eq!(plan, SavePlan::Unavailable);
        let store = RecordingStore::default();
        assert!(!block_on(execute_plan(&store, plan)));
        assert!(store.calls.borrow().is_empty());
    }

    #[test]
    fn test_save_dispatches_to_store() {
        let saver = ProgressSaver::new(GameMode::Endless, Some(category()));
        let store = RecordingStore::default();
        assert!(block_on(saver.save(&store, &guesses(), &puzzle(), 2)));
        assert_eq!(*store.calls.borrow(), vec!["high food 3".to_string()]);
    }

    #[test]
    fn test_save_failure_returns_false() {
        let saver = ProgressSaver::new(GameMode::LevelUp, Some(category()));
        let store = RecordingStore { fail: true, ..Default::default() };
        assert!(!block_on(saver.save(&store, &guesses(), &puzzle(), 0)));
        assert_eq!(store.calls.borrow().len(), 1);
    }
}
