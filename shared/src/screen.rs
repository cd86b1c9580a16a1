//! Which screen is showing and the selections that led there.
//!
//! The app is a small state machine: every user action becomes an
//! [`AppEvent`], and [`AppState::transition`] computes the next state.

use crate::api::{Category, Puzzle};
use crate::game_mode::{GameMode, LoadingStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    ModeSelection,
    CategorySelection,
    LevelSelection,
    Game,
    Instructions,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub screen: Screen,
    pub mode: Option<GameMode>,
    pub category: Option<Category>,
    // Level Up only: the level picked in the carousel
    pub level: Option<u32>,
    // Puzzle fetched while picking the level; other modes load their own
    pub puzzle: Option<Puzzle>,
    pub show_login: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    PlayDaily,
    ExploreModes,
    ModeSelected(GameMode),
    LoginRequired(GameMode),
    DismissLogin,
    CategorySelected(Category),
    LevelSelected { level: u32, puzzle: Puzzle },
    BackToLevels,
    TryOtherCategory,
    Back,
    ExitGame,
    ShowInstructions,
}

impl AppEvent {
    /// Picking a mode that needs an account while signed out asks for a login
    /// instead of moving on.
    pub fn select_mode(mode: GameMode, signed_in: bool) -> Self {
        if mode.config().requires_auth && !signed_in {
            AppEvent::LoginRequired(mode)
        } else {
            AppEvent::ModeSelected(mode)
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode in effect, Level Up when none has been chosen.
    pub fn active_mode(&self) -> GameMode {
        self.mode.unwrap_or(GameMode::LevelUp)
    }

    pub fn transition(self, event: AppEvent) -> AppState {
        let next = match event {
            AppEvent::PlayDaily => AppState {
                screen: Screen::CategorySelection,
                mode: Some(GameMode::Daily),
                ..self
            },
            AppEvent::ExploreModes => AppState { screen: Screen::ModeSelection, ..self },
            AppEvent::ModeSelected(mode) => AppState {
                screen: Screen::CategorySelection,
                mode: Some(mode),
                show_login: false,
                ..self
            },
            AppEvent::LoginRequired(mode) => AppState { mode: Some(mode), show_login: true, ..self },
            AppEvent::DismissLogin => AppState { mode: None, show_login: false, ..self },
            AppEvent::CategorySelected(category) => {
                let screen = match self.active_mode() {
                    GameMode::LevelUp => Screen::LevelSelection,
                    GameMode::Endless | GameMode::Daily => Screen::Game,
                };
                AppState {
                    screen,
                    category: Some(category),
                    level: None,
                    puzzle: None,
                    ..self
                }
            }
            AppEvent::LevelSelected { level, puzzle } => {
                if self.category.is_none() {
                    log::warn!("Level {} selected without a category", level);
                    return self;
                }
                AppState {
                    screen: Screen::Game,
                    level: Some(level),
                    puzzle: Some(puzzle),
                    ..self
                }
            }
            AppEvent::BackToLevels => AppState {
                screen: Screen::LevelSelection,
                puzzle: None,
                ..self
            },
            AppEvent::TryOtherCategory => AppState {
                screen: Screen::CategorySelection,
                puzzle: None,
                ..self
            },
            AppEvent::Back => {
                let screen = match self.screen {
                    Screen::ModeSelection | Screen::Instructions | Screen::Landing => Screen::Landing,
                    Screen::CategorySelection => Screen::ModeSelection,
                    Screen::LevelSelection => Screen::CategorySelection,
                    // Leaving a game goes through the exit dialog
                    Screen::Game => Screen::Game,
                };
                AppState { screen, ..self }
            }
            AppEvent::ExitGame => AppState {
                screen: Screen::Landing,
                level: None,
                puzzle: None,
                ..self
            },
            AppEvent::ShowInstructions => AppState { screen: Screen::Instructions, ..self },
        };
        log::debug!("Screen: {:?}", next.screen);
        next
    }
}

/// What a button in the end-of-round dialog does.
#[derive(Debug, Clone, PartialEq)]
pub enum EndGameStep {
    /// Endless only: close the dialog and load the next puzzle.
    NextRound,
    Navigate(AppEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndGameChoice {
    pub label: &'static str,
    pub step: EndGameStep,
}

/// Primary and optional secondary buttons of the end-of-round dialog. A lost
/// endless run offers only the way out.
pub fn end_game_choices(mode: GameMode, still_alive: bool) -> (EndGameChoice, Option<EndGameChoice>) {
    let config = mode.config();
    let primary = if config.continuous_play {
        if still_alive {
            EndGameChoice { label: "Next Round", step: EndGameStep::NextRound }
        } else {
            EndGameChoice { label: "Exit to Landing", step: EndGameStep::Navigate(AppEvent::ExitGame) }
        }
    } else {
        match config.loading_strategy {
            LoadingStrategy::LevelBased => EndGameChoice {
                label: "Back to Level Selection",
                step: EndGameStep::Navigate(AppEvent::BackToLevels),
            },
            LoadingStrategy::Random | LoadingStrategy::Daily => EndGameChoice {
                label: "Try Other Category!",
                step: EndGameStep::Navigate(AppEvent::TryOtherCategory),
            },
        }
    };

    let secondary = still_alive.then(|| EndGameChoice {
        label: match mode {
            GameMode::LevelUp => "Exit to Main Menu",
            GameMode::Endless => "Exit (lose progress)",
            GameMode::Daily => "Exit to Landing",
        },
        step: EndGameStep::Navigate(AppEvent::ExitGame),
    });

    (primary, secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

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
        Puzzle { acronym: "B L T".into(), clue: "Sandwich".into(), par_score: 3, position: 4 }
    }

    #[test]
    fn test_level_up_flow() {
        let state = AppState::new()
            .transition(AppEvent::ExploreModes)
            .transition(AppEvent::ModeSelected(GameMode::LevelUp))
            .transition(AppEvent::CategorySelected(category()));
        assert_eq!(state.screen, Screen::LevelSelection);

        let state = state.transition(AppEvent::LevelSelected { level: 4, puzzle: puzzle() });
        assert_eq!(state.screen, Screen::Game);
        assert_eq!(state.level, Some(4));
        assert_eq!(state.puzzle.as_ref().map(|p| p.position), Some(4));

        let state = state.transition(AppEvent::BackToLevels);
        assert_eq!(state.screen, Screen::LevelSelection);
        assert!(state.puzzle.is_none());
    }

    #[test]
    fn test_daily_and_endless_skip_level_selection() {
        let state = AppState::new()
            .transition(AppEvent::PlayDaily)
            .transition(AppEvent::CategorySelected(category()));
        assert_eq!(state.mode, Some(GameMode::Daily));
        assert_eq!(state.screen, Screen::Game);

        let state = AppState::new()
            .transition(AppEvent::ModeSelected(GameMode::Endless))
            .transition(AppEvent::CategorySelected(category()));
        assert_eq!(state.screen, Screen::Game);
        assert!(state.puzzle.is_none());
    }

    #[test]
    fn test_back_walks_up() {
        let state = AppState { screen: Screen::LevelSelection, ..AppState::new() };
        let state = state.transition(AppEvent::Back);
        assert_eq!(state.screen, Screen::CategorySelection);
        let state = state.transition(AppEvent::Back);
        assert_eq!(state.screen, Screen::ModeSelection);
        let state = state.transition(AppEvent::Back);
        assert_eq!(state.screen, Screen::Landing);

        let game = AppState { screen: Screen::Game, ..AppState::new() };
        assert_eq!(game.clone().transition(AppEvent::Back).screen, Screen::Game);
        assert_eq!(game.transition(AppEvent::ExitGame).screen, Screen::Landing);
    }

    #[test]
    fn test_login_gate_for_level_up() {
        assert_eq!(
            AppEvent::select_mode(GameMode::LevelUp, false),
            AppEvent::LoginRequired(GameMode::LevelUp)
        );
        assert_eq!(
            AppEvent::select_mode(GameMode::LevelUp, true),
            AppEvent::ModeSelected(GameMode::LevelUp)
        );
        assert_eq!(
            AppEvent::select_mode(GameMode::Endless, false),
            AppEvent::ModeSelected(GameMode::Endless)
        );

        let state = AppState { screen: Screen::ModeSelection, ..AppState::new() }
            .transition(AppEvent::LoginRequired(GameMode::LevelUp));
        assert!(state.show_login);
        assert_eq!(state.screen, Screen::ModeSelection);

        let state = state.transition(AppEvent::DismissLogin);
        assert!(!state.show_login);
        assert_eq!(state.mode, None);
    }

    #[test]
    fn test_level_without_category_is_ignored() {
        let state = AppState { screen: Screen::LevelSelection, ..AppState::new() };
        let next = state.clone().transition(AppEvent::LevelSelected { level: 1, puzzle: puzzle() });
        assert_eq!(next, state);
    }

    #[test]
    fn test_end_game_choices() {
        let (primary, secondary) = end_game_choices(GameMode::Endless, true);
        assert_eq!(primary.step, EndGameStep::NextRound);
        assert_eq!(secondary.map(|c| c.label), Some("Exit (lose progress)"));

        let (primary, secondary) = end_game_choices(GameMode::Endless, false);
        assert_eq!(primary.step, EndGameStep::Navigate(AppEvent::ExitGame));
        assert!(secondary.is_none());

        let (primary, _) = end_game_choices(GameMode::Daily, true);
        assert_eq!(primary.step, EndGameStep::Navigate(AppEvent::TryOtherCategory));
    }

    #[test]
    fn test_end_game_choices_follow_mode_config() {
        for mode in GameMode::ALL {
            let config = mode.config();
            let (primary, _) = end_game_choices(mode, true);
            assert_eq!(primary.step == EndGameStep::NextRound, config.continuous_play);
            assert_eq!(
                primary.step == EndGameStep::Navigate(AppEvent::BackToLevels),
                config.loading_strategy == LoadingStrategy::LevelBased
            );
        }
    }
}
