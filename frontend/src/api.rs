use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::window;

use crate::config::get_api_url;
use shared::api::{
    api_error, bearer_header, categories_query, guess_path, high_score_query, level_progress_query, levels_query,
    puzzle_count_path, puzzle_path, sentence_case, slug_query, solution_path, Category, CategoryRecord,
    EndlessItem, GuessRequest, GuessResults, LevelPacketRequest, LevelPacketResponse, LevelProgressRequest,
    LevelsResponse, ProgressStore, Puzzle, PuzzleBatchSource, PuzzleCount, Query, SolutionResponse,
};
use shared::constants::{
    CATEGORIES_ENDPOINT, DAILY_ENDPOINT, ENDLESS_LEVELS_ENDPOINT, ENDLESS_SCORE_ENDPOINT,
    ENDLESS_SUBMIT_ENDPOINT, LEVELUP_LEVELS_ENDPOINT,
};
use shared::game_mode::GameMode;
use shared::GameError;

pub fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
        .or_else(|| window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item("token").ok().flatten()))
        .filter(|token| !token.is_empty())
}

fn network_error(err: gloo_net::Error) -> GameError {
    match err {
        gloo_net::Error::SerdeError(err) => err.into(),
        other => GameError::Network(other.to_string()),
    }
}

/// HTTP client for the Acronymize backend. The bearer token is looked up on
/// every request, so a sign-in elsewhere applies right away; requests go out
/// without it when nobody is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    fn prepare(&self, builder: RequestBuilder, query: Query) -> RequestBuilder {
        let builder = builder
            .header("Content-Type", "application/json")
            .query(query);
        match bearer_header(get_auth_token().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    fn get(&self, path: &str, query: Query) -> RequestBuilder {
        self.prepare(Request::get(&get_api_url(path)), query)
    }

    fn post(&self, path: &str, query: Query) -> RequestBuilder {
        self.prepare(Request::post(&get_api_url(path)), query)
    }

    async fn check(response: Result<Response, gloo_net::Error>) -> Result<Response, GameError> {
        let response = response.map_err(network_error)?;
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = api_error(response.status(), &response.status_text(), &body);
        log::error!("{} {}", response.url(), err);
        Err(err)
    }

    async fn read<T: DeserializeOwned>(response: Result<Response, gloo_net::Error>) -> Result<T, GameError> {
        Self::check(response)
            .await?
            .json::<T>()
            .await
            .map_err(network_error)
    }

    pub async fn categories(&self, mode: Option<GameMode>) -> Result<Vec<Category>, GameError> {
        let records: Vec<CategoryRecord> = Self::read(
            self.get(CATEGORIES_ENDPOINT, categories_query(None, mode)).send().await,
        )
        .await?;
        Ok(records.into_iter().map(Category::from).collect())
    }

    pub async fn puzzle(&self, slug: &str, level_num: u32) -> Result<Puzzle, GameError> {
        let puzzle: Puzzle = Self::read(self.get(&puzzle_path(slug, level_num), Query::new()).send().await).await?;
        Ok(puzzle.normalized())
    }

    pub async fn solution(&self, slug: &str, level_num: u32) -> Result<String, GameError> {
        let response: SolutionResponse =
            Self::read(self.get(&solution_path(slug, level_num), Query::new()).send().await).await?;
        Ok(sentence_case(&response.solution))
    }

    pub async fn submit_guess(&self, slug: &str, level_num: u32, guess: &str) -> Result<GuessResults, GameError> {
        let request = self
            .post(&guess_path(slug, level_num), Query::new())
            .json(&GuessRequest { message: guess.to_string() })
            .map_err(network_error)?;
        Self::read(request.send().await).await
    }

    pub async fn daily(&self, slug: &str) -> Result<Puzzle, GameError> {
        let puzzle: Puzzle = Self::read(self.get(DAILY_ENDPOINT, slug_query(slug)).send().await).await?;
        Ok(puzzle.normalized())
    }

    pub async fn levels(&self, slug: &str, after_position: i64) -> Result<LevelsResponse, GameError> {
        Self::read(self.get(LEVELUP_LEVELS_ENDPOINT, levels_query(slug, after_position)).send().await).await
    }

    pub async fn high_scores(&self) -> Result<Vec<EndlessItem>, GameError> {
        Self::read(self.get(ENDLESS_SCORE_ENDPOINT, Query::new()).send().await).await
    }

    pub async fn level_packet(&self, slug: &str, exclude: &[u32]) -> Result<LevelPacketResponse, GameError> {
        let request = self
            .post(ENDLESS_LEVELS_ENDPOINT, slug_query(slug))
            .json(&LevelPacketRequest { last_position: exclude.to_vec() })
            .map_err(network_error)?;
        Self::read(request.send().await).await
    }

    pub async fn puzzle_count(&self, slug: &str) -> Result<u32, GameError> {
        let count: PuzzleCount = Self::read(self.get(&puzzle_count_path(slug), Query::new()).send().await).await?;
        Ok(count.count)
    }
}

impl PuzzleBatchSource for ApiClient {
    async fn fetch_batch(&self, slug: &str, exclude: &[u32]) -> Result<Vec<Puzzle>, GameError> {
        Ok(self.level_packet(slug, exclude).await?.into_puzzles())
    }
}

impl ProgressStore for ApiClient {
    async fn record_level(
        &self,
        slug: &str,
        level_num: u32,
        score: u32,
        attempts_data: &str,
        mode: GameMode,
    ) -> Result<(), GameError> {
        let request = self
            .post(LEVELUP_LEVELS_ENDPOINT, level_progress_query(slug, level_num, score, mode))
            .json(&LevelProgressRequest { attempts_data: attempts_data.to_string() })
            .map_err(network_error)?;
        Self::check(request.send().await).await.map(|_| ())
    }

    async fn submit_high_score(&self, slug: &str, score: u32) -> Result<(), GameError> {
        // Empty JSON object body, as the backend expects
        let request = self
            .post(ENDLESS_SUBMIT_ENDPOINT, high_score_query(slug, score))
            .json(&serde_json::json!({}))
            .map_err(network_error)?;
        Self::check(request.send().await).await.map(|_| ())
    }
}
