//! Wire contract with the Acronymize backend: request/response bodies,
//! endpoint paths, query parameters, and the traits the game logic uses to
//! reach the network without depending on a concrete HTTP client.

use serde::{Deserialize, Serialize};

use crate::constants::{NO_MORE_LEVELS, NO_PUZZLES_ERROR};
use crate::error::GameError;
use crate::game_mode::GameMode;
use crate::levels::LevelItem;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Puzzle {
    // Displayed acronym, space separated ("B R B")
    pub acronym: String,
    pub clue: String,
    pub par_score: u32,
    // Identifier of the puzzle inside its category
    pub position: u32,
}

impl Puzzle {
    /// Returns the puzzle with its clue in sentence case, the way every
    /// screen displays it.
    pub fn normalized(mut self) -> Self {
        self.clue = sentence_case(&self.clue);
        self
    }
}

pub fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Capitalises every word; used for the revealed answer.
pub fn title_case(text: &str) -> String {
    text.split_whitespace().map(sentence_case).collect::<Vec<_>>().join(" ")
}

/// Category as the backend serializes it. `high_score` is only present when
/// listing for endless mode and `badge` only for daily mode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub high_score: Option<u32>,
    pub badge: Option<String>,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            icon: record.emoji,
            title: record.name,
            description: record.description,
            slug: record.slug,
            high_score: record.high_score,
            badge: record.badge,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessResults {
    // One accuracy code per guessed word: 0 correct, 1 misplaced, 2 incorrect
    pub word_results: Vec<i32>,
    // Similarity in [0, 1]; exactly 1 means solved
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SolutionResponse {
    pub solution: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LevelsResponse {
    pub items: Vec<LevelItem>,
    // null when the page is empty
    #[serde(default)]
    pub next_cursor: Option<i64>,
    #[serde(default)]
    pub prev_cursor: Option<i64>,
    #[serde(default)]
    pub batch_size: u32,
}

impl LevelsResponse {
    pub fn next_cursor(&self) -> i64 {
        self.next_cursor.unwrap_or(NO_MORE_LEVELS)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LevelPacketRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub last_position: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LevelPacketResponse {
    pub puzzles: Vec<Puzzle>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_available: u32,
    #[serde(default)]
    pub filtered_positions: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LevelProgressRequest {
    pub attempts_data: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EndlessItem {
    pub slug: String,
    pub high_score: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PuzzleCount {
    pub count: u32,
}

/// Error payload. The backend uses `error`; some proxies answer `message`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Turns a non-2xx response into a `GameError::Api`, preferring the message
/// carried in the body.
pub fn api_error(status: u16, status_text: &str, body: &str) -> GameError {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.error)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text));
    GameError::Api { status, message }
}

pub fn puzzle_path(slug: &str, level_num: u32) -> String {
    format!("/puzzles/{}/{}/", slug, level_num)
}

pub fn solution_path(slug: &str, level_num: u32) -> String {
    format!("/puzzles/solution/{}/{}/", slug, level_num)
}

pub fn guess_path(slug: &str, level_num: u32) -> String {
    format!("/puzzles/{}/guess/{}/", slug, level_num)
}

pub fn puzzle_count_path(slug: &str) -> String {
    format!("/categories/{}/puzzles/count/", slug)
}

pub type Query = Vec<(&'static str, String)>;

pub fn categories_query(user_id: Option<&str>, mode: Option<GameMode>) -> Query {
    let mut query = Query::new();
    if let Some(user_id) = user_id {
        query.push(("user_id", user_id.to_string()));
    }
    if let Some(mode) = mode {
        query.push(("game_mode", mode.as_str().to_string()));
    }
    query
}

pub fn levels_query(slug: &str, after_position: i64) -> Query {
    vec![("slug", slug.to_string()), ("after_position", after_position.to_string())]
}

pub fn level_progress_query(slug: &str, level_num: u32, score: u32, mode: GameMode) -> Query {
    vec![
        ("slug", slug.to_string()),
        ("level_num", level_num.to_string()),
        ("score", score.to_string()),
        ("game_mode", mode.as_str().to_string()),
    ]
}

pub fn high_score_query(slug: &str, score: u32) -> Query {
    vec![("slug", slug.to_string()), ("score", score.to_string())]
}

pub fn slug_query(slug: &str) -> Query {
    vec![("slug", slug.to_string())]
}

/// `Authorization` header value for whatever token is stored right now.
/// Blank tokens count as signed out.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {}", token))
}

/// Source of endless-mode puzzle batches.
#[allow(async_fn_in_trait)]
pub trait PuzzleBatchSource {
    async fn fetch_batch(&self, slug: &str, exclude: &[u32]) -> Result<Vec<Puzzle>, GameError>;
}

/// Backend calls that persist the outcome of a round.
#[allow(async_fn_in_trait)]
pub trait ProgressStore {
    async fn record_level(
        &self,
        slug: &str,
        level_num: u32,
        score: u32,
        attempts_data: &str,
        mode: GameMode,
    ) -> Result<(), GameError>;

    async fn submit_high_score(&self, slug: &str, score: u32) -> Result<(), GameError>;
}

impl LevelPacketResponse {
    /// Display-ready puzzles of the batch. An empty batch is left for the
    /// queue to report.
    pub fn into_puzzles(self) -> Vec<Puzzle> {
        if self.puzzles.is_empty() {
            log::warn!("{} (total available: {})", NO_PUZZLES_ERROR, self.total_available);
        } else {
            log::debug!(
                "Received {} of {} puzzles, filtered {:?}",
                self.count,
                self.total_available,
                self.filtered_positions
            );
        }
        self.puzzles.into_iter().map(Puzzle::normalized).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_sentence_case() {
        let puzzle = Puzzle {
            acronym: "B R B".into(),
            clue: "sTEPPING away BRIEFLY".into(),
            par_score: 4,
            position: 1,
        }
        .normalized();
        assert_eq!(puzzle.clue, "Stepping away briefly");
        assert_eq!(sentence_case(""), "");
        assert_eq!(title_case("be RIGHT  back"), "Be Right Back");
    }

    #[test]
    fn test_category_mapping_keeps_dynamic_fields() {
        let json = r#"[
            {"id": 1, "name": "Internet", "slug": "internet", "description": "Online slang", "emoji": "💻", "high_score": 7},
            {"id": 2, "name": "Food", "slug": "food", "description": "Kitchen", "emoji": "🍕", "badge": "Completed"}
        ]"#;
        let records: Vec<CategoryRecord> = serde_json::from_str(json).unwrap();
        let categories: Vec<Category> = records.into_iter().map(Category::from).collect();
        assert_eq!(categories[0].title, "Internet");
        assert_eq!(categories[0].icon, "💻");
        assert_eq!(categories[0].high_score, Some(7));
        assert_eq!(categories[1].badge.as_deref(), Some("Completed"));
        assert_eq!(categories[1].high_score, None);
    }

    #[test]
    fn test_levels_response_null_cursor_means_no_more() {
        let json = r#"{"items": [], "next_cursor": null, "batch_size": 10}"#;
        let response: LevelsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.next_cursor(), NO_MORE_LEVELS);
    }

    #[test]
    fn test_packet_request_omits_empty_exclusions() {
        let empty = serde_json::to_string(&LevelPacketRequest::default()).unwrap();
        assert_eq!(empty, "{}");
        let with = serde_json::to_string(&LevelPacketRequest { last_position: vec![4, 9] }).unwrap();
        assert_eq!(with, r#"{"last_position":[4,9]}"#);
    }

    #[test]
    fn test_level_packet_normalizes_clues() {
        let json = r#"{"puzzles": [{"acronym": "L O L", "clue": "LAUGHING", "par_score": 3, "position": 8}], "count": 1, "total_available": 40, "filtered_positions": [2]}"#;
        let packet: LevelPacketResponse = serde_json::from_str(json).unwrap();
        let puzzles = packet.into_puzzles();
        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].clue, "Laughing");
    }

    #[test]
    fn test_api_error_prefers_body_message() {
        let err = api_error(404, "Not Found", r#"{"error": "Category not found"}"#);
        assert_eq!(err, GameError::Api { status: 404, message: "Category not found".into() });

        let err = api_error(404, "Not Found", "No message attribute");
        assert_eq!(err.user_message(), "No message attribute");

        let err = api_error(500, "Internal Server Error", "");
        assert_eq!(err.user_message(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_paths_and_queries() {
        assert_eq!(puzzle_path("food", 3), "/puzzles/food/3/");
        assert_eq!(solution_path("food", 3), "/puzzles/solution/food/3/");
        assert_eq!(guess_path("food", 3), "/puzzles/food/guess/3/");
        assert_eq!(
            level_progress_query("food", 3, 5, GameMode::Daily),
            vec![
                ("slug", "food".to_string()),
                ("level_num", "3".to_string()),
                ("score", "5".to_string()),
                ("game_mode", "daily".to_string()),
            ]
        );
        assert!(categories_query(None, None).is_empty());
    }

    #[test]
    fn test_bearer_header_follows_current_token() {
        assert_eq!(bearer_header(None), None);
        assert_eq!(bearer_header(Some("")), None);
        assert_eq!(bearer_header(Some("abc123")), Some("Bearer abc123".to_string()));
        assert_eq!(bearer_header(Some("  ")), None);
    }
}
