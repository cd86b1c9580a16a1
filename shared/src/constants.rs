pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

pub const CATEGORIES_ENDPOINT: &str = "/categories/";
pub const DAILY_ENDPOINT: &str = "/daily/";
pub const LEVELUP_LEVELS_ENDPOINT: &str = "/levelup/levels/";
pub const ENDLESS_SCORE_ENDPOINT: &str = "/endless/score/";
pub const ENDLESS_SUBMIT_ENDPOINT: &str = "/endless/submit/";
pub const ENDLESS_LEVELS_ENDPOINT: &str = "/endless/levels/";

// Endless queue refills once this many unserved puzzles (or fewer) remain.
pub const PREFETCH_THRESHOLD: usize = 3;
pub const RECENT_POSITIONS_EXCLUDED: usize = 3;

// Cursor value the levels endpoint returns once the series is exhausted.
pub const NO_MORE_LEVELS: i64 = -1;
// Load the next page when the carousel is this close to the end.
pub const LEVEL_PREFETCH_DISTANCE: usize = 3;

pub const ERROR_DISPLAY_MS: u32 = 2500;
pub const SHAKE_DURATION_MS: u32 = 500;

pub const COMPLETED_SIMILARITY: f64 = 1.0;

pub const NO_CATEGORY_ERROR: &str = "No category selected";
pub const NO_PUZZLES_ERROR: &str = "No puzzles available";
pub const BATCH_FETCH_ERROR: &str = "Failed to load puzzle batch";
pub const PUZZLE_LOAD_ERROR: &str = "Failed to load puzzle";
pub const DAILY_LOAD_ERROR: &str = "Failed to load daily puzzle";
pub const NETWORK_ERROR: &str = "Network error occurred";
