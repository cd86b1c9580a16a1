use serde::{Deserialize, Serialize};

use crate::api::LevelsResponse;
use crate::constants::{LEVEL_PREFETCH_DISTANCE, NO_MORE_LEVELS};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    // Items the backend sends carry no status until the series computes one
    #[default]
    Locked,
    Ready,
    Crushed,
    Solid,
    Failed,
}

impl LevelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LevelStatus::Locked => "Locked",
            LevelStatus::Ready => "",
            LevelStatus::Crushed => "Crushed It",
            LevelStatus::Solid => "Solid Effort",
            LevelStatus::Failed => "Glorious Failure",
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, LevelStatus::Locked)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LevelItem {
    pub puzzle_id: i64,
    pub position: u32,
    pub par_score: u32,
    #[serde(default)]
    pub score: Option<u32>,
    // Emoji grid saved with the best attempt
    #[serde(default)]
    pub attempts_data: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing)]
    pub status: LevelStatus,
}

/// Display state of one level.
///
/// `is_locked` comes from the sequential unlock policy and wins over
/// everything else. An uncompleted or unscored level is ready to play;
/// otherwise the score is compared with par.
pub fn compute_status(par_score: u32, score: Option<u32>, is_completed: bool, is_locked: bool) -> LevelStatus {
    if is_locked {
        return LevelStatus::Locked;
    }
    match score {
        Some(score) if is_completed => match score.cmp(&par_score) {
            std::cmp::Ordering::Less => LevelStatus::Crushed,
            std::cmp::Ordering::Equal => LevelStatus::Solid,
            std::cmp::Ordering::Greater => LevelStatus::Failed,
        },
        _ => LevelStatus::Ready,
    }
}

/// Assigns statuses to a freshly received batch.
///
/// `previous` is the item immediately before the batch in series order (the
/// tail of what was already loaded), or `None` when the batch starts the
/// series. The first level of the series is never locked; any other level is
/// locked unless its predecessor is completed.
pub fn apply_unlock_policy(batch: &mut [LevelItem], previous: Option<&LevelItem>) {
    let mut prev_completed = previous.map(|p| p.is_completed);
    for level in batch.iter_mut() {
        let is_locked = matches!(prev_completed, Some(false));
        level.status = compute_status(level.par_score, level.score, level.is_completed, is_locked);
        prev_completed = Some(level.is_completed);
    }
}

/// Ordered accumulator of every level loaded so far plus the pagination
/// cursor for the next page.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSeries {
    levels: Vec<LevelItem>,
    cursor: i64,
}

impl Default for LevelSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelSeries {
    pub fn new() -> Self {
        Self { levels: Vec::new(), cursor: 0 }
    }

    pub fn levels(&self) -> &[LevelItem] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// `after_position` to request next; meaningless once exhausted.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.cursor != NO_MORE_LEVELS
    }

    pub fn reset(&mut self) {
        self.levels.clear();
        self.cursor = 0;
    }

    /// Adds a page to the series. Statuses of the new items are computed
    /// against the last already-loaded level; earlier items are untouched.
    pub fn apply_batch(&mut self, response: LevelsResponse) -> &[LevelItem] {
        let start = self.levels.len();
        let mut batch = response.items;
        apply_unlock_policy(&mut batch, self.levels.last());
        self.levels.extend(batch);
        self.cursor = response.next_cursor.unwrap_or(NO_MORE_LEVELS);
        log::debug!(
            "Loaded {} levels ({} total), next cursor {}",
            self.levels.len() - start,
            self.levels.len(),
            self.cursor
        );
        &self.levels[start..]
    }

    /// First level that is playable but not yet completed; where the
    /// carousel opens.
    pub fn resume_index(&self) -> usize {
        self.levels
            .iter()
            .position(|l| l.status == LevelStatus::Ready)
            .unwrap_or(0)
    }
}

/// Three-card carousel over a [`LevelSeries`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelCarousel {
    index: usize,
}

impl LevelCarousel {
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self, len: usize) -> bool {
        if self.index + 1 < len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Whether "next" can lead anywhere: a loaded level to the right, or a
    /// page still to fetch.
    pub fn can_advance(&self, series: &LevelSeries) -> bool {
        self.index + 1 < series.len() || series.has_more()
    }

    /// (previous, current, next) cards around the current index.
    pub fn visible<'a>(&self, levels: &'a [LevelItem]) -> (Option<&'a LevelItem>, Option<&'a LevelItem>, Option<&'a LevelItem>) {
        let prev = self.index.checked_sub(1).and_then(|i| levels.get(i));
        (prev, levels.get(self.index), levels.get(self.index + 1))
    }

    /// Whether the carousel sits close enough to the end of the loaded
    /// levels to fetch the next page.
    pub fn should_load_more(&self, series: &LevelSeries, is_loading: bool) -> bool {
        !is_loading
            && series.has_more()
            && self.index + LEVEL_PREFETCH_DISTANCE >= series.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(position: u32, par: u32, score: Option<u32>, completed: bool) -> LevelItem {
        LevelItem {
            puzzle_id: position as i64 + 100,
            position,
            par_score: par,
            score,
            attempts_data: None,
            is_completed: completed,
            status: LevelStatus::Locked,
        }
    }

    fn page(items: Vec<LevelItem>, next_cursor: i64) -> LevelsResponse {
        LevelsResponse {
            items,
            next_cursor: Some(next_cursor),
            prev_cursor: None,
            batch_size: 10,
        }
    }

    #[test]
    fn test_compute_status_scenarios() {
        assert_eq!(compute_status(4, Some(3), true, false), LevelStatus::Crushed);
        assert_eq!(compute_status(4, Some(4), true, false), LevelStatus::Solid);
        assert_eq!(compute_status(4, Some(5), true, false), LevelStatus::Failed);
        assert_eq!(compute_status(4, Some(3), false, false), LevelStatus::Ready);
        assert_eq!(compute_status(4, None, true, false), LevelStatus::Ready);
        assert_eq!(compute_status(4, Some(3), true, true), LevelStatus::Locked);
    }

    #[test]
    fn test_first_level_never_locked() {
        let mut series = LevelSeries::new();
        series.apply_batch(page(vec![level(1, 4, None, false), level(2, 4, None, false)], NO_MORE_LEVELS));
        assert_eq!(series.levels()[0].status, LevelStatus::Ready);
        assert_eq!(series.levels()[1].status, LevelStatus::Locked);
    }

    #[test]
    fn test_unlock_follows_previous_completion() {
        let mut series = LevelSeries::new();
        series.apply_batch(page(
            vec![
                level(1, 4, Some(3), true),
                level(2, 4, Some(5), true),
                level(3, 4, None, false),
                level(4, 4, None, false),
            ],
            NO_MORE_LEVELS,
        ));
        let statuses: Vec<LevelStatus> = series.levels().iter().map(|l| l.status).collect();
        assert_eq!(
            statuses,
            vec![LevelStatus::Crushed, LevelStatus::Failed, LevelStatus::Ready, LevelStatus::Locked]
        );
        assert_eq!(series.resume_index(), 2);
    }

    #[test]
    fn test_cross_batch_unlock_uses_previous_tail() {
        let mut series = LevelSeries::new();
        series.apply_batch(page(vec![level(1, 4, Some(4), true), level(2, 4, Some(4), true)], 2));
        assert!(series.has_more());
        assert_eq!(series.cursor(), 2);

        let added = series.apply_batch(page(vec![level(3, 4, None, false), level(4, 4, None, false)], 4));
        assert_eq!(added[0].status, LevelStatus::Ready);
        assert_eq!(added[1].status, LevelStatus::Locked);

        // tail of the series is incomplete, so the next page starts locked
        let added = series.apply_batch(page(vec![level(5, 4, Some(2), true)], NO_MORE_LEVELS));
        assert_eq!(added[0].status, LevelStatus::Locked);
        assert_eq!(series.len(), 5);
        assert!(!series.has_more());
    }

    #[test]
    fn test_reset_starts_fresh_series() {
        let mut series = LevelSeries::new();
        series.apply_batch(page(vec![level(1, 4, None, false)], 1));
        series.reset();
        assert!(series.is_empty());
        let added = series.apply_batch(page(vec![level(7, 4, None, false)], NO_MORE_LEVELS));
        assert_eq!(added[0].status, LevelStatus::Ready);
    }

    #[test]
    fn test_levels_deserialize_without_status() {
        let json = r#"{"items": [{"puzzle_id": 11, "position": 1, "par_score": 4, "score": null, "attempts_data": null, "is_completed": false}], "next_cursor": -1, "batch_size": 10}"#;
        let response: LevelsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items[0].status, LevelStatus::Locked);
        assert_eq!(response.next_cursor(), NO_MORE_LEVELS);
    }

    #[test]
    fn test_carousel_navigation() {
        let levels: Vec<LevelItem> = (1..=3).map(|p| level(p, 4, None, false)).collect();
        let mut carousel = LevelCarousel::default();
        assert!(!carousel.prev());
        let (prev, current, next) = carousel.visible(&levels);
        assert!(prev.is_none());
        assert_eq!(current.map(|l| l.position), Some(1));
        assert_eq!(next.map(|l| l.position), Some(2));

        assert!(carousel.next(levels.len()));
        assert!(carousel.next(levels.len()));
        assert!(!carousel.next(levels.len()));
        let (_, current, next) = carousel.visible(&levels);
        assert_eq!(current.map(|l| l.position), Some(3));
        assert!(next.is_none());
    }

    #[test]
    fn test_should_load_more_near_end() {
        let mut series = LevelSeries::new();
        let items: Vec<LevelItem> = (1..=10).map(|p| level(p, 4, None, false)).collect();
        series.apply_batch(page(items, 10));

        assert!(!LevelCarousel::at(2).should_load_more(&series, false));
        assert!(!LevelCarousel::at(6).should_load_more(&series, false));
        assert!(LevelCarousel::at(7).should_load_more(&series, false));
        assert!(!LevelCarousel::at(7).should_load_more(&series, true));

        series.apply_batch(page(vec![], NO_MORE_LEVELS));
        assert!(!LevelCarousel::at(9).should_load_more(&series, false));
    }

    #[test]
    fn test_resume_at_tail_still_reaches_next_page() {
        let mut series = LevelSeries::new();
        let mut first_page: Vec<LevelItem> = (1..=9).map(|n| level(n, 4, Some(4), true)).collect();
        first_page.push(level(10, 4, None, false));
        series.apply_batch(page(first_page, 10));

        let mut carousel = LevelCarousel::at(series.resume_index());
        assert_eq!(carousel.index(), 9);
        assert!(!carousel.clone().next(series.len()));
        assert!(carousel.can_advance(&series));
        assert!(carousel.should_load_more(&series, false));

        series.apply_batch(page(vec![level(11, 4, None, false), level(12, 4, None, false)], NO_MORE_LEVELS));
        assert!(carousel.next(series.len()));
        assert_eq!(carousel.visible(series.levels()).1.map(|l| l.position), Some(11));
        assert!(carousel.can_advance(&series));
        assert!(carousel.next(series.len()));
        assert!(!carousel.can_advance(&series));
        assert!(!carousel.should_load_more(&series, false));
    }
}
