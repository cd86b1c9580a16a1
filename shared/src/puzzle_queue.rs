//! Endless-mode puzzle buffer.
//!
//! The queue is sans-IO: [`PuzzleQueue::plan`] either serves the next
//! buffered puzzle or asks the caller to fetch a new batch, and the caller
//! reports back with [`PuzzleQueue::accept_batch`] or
//! [`PuzzleQueue::refill_failed`]. [`next_puzzle`] runs that loop against
//! any [`PuzzleBatchSource`].

use std::cell::RefCell;

use crate::api::{Category, Puzzle, PuzzleBatchSource};
use crate::constants::{BATCH_FETCH_ERROR, PREFETCH_THRESHOLD, RECENT_POSITIONS_EXCLUDED};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    HasBuffer,
    Low,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillRequest {
    pub slug: String,
    // Recently served positions the backend should avoid
    pub exclude: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueueStep {
    Serve(Puzzle),
    Refill(RefillRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PuzzleQueue {
    puzzles: Vec<Puzzle>,
    // Index of the next puzzle to serve
    cursor: usize,
    refill_in_flight: bool,
}

impl PuzzleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.puzzles.len().saturating_sub(self.cursor)
    }

    pub fn state(&self) -> QueueState {
        match self.remaining() {
            0 => QueueState::Empty,
            n if n <= PREFETCH_THRESHOLD => QueueState::Low,
            _ => QueueState::HasBuffer,
        }
    }

    pub fn is_refilling(&self) -> bool {
        self.refill_in_flight
    }

    /// Positions of up to the last three puzzles served from this buffer.
    pub fn recent_positions(&self) -> Vec<u32> {
        let end = self.cursor.min(self.puzzles.len());
        let start = end.saturating_sub(RECENT_POSITIONS_EXCLUDED);
        self.puzzles[start..end].iter().map(|p| p.position).collect()
    }

    pub fn plan(&mut self, category: Option<&Category>) -> Result<QueueStep, GameError> {
        let category = category.ok_or(GameError::NoCategorySelected)?;

        if self.remaining() > PREFETCH_THRESHOLD {
            let puzzle = self.puzzles[self.cursor].clone();
            self.cursor += 1;
            return Ok(QueueStep::Serve(puzzle));
        }

        if self.refill_in_flight {
            return Err(GameError::BatchFetch("Puzzle batch is already loading".to_string()));
        }

        self.refill_in_flight = true;
        Ok(QueueStep::Refill(RefillRequest {
            slug: category.slug.clone(),
            exclude: self.recent_positions(),
        }))
    }

    /// Replaces the buffer with a fresh batch and serves its first puzzle.
    /// An empty batch leaves the old buffer in place.
    pub fn accept_batch(&mut self, batch: Vec<Puzzle>) -> Result<Puzzle, GameError> {
        self.refill_in_flight = false;

        let first = match batch.first() {
            Some(first) => first.clone(),
            None => {
                log::warn!("Endless refill returned an empty batch");
                return Err(GameError::NoPuzzlesAvailable);
            }
        };

        if self.remaining() > 0 {
            log::debug!("Discarding {} unserved puzzles on refill", self.remaining());
        }
        self.puzzles = batch;
        self.cursor = 1;
        Ok(first)
    }

    /// Records a failed refill. The buffer is untouched; the error is
    /// terminal only when nothing is left to serve.
    pub fn refill_failed(&mut self, err: GameError) -> GameError {
        self.refill_in_flight = false;
        log::error!("{}: {}", BATCH_FETCH_ERROR, err);

        if self.remaining() == 0 {
            GameError::NoPuzzlesAvailable
        } else {
            GameError::BatchFetch(err.user_message())
        }
    }

    /// Serves the next buffered puzzle regardless of the refill threshold.
    /// Used to keep playing on a stale buffer after a failed refill.
    pub fn take_buffered(&mut self) -> Option<Puzzle> {
        let puzzle = self.puzzles.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(puzzle)
    }
}

/// Serves the next endless puzzle, refilling from `source` when the buffer
/// runs low. The queue is never borrowed across the fetch, so callers may
/// share it with UI callbacks. A failed refill keeps play going on whatever
/// is left of the old batch.
pub async fn next_puzzle<S: PuzzleBatchSource>(
    queue: &RefCell<PuzzleQueue>,
    category: Option<&Category>,
    source: &S,
) -> Result<Puzzle, GameError> {
    let step = queue.borrow_mut().plan(category)?;
    let request = match step {
        QueueStep::Serve(puzzle) => return Ok(puzzle),
        QueueStep::Refill(request) => request,
    };

    log::info!("Refilling endless queue for {} (excluding {:?})", request.slug, request.exclude);
    let fetched = source.fetch_batch(&request.slug, &request.exclude).await;

    let mut queue = queue.borrow_mut();
    match fetched {
        Ok(batch) => queue.accept_batch(batch),
        Err(err) => match queue.refill_failed(err) {
            GameError::BatchFetch(message) => {
                log::warn!("{}; serving from the previous batch", message);
                queue.take_buffered().ok_or(GameError::NoPuzzlesAvailable)
            }
            other => Err(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn category() -> Category {
        Category {
            icon: "💻".into(),
            title: "Internet".into(),
            description: String::new(),
            slug: "internet".into(),
            high_score: None,
            badge: None,
        }
    }

    fn puzzles(positions: std::ops::RangeInclusive<u32>) -> Vec<Puzzle> {
        positions
            .map(|position| Puzzle {
                acronym: "L O L".into(),
                clue: "Laughing".into(),
                par_score: 3,
                position,
            })
            .collect()
    }

    /// Serves batches in order and records every exclusion list it gets.
    struct FakeSource {
        batches: RefCell<Vec<Result<Vec<Puzzle>, GameError>>>,
        requests: RefCell<Vec<Vec<u32>>>,
    }

    impl FakeSource {
        fn new(batches: Vec<Result<Vec<Puzzle>, GameError>>) -> Self {
            Self { batches: RefCell::new(batches), requests: RefCell::new(Vec::new()) }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl PuzzleBatchSource for FakeSource {
        async fn fetch_batch(&self, _slug: &str, exclude: &[u32]) -> Result<Vec<Puzzle>, GameError> {
            self.requests.borrow_mut().push(exclude.to_vec());
            self.batches.borrow_mut().remove(0)
        }
    }

    #[test]
    fn test_requires_category() {
        let queue = RefCell::new(PuzzleQueue::new());
        let source = FakeSource::new(vec![]);
        assert_eq!(block_on(next_puzzle(&queue, None, &source)), Err(GameError::NoCategorySelected));
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_one_refill_per_threshold_crossing() {
        let cat = category();
        let queue = RefCell::new(PuzzleQueue::new());
        let source = FakeSource::new(vec![Ok(puzzles(1..=10)), Ok(puzzles(11..=20))]);

        let first = block_on(next_puzzle(&queue, Some(&cat), &source)).unwrap();
        assert_eq!(first.position, 1);
        assert_eq!(source.calls(), 1);
        assert_eq!(source.requests.borrow()[0], Vec::<u32>::new());

        // 9 remain after the first; serve until only the threshold is left
        for expected in 2..=7 {
            let puzzle = block_on(next_puzzle(&queue, Some(&cat), &source)).unwrap();
            assert_eq!(puzzle.position, expected);
        }
        assert_eq!(source.calls(), 1);
        assert_eq!(queue.borrow().remaining(), 3);
        assert_eq!(queue.borrow().state(), QueueState::Low);

        let puzzle = block_on(next_puzzle(&queue, Some(&cat), &source)).unwrap();
        assert_eq!(puzzle.position, 11);
        assert_eq!(source.calls(), 2);
        assert_eq!(source.requests.borrow()[1], vec![5, 6, 7]);
        assert_eq!(queue.borrow().remaining(), 9);
        assert_eq!(queue.borrow().state(), QueueState::HasBuffer);
    }

    #[test]
    fn test_failed_refill_reports_batch_fetch() {
        let cat = category();
        let mut queue = PuzzleQueue::new();
        queue.accept_batch(puzzles(1..=3)).unwrap();
        assert!(matches!(queue.plan(Some(&cat)), Ok(QueueStep::Refill(_))));

        let err = queue.refill_failed(GameError::Api { status: 500, message: "Failed to load".into() });
        assert_eq!(err, GameError::BatchFetch("Failed to load".into()));
        assert_eq!(queue.remaining(), 2);
        assert!(!queue.is_refilling());
    }

    #[test]
    fn test_failed_refill_serves_stale_buffer() {
        let cat = category();
        let queue = RefCell::new(PuzzleQueue::new());
        let source = FakeSource::new(vec![
            Ok(puzzles(1..=3)),
            Err(GameError::Api { status: 500, message: "Failed to load".into() }),
            Err(GameError::Api { status: 500, message: "Failed to load".into() }),
            Err(GameError::Api { status: 500, message: "Failed to load".into() }),
        ]);

        block_on(next_puzzle(&queue, Some(&cat), &source)).unwrap();
        let second = block_on(next_puzzle(&queue, Some(&cat), &source)).unwrap();
        assert_eq!(second.position, 2);
        let third = block_on(next_puzzle(&queue, Some(&cat), &source)).unwrap();
        assert_eq!(third.position, 3);
        assert_eq!(source.calls(), 3);

        // Nothing stale left to fall back on
        assert_eq!(block_on(next_puzzle(&queue, Some(&cat), &source)), Err(GameError::NoPuzzlesAvailable));
        assert!(!queue.borrow().is_refilling());
    }

    #[test]
    fn test_failed_refill_on_empty_queue_is_terminal() {
        let cat = category();
        let queue = RefCell::new(PuzzleQueue::new());
        let source = FakeSource::new(vec![Err(GameError::Network("offline".into()))]);
        assert_eq!(block_on(next_puzzle(&queue, Some(&cat), &source)), Err(GameError::NoPuzzlesAvailable));
    }

    #[test]
    fn test_empty_batch_means_no_puzzles() {
        let cat = category();
        let queue = RefCell::new(PuzzleQueue::new());
        let source = FakeSource::new(vec![Ok(vec![])]);
        assert_eq!(block_on(next_puzzle(&queue, Some(&cat), &source)), Err(GameError::NoPuzzlesAvailable));
        assert_eq!(queue.borrow().state(), QueueState::Empty);
    }

    #[test]
    fn test_plan_rejects_second_refill_while_loading() {
        let cat = category();
        let mut queue = PuzzleQueue::new();
        assert!(matches!(queue.plan(Some(&cat)), Ok(QueueStep::Refill(_))));
        assert!(queue.is_refilling());
        assert!(matches!(queue.plan(Some(&cat)), Err(GameError::BatchFetch(_))));

        let first = queue.accept_batch(puzzles(1..=5)).unwrap();
        assert_eq!(first.position, 1);
        assert!(matches!(queue.plan(Some(&cat)), Ok(QueueStep::Serve(p)) if p.position == 2));
    }

    #[test]
    fn test_refill_replaces_unserved_entries() {
        let mut queue = PuzzleQueue::new();
        queue.accept_batch(puzzles(1..=4)).unwrap();
        assert_eq!(queue.recent_positions(), vec![1]);
        queue.accept_batch(puzzles(20..=22)).unwrap();
        assert_eq!(queue.remaining(), 2);
        assert_eq!(queue.take_buffered().map(|p| p.position), Some(21));
    }
}
