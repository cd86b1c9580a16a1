pub mod api;
pub mod constants;
pub mod error;
pub mod feedback;
pub mod game_mode;
pub mod levels;
pub mod progress;
pub mod puzzle_queue;
pub mod round;
pub mod screen;
pub mod validation;

pub use error::GameError;
