pub mod auth_state;
pub mod use_mounted;
pub mod use_progress_saver;
pub mod use_puzzle_loader;
pub mod use_timed_error;

pub use auth_state::*;
pub use use_mounted::*;
pub use use_progress_saver::*;
pub use use_puzzle_loader::*;
pub use use_timed_error::*;
