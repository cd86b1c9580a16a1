pub mod interactive_card;
pub mod modal;
pub mod screen_wrapper;

pub use interactive_card::InteractiveCard;
pub use modal::Modal;
pub use screen_wrapper::ScreenWrapper;
