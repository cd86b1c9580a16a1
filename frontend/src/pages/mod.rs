pub mod category_selection;
pub mod game;
pub mod instructions;
pub mod landing;
pub mod level_selection;
pub mod mode_selection;
