pub mod catalog;
pub mod engine;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use catalog::{categories, CATALOG};
pub use models::{AppState, GameMode, QuizSession, StandardRecord, ALL_CATEGORIES};
pub use session::handle_quiz_input;
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::{cursor_column, truncate_string};
