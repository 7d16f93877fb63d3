pub mod evaluation;
pub mod logger_extensions;
pub mod search;
pub mod task;
pub mod types;

pub use evaluation::evaluate_board;
pub use logger_extensions::SearchLoggerExtensions;
pub use search::{best_move, minimax};
pub use task::SearchTask;
pub use types::*;
