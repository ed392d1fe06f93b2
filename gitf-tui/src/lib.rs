pub mod app;
pub mod components;
pub mod keymap;
pub mod ranker;
pub mod theme;

pub use app::{OpenAction, run, run_setup};
pub use ranker::SkimRanker;
pub use theme::Theme;
