pub mod action;
pub mod config;
pub mod constants;
pub mod event;
pub mod filter;
pub mod git;
pub mod launch;
pub mod paths;
pub mod platform;
pub mod recent;
pub mod setup;
pub mod state;
pub mod view;

// Re-export commonly used types at crate root
pub use action::{Action, SetupAction};
pub use config::Config;
pub use event::AppEvent;
pub use filter::Ranker;
pub use git::{GitProvider, Repo, StatusRecord};
pub use launch::Launcher;
pub use state::{AppState, StatusRequest};
