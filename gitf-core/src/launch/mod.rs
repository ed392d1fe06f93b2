pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::{CliLauncher, open_in_editor};
pub use provider::Launcher;
