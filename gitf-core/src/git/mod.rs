pub mod cli;
pub mod mock;
pub mod provider;
pub mod repo;
pub mod status;
pub mod url;

pub use cli::CliGitProvider;
pub use provider::GitProvider;
pub use repo::Repo;
pub use status::{ChangeKind, ChangeSummary, FileEntry, StatusRecord};
pub use url::to_browsable;
