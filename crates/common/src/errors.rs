use crate::repo_path::RepoPathError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid repository path: {0}")]
    RepoPath(#[from] RepoPathError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
