use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("expected exactly one argument, got {count}")]
    Usage { count: usize },

    #[error("day identifier is not valid UTF-8: {lossy}")]
    NonUtf8Identifier { lossy: String },

    #[error("failed to create input directory {}: {source}", .path.display())]
    CreateInputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write scaffold file {}: {source}", .path.display())]
    WriteSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write status output: {0}")]
    Output(#[from] std::io::Error),
}

impl ScaffoldError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Usage { .. } => 1,
            ScaffoldError::NonUtf8Identifier { .. }
            | ScaffoldError::CreateInputDir { .. }
            | ScaffoldError::WriteSource { .. } => 2,
            ScaffoldError::Output(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScaffoldError::Usage { .. } => "pass the day identifier as the only argument",
            ScaffoldError::NonUtf8Identifier { .. } => {
                "the identifier ends up in Rust source, use a UTF-8 name"
            }
            ScaffoldError::CreateInputDir { .. } | ScaffoldError::WriteSource { .. } => {
                "run from the crate root and check write permissions"
            }
            ScaffoldError::Output(_) => "make sure standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
