use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{} has no header row", path.display())]
    EmptySource { path: PathBuf },

    #[error("{} has no column named `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },
}
