use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid field selector {0:?}: expected \"title\" or \"content\"")]
    InvalidField(String),

    #[error("malformed document {id}: {reason}")]
    MalformedDocument { id: String, reason: &'static str },

    #[error("document directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
