use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} has no non-blank lines", path.display())]
    EmptyInput { path: PathBuf },
    #[error("{}:{line}: {token:?} is not a JSON number", path.display())]
    InvalidToken {
        path: PathBuf,
        line: usize,
        token: String,
    },
}
impl TraceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TraceError::Io {
            path: path.into(),
            source,
        }
    }
}
