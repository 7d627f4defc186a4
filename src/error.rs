use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generator run.
///
/// Input the generators merely don't understand is logged and skipped,
/// never reported here.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read input {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list directory {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render template")]
    Render(#[from] askama::Error),
}

impl GenerateError {
    pub(crate) fn read_input(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::ReadInput { path, source }
    }

    pub(crate) fn list_dir(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::ListDir { path, source }
    }

    pub(crate) fn write_output(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::WriteOutput { path, source }
    }
}
