use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Coarse classification reported to users and used to pick exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SubprocessFailure,
    DecodeError,
    IoError,
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum ComphyError {
    /// The external command ran but exited unsuccessfully.
    #[error("{program} exited with {}: {}", describe_code(.code), String::from_utf8_lossy(.stderr).trim_end())]
    Subprocess {
        program: String,
        code: Option<i32>,
        stderr: Vec<u8>,
    },
    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to encode image {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("cannot infer an image format from {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    InvalidArgument(String),
}

impl ComphyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComphyError::Subprocess { .. } => ErrorKind::SubprocessFailure,
            ComphyError::Decode { .. } => ErrorKind::DecodeError,
            ComphyError::Launch { .. }
            | ComphyError::Encode { .. }
            | ComphyError::UnsupportedFormat { .. }
            | ComphyError::Io { .. } => ErrorKind::IoError,
            ComphyError::Settings { .. } | ComphyError::InvalidArgument(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }

    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        ComphyError::InvalidArgument(message.into())
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
