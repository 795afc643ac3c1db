//! Error types.
//!
//! Everything fatal funnels into `GameError`; `main` maps it to an exit code.
//! `ImageTooLarge` is the one recoverable kind: the controller logs it and
//! skips the image render.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),

    #[error("no image for incorrect-guess count {0}")]
    AssetNotFound(usize),

    #[error("image {key} is {rows} rows x {cols} cols, panel fits {max_rows} x {max_cols}")]
    ImageTooLarge {
        key: usize,
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("invalid word {0:?}: must be non-empty lowercase a-z")]
    InvalidWord(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed asset document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("image key {0:?} is not a non-negative integer")]
    BadKey(String),

    #[error("asset document has no images")]
    Empty,
}

impl GameError {
    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GameError::TerminalTooSmall { .. } => 2,
            _ => 1,
        }
    }
}
