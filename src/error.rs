use std::path::PathBuf;

use crate::record::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum FitplotError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("fold {fold}, generation {generation}: no best-fitness values recorded")]
    EmptyGeneration { fold: i64, generation: usize },
    #[error("unsupported output format for {} (expected .png or .svg)", path.display())]
    UnsupportedOutput { path: PathBuf },
}
