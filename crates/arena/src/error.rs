use std::path::PathBuf;

use chess_core::{EngineError, RulesError};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum ArenaError {
    #[error("invalid player `{spec}`: {reason}")]
    InvalidPlayer { spec: String, reason: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to (de)serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decision worker {0} panicked")]
    WorkerPanicked(Uuid),

    #[error("failed to start decision worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
