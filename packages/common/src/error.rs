use stylegate_compat::{Engine, VersionParseError};
use thiserror::Error;

pub type CommonResult<T> = Result<T, CommonError>;

/// Errors raised while turning user configuration into build targets
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Unknown engine '{name}' in target '{target}'")]
    UnknownEngine { target: String, name: String },

    #[error("Invalid version in target '{target}': {source}")]
    InvalidVersion {
        target: String,
        #[source]
        source: VersionParseError,
    },

    #[error("Engine '{engine}' is targeted more than once")]
    DuplicateTarget { engine: Engine },

    #[error("Unknown CSS feature '{name}'")]
    UnknownFeature { name: String },

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommonError {
    pub fn unknown_engine(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownEngine {
            target: target.into(),
            name: name.into(),
        }
    }

    pub fn invalid_version(target: impl Into<String>, source: VersionParseError) -> Self {
        Self::InvalidVersion {
            target: target.into(),
            source,
        }
    }

    pub fn duplicate_target(engine: Engine) -> Self {
        Self::DuplicateTarget { engine }
    }

    pub fn unknown_feature(name: impl Into<String>) -> Self {
        Self::UnknownFeature { name: name.into() }
    }
}
