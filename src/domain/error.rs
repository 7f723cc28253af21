use std::io;

use thiserror::Error;

use crate::domain::pipeline::{MaterializeStep, Stage};

/// Which remote host a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteHost {
    SourceControl,
    Registry,
}

impl std::fmt::Display for RemoteHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteHost::SourceControl => write!(f, "source-control"),
            RemoteHost::Registry => write!(f, "registry"),
        }
    }
}

/// Library-wide error type for wfseed operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file does not exist.
    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    /// Configuration loaded but failed validation.
    #[error("Invalid config: {0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing error (config documents only; descriptors report `DecodeError`).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Registry login was rejected or unreachable.
    #[error("Registry authentication failed{}: {payload}", status_label(.status))]
    AuthenticationFailure { status: Option<u16>, payload: String },

    /// Repository creation returned anything other than 201.
    #[error("Creation of {host} repository failed{}: {payload}", status_label(.status))]
    RemoteCreationFailure { host: RemoteHost, status: Option<u16>, payload: String },

    /// `git clone` exited non-zero or could not be spawned.
    #[error("Clone of {address} failed (exit {}): {details}", exit_label(.exit_code))]
    CloneFailure { address: String, exit_code: Option<i32>, details: String },

    /// Descriptor missing or not valid structured data.
    #[error("Failed to decode {path}: {details}")]
    DecodeError { path: String, details: String },

    /// Edited descriptor could not be serialized.
    #[error("Failed to encode descriptor: {0}")]
    EncodeError(String),

    /// An appended input id already exists in the descriptor.
    #[error("Descriptor already has an input with id '{0}'")]
    DuplicateInputId(String),

    /// No existing remote file identity to authorize an overwrite.
    #[error("Remote content missing for {path}{}: {payload}", status_label(.status))]
    RemoteContentMissing { path: String, status: Option<u16>, payload: String },

    /// Content update was rejected.
    #[error("Remote write of {path} failed{}: {payload}", status_label(.status))]
    RemoteWriteFailure { path: String, status: Option<u16>, payload: String },

    /// A numbered materialization step failed.
    #[error("step {} ({step}) failed: {source}", step_number(.step))]
    MaterializationStep {
        step: MaterializeStep,
        #[source]
        source: Box<AppError>,
    },

    /// A stage was attempted from a state that does not precede it.
    #[error("{stage} stage attempted out of order")]
    StageOutOfOrder { stage: Stage },

    /// A pipeline stage failed; the pipeline halted.
    #[error("{stage} stage failed: {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: Box<AppError>,
    },
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

fn step_number(step: &MaterializeStep) -> u8 {
    step.number()
}

fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

impl AppError {
    /// Stage that halted the pipeline, if this error came out of the orchestrator.
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            AppError::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Innermost error, skipping stage and step wrappers.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::StageFailed { source, .. } | AppError::MaterializationStep { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}
