//! Provisioning pipeline stages and state transitions.

use std::fmt;

/// One unit of the provisioning pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SourceRepository,
    RegistryRepository,
    Materialization,
    Publication,
}

impl Stage {
    pub const ALL: [Stage; 4] =
        [Stage::SourceRepository, Stage::RegistryRepository, Stage::Materialization, Stage::Publication];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::SourceRepository => "source repository",
            Stage::RegistryRepository => "registry repository",
            Stage::Materialization => "materialization",
            Stage::Publication => "publication",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numbered steps of the local materialization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeStep {
    Clone,
    LoadDescriptor,
    EditDescriptor,
    WriteDescriptor,
    WriteReadme,
}

impl MaterializeStep {
    pub fn number(&self) -> u8 {
        match self {
            MaterializeStep::Clone => 1,
            MaterializeStep::LoadDescriptor => 2,
            MaterializeStep::EditDescriptor => 3,
            MaterializeStep::WriteDescriptor => 4,
            MaterializeStep::WriteReadme => 5,
        }
    }
}

impl fmt::Display for MaterializeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaterializeStep::Clone => "clone",
            MaterializeStep::LoadDescriptor => "load descriptor",
            MaterializeStep::EditDescriptor => "edit descriptor",
            MaterializeStep::WriteDescriptor => "write descriptor",
            MaterializeStep::WriteReadme => "write README",
        };
        f.write_str(label)
    }
}

/// Pipeline progress.
///
/// `Published` and `Failed` are terminal. A stage may only complete from
/// its expected predecessor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    SourceCreated,
    RegistryCreated,
    Materialized,
    Published,
    Failed { stage: Stage, reason: String },
}

impl PipelineState {
    /// Stage to attempt next, or `None` once terminal.
    pub fn next_stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Start => Some(Stage::SourceRepository),
            PipelineState::SourceCreated => Some(Stage::RegistryRepository),
            PipelineState::RegistryCreated => Some(Stage::Materialization),
            PipelineState::Materialized => Some(Stage::Publication),
            PipelineState::Published | PipelineState::Failed { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next_stage().is_none()
    }

    /// Whether `stage` may run from this state.
    pub fn permits(&self, stage: Stage) -> bool {
        self.next_stage() == Some(stage)
    }

    /// State after the pending stage succeeds. Terminal states are unchanged.
    pub fn advance(&self) -> PipelineState {
        match self {
            PipelineState::Start => PipelineState::SourceCreated,
            PipelineState::SourceCreated => PipelineState::RegistryCreated,
            PipelineState::RegistryCreated => PipelineState::Materialized,
            PipelineState::Materialized | PipelineState::Published => PipelineState::Published,
            PipelineState::Failed { .. } => self.clone(),
        }
    }

    /// State after the pending stage fails. Terminal states are unchanged.
    pub fn fail(&self, reason: impl Into<String>) -> PipelineState {
        match self.next_stage() {
            Some(stage) => PipelineState::Failed { stage, reason: reason.into() },
            None => self.clone(),
        }
    }
}
