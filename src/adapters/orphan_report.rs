use tracing::warn;

use crate::domain::{AppError, RemoteRepositoryHandle, Stage};
use crate::ports::CompensationHook;

/// Default compensation: no remote action, one warning per orphaned repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOrphans;

impl CompensationHook for ReportOrphans {
    fn on_failure(&self, stage: Stage, _error: &AppError, created: &[RemoteRepositoryHandle]) {
        for handle in created {
            warn!(
                host = %handle.host,
                repository = %handle.full_name,
                failed_stage = %stage,
                "repository was created before the pipeline halted and has been left in place"
            );
        }
    }
}
