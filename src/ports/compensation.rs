use crate::domain::{AppError, RemoteRepositoryHandle, Stage};

/// Extension point invoked once when the pipeline halts.
///
/// `created` lists remote repositories that already exist when `stage` failed.
pub trait CompensationHook {
    fn on_failure(&self, stage: Stage, error: &AppError, created: &[RemoteRepositoryHandle]);
}
