use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::RepositoryCloner;

/// Clones with the `git` CLI so the user's credential helpers apply.
#[derive(Debug, Clone, Default)]
pub struct GitCommandCloner;

impl GitCommandCloner {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryCloner for GitCommandCloner {
    fn clone_repository(&self, address: &str, workdir: &Path) -> Result<(), AppError> {
        debug!(address, workdir = %workdir.display(), "git clone");

        let output = Command::new("git")
            .args(["clone", address])
            .current_dir(workdir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| AppError::CloneFailure {
                address: address.to_string(),
                exit_code: None,
                details: format!("Failed to execute git: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CloneFailure {
                address: address.to_string(),
                exit_code: output.status.code(),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
