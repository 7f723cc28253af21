use std::path::Path;

use crate::domain::AppError;

/// Port for cloning a remote repository.
pub trait RepositoryCloner {
    /// Clone `address` with `workdir` as the working directory, producing
    /// `workdir/<repository name>`.
    fn clone_repository(&self, address: &str, workdir: &Path) -> Result<(), AppError>;
}
