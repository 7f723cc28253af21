use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::RepositoryCloner;

/// Cloner that materializes a fixed file set instead of running git.
#[derive(Default)]
pub struct FakeCloner {
    pub files: Vec<(String, String)>,
    /// Exit code reported instead of cloning.
    pub failure_exit: Option<i32>,
    pub addresses: Mutex<Vec<String>>,
}

impl FakeCloner {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            files: files.iter().map(|(name, body)| (name.to_string(), body.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn failing(exit_code: i32) -> Self {
        Self { failure_exit: Some(exit_code), ..Self::default() }
    }

    pub fn addresses(&self) -> Vec<String> {
        self.addresses.lock().unwrap().clone()
    }
}

impl RepositoryCloner for FakeCloner {
    fn clone_repository(&self, address: &str, workdir: &Path) -> Result<(), AppError> {
        self.addresses.lock().unwrap().push(address.to_string());
        if let Some(code) = self.failure_exit {
            return Err(AppError::CloneFailure {
                address: address.to_string(),
                exit_code: Some(code),
                details: "fatal: repository not found".into(),
            });
        }

        let name = address.rsplit('/').next().unwrap_or(address).trim_end_matches(".git");
        let target = workdir.join(name);
        fs::create_dir_all(&target)?;
        for (file, body) in &self.files {
            fs::write(target.join(file), body)?;
        }
        Ok(())
    }
}
