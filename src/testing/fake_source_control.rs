use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{AppError, ContentIdentity, ProvisioningRequest, RemoteHost, RemoteRepositoryHandle};
use crate::ports::{ContentUpdate, SourceControlHost};

/// In-memory source-control host recording every call in order.
#[derive(Default)]
pub struct FakeSourceControl {
    /// Status returned instead of 201 from template generation.
    pub generate_failure: Option<u16>,
    /// Files without a remote identity.
    pub missing_files: HashSet<String>,
    /// Files whose update is rejected.
    pub rejected_writes: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<(String, ContentUpdate)>>,
}

impl FakeSourceControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_generate(status: u16) -> Self {
        Self { generate_failure: Some(status), ..Self::default() }
    }

    pub fn missing(files: &[&str]) -> Self {
        Self { missing_files: files.iter().map(|f| f.to_string()).collect(), ..Self::default() }
    }

    pub fn rejecting(files: &[&str]) -> Self {
        Self { rejected_writes: files.iter().map(|f| f.to_string()).collect(), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

impl SourceControlHost for FakeSourceControl {
    fn generate_from_template(
        &self,
        request: &ProvisioningRequest,
    ) -> Result<RemoteRepositoryHandle, AppError> {
        self.calls.lock().unwrap().push(format!(
            "generate {}/{} -> {}/{}",
            request.template.owner, request.template.name, request.owner, request.name
        ));
        if let Some(status) = self.generate_failure {
            return Err(AppError::RemoteCreationFailure {
                host: RemoteHost::SourceControl,
                status: Some(status),
                payload: r#"{"message":"Repository creation failed."}"#.into(),
            });
        }
        Ok(RemoteRepositoryHandle {
            host: RemoteHost::SourceControl,
            name: request.name.clone(),
            full_name: format!("{}/{}", request.owner, request.name),
            id: Some(1),
        })
    }

    fn content_identity(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentIdentity, AppError> {
        self.calls.lock().unwrap().push(format!("identity {}/{}/{}", owner, repo, path));
        if self.missing_files.contains(path) {
            return Err(AppError::RemoteContentMissing {
                path: path.to_string(),
                status: Some(404),
                payload: r#"{"message":"Not Found"}"#.into(),
            });
        }
        Ok(ContentIdentity(format!("sha-{}", path)))
    }

    fn update_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        update: &ContentUpdate,
    ) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(format!("update {}/{}/{}", owner, repo, path));
        if self.rejected_writes.contains(path) {
            return Err(AppError::RemoteWriteFailure {
                path: path.to_string(),
                status: Some(409),
                payload: r#"{"message":"sha does not match"}"#.into(),
            });
        }
        self.updates.lock().unwrap().push((path.to_string(), update.clone()));
        Ok(())
    }
}
