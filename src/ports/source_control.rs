//! Source-control host port definition.

use crate::domain::{AppError, ContentIdentity, ProvisioningRequest, RemoteRepositoryHandle};

/// Content update submitted for one file.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    /// Commit message.
    pub message: String,
    /// Base64-encoded file bytes.
    pub content: String,
    /// Identity of the file being overwritten.
    pub identity: ContentIdentity,
}

/// Port for source-control host operations.
pub trait SourceControlHost {
    /// Generate `request.name` from the request's template repository.
    fn generate_from_template(
        &self,
        request: &ProvisioningRequest,
    ) -> Result<RemoteRepositoryHandle, AppError>;

    /// Fetch the current identity of an existing file.
    fn content_identity(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentIdentity, AppError>;

    /// Overwrite an existing file.
    fn update_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        update: &ContentUpdate,
    ) -> Result<(), AppError>;
}
