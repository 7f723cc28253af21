use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use tracing::info;

use crate::domain::{AppError, ProvisioningRequest};
use crate::ports::{ContentUpdate, SourceControlHost};

/// Overwrite each file in the remote repository with its local content.
///
/// Files are published one at a time in the given order. The first failure
/// stops the stage; earlier writes stay applied.
pub fn publish<S: SourceControlHost>(
    host: &S,
    request: &ProvisioningRequest,
    local_dir: &Path,
    files: &[&str],
) -> Result<Vec<String>, AppError> {
    let mut published = Vec::with_capacity(files.len());
    for file in files {
        let identity = host.content_identity(&request.owner, &request.name, file)?;
        let bytes = fs::read(local_dir.join(file))?;
        let update = ContentUpdate {
            message: format!("Initial commit of {}", file),
            content: general_purpose::STANDARD.encode(bytes),
            identity,
        };
        host.update_content(&request.owner, &request.name, file, &update)?;
        info!(file = %file, "published");
        published.push(file.to_string());
    }
    Ok(published)
}
