use tracing::info;

use crate::domain::{AppError, ProvisioningRequest, RemoteRepositoryHandle};
use crate::ports::{RegistryHost, RegistryRepository, SourceControlHost};

/// Create the source repository from the request's template.
pub fn create_source_repository<S: SourceControlHost>(
    host: &S,
    request: &ProvisioningRequest,
) -> Result<RemoteRepositoryHandle, AppError> {
    let handle = host.generate_from_template(request)?;
    info!(repository = %handle.full_name, template = %request.template.name, "source repository created");
    Ok(handle)
}

/// Log in to the registry, then create the image repository.
///
/// No creation request is sent when login fails.
pub fn create_registry_repository<R: RegistryHost>(
    registry: &R,
    request: &ProvisioningRequest,
) -> Result<RemoteRepositoryHandle, AppError> {
    let token = registry.login()?;
    let repository = RegistryRepository {
        namespace: request.namespace.clone(),
        name: request.registry_name(),
        description: request.description.clone(),
        is_private: request.visibility.is_private(),
    };
    let handle = registry.create_repository(&token, &repository)?;
    info!(repository = %handle.full_name, "registry repository created");
    Ok(handle)
}
