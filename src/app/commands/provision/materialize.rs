use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use crate::domain::addresses::clone_address;
use crate::domain::descriptor::readme_content;
use crate::domain::{
    AppError, DESCRIPTOR_FILE, Descriptor, MaterializeStep, ProvisioningRequest, README_FILE,
};
use crate::ports::RepositoryCloner;

fn step<T>(
    which: MaterializeStep,
    action: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    debug!(step = which.number(), label = %which, "materialize step");
    action().map_err(|source| AppError::MaterializationStep { step: which, source: Box::new(source) })
}

/// Clone the new repository under `clone_root` and rewrite its descriptor and README.
///
/// Steps run strictly in order; the first failure stops the stage and no
/// later file is written. Returns the local working copy.
pub fn materialize<C: RepositoryCloner>(
    cloner: &C,
    request: &ProvisioningRequest,
    web_url: &Url,
    clone_root: &Path,
) -> Result<PathBuf, AppError> {
    let local_dir = clone_root.join(&request.name);
    let descriptor_path = local_dir.join(DESCRIPTOR_FILE);

    step(MaterializeStep::Clone, || {
        fs::create_dir_all(clone_root)?;
        let address = clone_address(web_url, &request.owner, &request.name)?;
        cloner.clone_repository(address.as_str(), clone_root)
    })?;

    let mut descriptor = step(MaterializeStep::LoadDescriptor, || Descriptor::read_from(&descriptor_path))?;
    step(MaterializeStep::EditDescriptor, || descriptor.customize(request))?;
    step(MaterializeStep::WriteDescriptor, || descriptor.write_to(&descriptor_path))?;
    step(MaterializeStep::WriteReadme, || {
        fs::write(local_dir.join(README_FILE), readme_content(request))?;
        Ok(())
    })?;

    info!(path = %local_dir.display(), inputs = descriptor.inputs.len(), "working copy materialized");
    Ok(local_dir)
}
