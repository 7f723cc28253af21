//! Check command: validate configuration and describe the provisioning plan
//! without contacting any host.

use std::path::PathBuf;

use url::Url;

use crate::app::commands::provision::PUBLISHED_FILES;
use crate::domain::addresses::{
    clone_address, contents_url, registry_repositories_url, template_generate_url,
};
use crate::domain::{AppError, ProvisionConfig};

/// One descriptor input the run will append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedInput {
    pub id: String,
    pub command_token: String,
}

/// Everything a provisioning run would touch.
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub generate_url: Url,
    pub source_repository: String,
    pub clone_address: Url,
    pub registry_url: Url,
    pub image_reference: String,
    pub repository_dir: PathBuf,
    pub inputs: Vec<PlannedInput>,
    pub published: Vec<Url>,
}

/// Build the plan for a validated configuration.
pub fn execute(config: &ProvisionConfig) -> Result<ProvisionPlan, AppError> {
    let request = &config.request;
    let source = &config.source;

    let published = PUBLISHED_FILES
        .iter()
        .map(|file| contents_url(&source.api_url, &request.owner, &request.name, file))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProvisionPlan {
        generate_url: template_generate_url(
            &source.api_url,
            &request.template.owner,
            &request.template.name,
        )?,
        source_repository: format!("{}/{}", request.owner, request.name),
        clone_address: clone_address(&source.web_url, &request.owner, &request.name)?,
        registry_url: registry_repositories_url(&config.registry.api_url)?,
        image_reference: request.image_reference(),
        repository_dir: config.repository_dir(),
        inputs: request
            .parameters
            .iter()
            .map(|spec| PlannedInput { id: spec.input_id(), command_token: spec.command_token() })
            .collect(),
        published,
    })
}
