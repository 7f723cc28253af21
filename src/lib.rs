//! wfseed: provision a workflow's source repository and container registry
//! repository from a template, then publish its customized descriptor.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{DockerHubHttpClient, GitCommandCloner, GitHubHttpClient};
use app::{
    AppContext,
    commands::{check as check_command, provision as provision_command},
    config::load_config,
};

pub use app::commands::check::{PlannedInput, ProvisionPlan};
pub use app::commands::provision::ProvisionOutcome;
pub use domain::{AppError, ProvisionConfig, Stage};

/// Run the full provisioning pipeline for the configuration at `config_path`.
pub fn provision(config_path: &Path) -> Result<ProvisionOutcome, AppError> {
    let config = load_config(config_path)?;
    let timeout = config.general.timeout_secs;
    let ctx = AppContext::new(
        GitHubHttpClient::new(&config.source, timeout)?,
        DockerHubHttpClient::new(&config.registry, timeout)?,
        GitCommandCloner,
    );

    let outcome = provision_command::execute(&ctx, &config)?;
    println!("✅ Created repository {} from template {}", outcome.source.full_name, config.request.template.name);
    println!("✅ Created registry repository {}", outcome.registry.full_name);
    println!("✅ Customized {}", outcome.repository_dir.display());
    for file in &outcome.published {
        println!("✅ Published {}", file);
    }
    Ok(outcome)
}

/// Validate the configuration at `config_path` and print what a run would do.
pub fn check(config_path: &Path) -> Result<ProvisionPlan, AppError> {
    let config = load_config(config_path)?;
    let plan = check_command::execute(&config)?;

    println!("✅ Configuration is valid: {}", config_path.display());
    println!("  generate:   POST {}", plan.generate_url);
    println!("  repository: {}", plan.source_repository);
    println!("  clone:      {} -> {}", plan.clone_address, plan.repository_dir.display());
    println!("  registry:   POST {} ({})", plan.registry_url, plan.image_reference);
    for input in &plan.inputs {
        println!("  input:      {} ({})", input.id, input.command_token);
    }
    for url in &plan.published {
        println!("  publish:    PUT {}", url);
    }
    Ok(plan)
}
