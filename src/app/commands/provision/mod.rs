//! Provision command: create, materialize, and publish a workflow repository pair.

mod materialize;
mod publish;
mod repositories;

use std::path::PathBuf;

use tracing::{error, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, DESCRIPTOR_FILE, PipelineState, ProvisionConfig, README_FILE, RemoteRepositoryHandle,
    Stage,
};
use crate::ports::{CompensationHook, RegistryHost, RepositoryCloner, SourceControlHost};

pub use materialize::materialize;
pub use publish::publish;
pub use repositories::{create_registry_repository, create_source_repository};

/// Files rewritten locally and published back, in publication order.
pub const PUBLISHED_FILES: [&str; 2] = [DESCRIPTOR_FILE, README_FILE];

/// Result of a completed provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    pub state: PipelineState,
    pub source: RemoteRepositoryHandle,
    pub registry: RemoteRepositoryHandle,
    pub repository_dir: PathBuf,
    pub published: Vec<String>,
}

struct Run<'a> {
    state: PipelineState,
    created: Vec<RemoteRepositoryHandle>,
    hook: &'a dyn CompensationHook,
}

impl Run<'_> {
    fn stage<T>(
        &mut self,
        stage: Stage,
        action: impl FnOnce() -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        if !self.state.permits(stage) {
            return Err(AppError::StageOutOfOrder { stage });
        }

        info!(%stage, "stage started");
        match action() {
            Ok(value) => {
                self.state = self.state.advance();
                info!(%stage, "stage completed");
                Ok(value)
            }
            Err(source) => {
                self.state = self.state.fail(source.to_string());
                error!(%stage, error = %source, "stage failed");
                self.hook.on_failure(stage, &source, &self.created);
                Err(AppError::StageFailed { stage, source: Box::new(source) })
            }
        }
    }
}

/// Execute the provisioning pipeline.
///
/// Stages run strictly in order and the first failure halts the run. Remote
/// repositories created before a failure are not removed; they are handed to
/// the context's compensation hook instead.
pub fn execute<S, R, C>(
    ctx: &AppContext<S, R, C>,
    config: &ProvisionConfig,
) -> Result<ProvisionOutcome, AppError>
where
    S: SourceControlHost,
    R: RegistryHost,
    C: RepositoryCloner,
{
    let request = &config.request;
    let mut run = Run { state: PipelineState::Start, created: Vec::new(), hook: ctx.compensation() };

    let source =
        run.stage(Stage::SourceRepository, || create_source_repository(ctx.source(), request))?;
    run.created.push(source.clone());

    let registry =
        run.stage(Stage::RegistryRepository, || create_registry_repository(ctx.registry(), request))?;
    run.created.push(registry.clone());

    let repository_dir = run.stage(Stage::Materialization, || {
        materialize(ctx.cloner(), request, &config.source.web_url, &config.general.clone_dir)
    })?;

    let published = run.stage(Stage::Publication, || {
        publish(ctx.source(), request, &repository_dir, &PUBLISHED_FILES)
    })?;

    Ok(ProvisionOutcome { state: run.state, source, registry, repository_dir, published })
}
