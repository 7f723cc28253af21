use crate::adapters::ReportOrphans;
use crate::ports::{CompensationHook, RegistryHost, RepositoryCloner, SourceControlHost};

/// Application context holding dependencies for a provisioning run.
pub struct AppContext<S: SourceControlHost, R: RegistryHost, C: RepositoryCloner> {
    source: S,
    registry: R,
    cloner: C,
    compensation: Box<dyn CompensationHook>,
}

impl<S: SourceControlHost, R: RegistryHost, C: RepositoryCloner> AppContext<S, R, C> {
    /// Create a context that reports orphaned repositories on failure.
    pub fn new(source: S, registry: R, cloner: C) -> Self {
        Self { source, registry, cloner, compensation: Box::new(ReportOrphans) }
    }

    /// Replace the failure hook.
    pub fn with_compensation(mut self, hook: impl CompensationHook + 'static) -> Self {
        self.compensation = Box::new(hook);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn cloner(&self) -> &C {
        &self.cloner
    }

    pub fn compensation(&self) -> &dyn CompensationHook {
        self.compensation.as_ref()
    }
}
