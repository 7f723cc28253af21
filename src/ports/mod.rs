mod cloner;
mod compensation;
mod registry;
mod source_control;

pub use cloner::RepositoryCloner;
pub use compensation::CompensationHook;
pub use registry::{RegistryHost, RegistryRepository, RegistryToken};
pub use source_control::{ContentUpdate, SourceControlHost};
