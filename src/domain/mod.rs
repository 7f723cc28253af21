pub mod addresses;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod pipeline;
pub mod request;

pub use config::{
    ConfigFormat, GeneralConfig, ProvisionConfig, RegistryHostConfig, SourceHostConfig,
};
pub use descriptor::{DESCRIPTOR_FILE, Descriptor, DescriptorInput, README_FILE};
pub use error::{AppError, RemoteHost};
pub use pipeline::{MaterializeStep, PipelineState, Stage};
pub use request::{
    ParameterType, ProvisioningRequest, TemplateRef, Visibility, WorkflowParameterSpec,
    derive_input_id,
};

/// Result of a successful repository creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepositoryHandle {
    pub host: RemoteHost,
    /// Repository name as confirmed by the host.
    pub name: String,
    /// Host-qualified identifier such as `owner/name` or `namespace/name`.
    pub full_name: String,
    /// Numeric id when the host assigns one.
    pub id: Option<u64>,
}

/// Host-issued version token for an existing remote file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIdentity(pub String);

impl ContentIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
