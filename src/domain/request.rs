//! Provisioning request model.

use serde::{Deserialize, Serialize};

/// Declared value type of a workflow parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    #[serde(alias = "string")]
    String,
    #[serde(alias = "file")]
    File,
    #[serde(alias = "number")]
    Number,
    #[serde(alias = "flag")]
    Flag,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "String",
            ParameterType::File => "File",
            ParameterType::Number => "Number",
            ParameterType::Flag => "Flag",
        }
    }
}

/// One user-facing parameter injected into the workflow descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowParameterSpec {
    pub name: String,
    pub description: String,
    pub default_value: Option<serde_json::Value>,
    pub value_type: ParameterType,
}

impl WorkflowParameterSpec {
    /// Descriptor input id for this parameter.
    pub fn input_id(&self) -> String {
        derive_input_id(&self.name)
    }

    /// Command-line token appended for this parameter.
    pub fn command_token(&self) -> String {
        self.input_id().to_uppercase()
    }
}

/// Derive a descriptor input id from a parameter name: lower-cased, spaces
/// replaced with underscores.
pub fn derive_input_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl From<bool> for Visibility {
    fn from(private: bool) -> Self {
        if private { Visibility::Private } else { Visibility::Public }
    }
}

/// Template repository location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub owner: String,
    pub name: String,
}

impl TemplateRef {
    /// Parse `name` (owned by `default_owner`) or `owner/name`.
    pub fn parse(raw: &str, default_owner: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Some(Self { owner: owner.to_string(), name: name.to_string() })
            }
            Some(_) => None,
            None if raw.is_empty() => None,
            None => Some(Self { owner: default_owner.to_string(), name: raw.to_string() }),
        }
    }
}

/// Immutable input bundle shared read-only by every pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisioningRequest {
    /// Source-control owner (user or organization).
    pub owner: String,
    /// Registry namespace.
    pub namespace: String,
    /// Repository name on the source-control host.
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub template: TemplateRef,
    pub parameters: Vec<WorkflowParameterSpec>,
}

impl ProvisioningRequest {
    /// Registry repository name; registries normalize to lower case.
    pub fn registry_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// `<namespace>/<lowercased name>` image reference.
    pub fn image_reference(&self) -> String {
        format!("{}/{}", self.namespace, self.registry_name())
    }
}
