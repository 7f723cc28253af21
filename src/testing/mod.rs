mod fake_cloner;
mod fake_registry;
mod fake_source_control;

pub use fake_cloner::FakeCloner;
pub use fake_registry::FakeRegistry;
pub use fake_source_control::FakeSourceControl;
pub use recording_hook::RecordingHook;

use crate::domain::{ParameterType, ProvisioningRequest, TemplateRef, Visibility, WorkflowParameterSpec};

/// Descriptor shaped like a freshly generated template repository.
pub const TEMPLATE_DESCRIPTOR: &str = r#"{
    "name": "template",
    "description": "placeholder",
    "tool-version": "0.1.0",
    "container-image": {"type": "docker", "image": "placeholder/template"},
    "command-line": "run.sh",
    "inputs": []
}"#;

/// Request `acme/Wf1` from template `tmpl`, registry namespace `acmehub`.
pub fn sample_request(parameter_names: &[&str]) -> ProvisioningRequest {
    ProvisioningRequest {
        owner: "acme".into(),
        namespace: "acmehub".into(),
        name: "Wf1".into(),
        description: "Example workflow".into(),
        visibility: Visibility::Public,
        template: TemplateRef { owner: "acme".into(), name: "tmpl".into() },
        parameters: parameter_names
            .iter()
            .map(|name| WorkflowParameterSpec {
                name: name.to_string(),
                description: format!("{} parameter", name),
                default_value: None,
                value_type: ParameterType::String,
            })
            .collect(),
    }
}
