//! Workflow descriptor (`descriptor.json`) model and editor.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::{AppError, ProvisioningRequest, WorkflowParameterSpec};

pub const DESCRIPTOR_FILE: &str = "descriptor.json";
pub const README_FILE: &str = "README.md";

/// Accepts `null` wherever the editor expects a value it will overwrite.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Container image reference, kept as the template wrote it apart from `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerImage(Map<String, Value>);

impl ContainerImage {
    /// Current image reference; empty when absent or `null`.
    pub fn image(&self) -> &str {
        self.0.get("image").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn set_image(&mut self, image: String) {
        self.0.insert("image".to_string(), Value::String(image));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// One descriptor input. Only `id` is interpreted; every other key, `null`
/// values included, is written back exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DescriptorInput {
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for DescriptorInput {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("id") {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(format!("input id must be a string, found {}", other)),
            None => Err("input is missing field `id`".to_string()),
        }
    }
}

impl From<DescriptorInput> for Map<String, Value> {
    fn from(input: DescriptorInput) -> Self {
        input.fields
    }
}

impl DescriptorInput {
    /// Input record injected for a workflow parameter.
    pub fn from_parameter(spec: &WorkflowParameterSpec) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::String(spec.input_id()));
        fields.insert("name".into(), Value::String(spec.name.clone()));
        fields.insert("description".into(), Value::String(spec.description.clone()));
        fields.insert("type".into(), Value::String(spec.value_type.as_str().to_string()));
        if let Some(default) = &spec.default_value {
            fields.insert("default-value".into(), default.clone());
        }
        fields.insert("value-key".into(), Value::String(spec.command_token()));
        fields.insert("optional".into(), Value::Bool(true));
        fields.insert("list".into(), Value::Bool(false));
        Self { fields }
    }

    pub fn id(&self) -> &str {
        self.fields.get("id").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "container-image")]
    pub container_image: ContainerImage,
    #[serde(rename = "command-line", default, deserialize_with = "null_as_default")]
    pub command_line: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<DescriptorInput>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Top-level key order of the source document.
    #[serde(skip)]
    key_order: Vec<String>,
}

impl Descriptor {
    pub fn parse(content: &str, origin: &Path) -> Result<Self, AppError> {
        let decode_error = |details: String| AppError::DecodeError {
            path: origin.display().to_string(),
            details,
        };

        let document: Map<String, Value> =
            serde_json::from_str(content).map_err(|e| decode_error(e.to_string()))?;
        let key_order = document.keys().cloned().collect();
        let mut descriptor: Descriptor = serde_json::from_value(Value::Object(document))
            .map_err(|e| decode_error(e.to_string()))?;
        descriptor.key_order = key_order;
        Ok(descriptor)
    }

    /// Read a descriptor file. A missing file is a decode failure too.
    pub fn read_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::DecodeError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Serialize with 4-space indentation, top-level keys in source order.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let encode_error = |e: serde_json::Error| AppError::EncodeError(e.to_string());

        let fields = match serde_json::to_value(self).map_err(encode_error)? {
            Value::Object(fields) => fields,
            other => return Err(AppError::EncodeError(format!("expected an object, found {}", other))),
        };
        let mut ordered = Map::new();
        for key in &self.key_order {
            if let Some(value) = fields.get(key) {
                ordered.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in &fields {
            if !ordered.contains_key(key) {
                ordered.insert(key.clone(), value.clone());
            }
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        ordered.serialize(&mut serializer).map_err(encode_error)?;
        String::from_utf8(buf).map_err(|e| AppError::EncodeError(e.to_string()))
    }

    pub fn write_to(&self, path: &Path) -> Result<(), AppError> {
        fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }

    pub fn has_input(&self, id: &str) -> bool {
        self.inputs.iter().any(|input| input.id() == id)
    }

    /// Append one input and one command-line token for a parameter.
    pub fn append_parameter(&mut self, spec: &WorkflowParameterSpec) -> Result<(), AppError> {
        let input = DescriptorInput::from_parameter(spec);
        if self.has_input(input.id()) {
            return Err(AppError::DuplicateInputId(input.id().to_string()));
        }

        let token = spec.command_token();
        if self.command_line.is_empty() {
            self.command_line = token;
        } else {
            self.command_line.push(' ');
            self.command_line.push_str(&token);
        }
        self.inputs.push(input);
        Ok(())
    }

    /// Apply request identity, image reference, and every parameter in order.
    pub fn customize(&mut self, request: &ProvisioningRequest) -> Result<(), AppError> {
        self.name = request.name.clone();
        self.description = request.description.clone();
        self.container_image.set_image(request.image_reference());
        for spec in &request.parameters {
            self.append_parameter(spec)?;
        }
        Ok(())
    }
}

/// README content: a heading with the workflow name, then the description.
pub fn readme_content(request: &ProvisioningRequest) -> String {
    format!("# {}\n{}", request.name, request.description)
}
