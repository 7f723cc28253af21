use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::{GeneralConfig, ProvisionConfig, RegistryHostConfig, SourceHostConfig};
use crate::domain::{
    AppError, ParameterType, ProvisioningRequest, TemplateRef, Visibility, WorkflowParameterSpec,
};

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.json` and `.yaml`/`.yml` are recognized; anything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDto {
    #[serde(alias = "gh_auth")]
    source: SourceDto,
    #[serde(alias = "dh_auth")]
    registry: RegistryDto,
    #[serde(alias = "params")]
    request: RequestDto,
    general: GeneralDto,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceDto {
    username: String,
    token: String,
    #[serde(default = "default_source_api_url")]
    api_url: String,
    #[serde(default = "default_source_web_url")]
    web_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryDto {
    username: String,
    password: String,
    #[serde(default = "default_registry_api_url")]
    api_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequestDto {
    #[serde(alias = "gh_owner")]
    owner: String,
    #[serde(alias = "dh_namespace")]
    namespace: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    private: bool,
    template: String,
    #[serde(default)]
    parameters: Vec<ParameterDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterDto {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "default-value")]
    default: Option<serde_json::Value>,
    #[serde(rename = "type", default = "default_parameter_type")]
    value_type: ParameterType,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeneralDto {
    #[serde(alias = "clonedir")]
    clone_dir: PathBuf,
    #[serde(default = "default_timeout")]
    timeout_secs: u64,
}

fn default_source_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_source_web_url() -> String {
    "https://github.com".to_string()
}

fn default_registry_api_url() -> String {
    "https://hub.docker.com/v2".to_string()
}

fn default_parameter_type() -> ParameterType {
    ParameterType::String
}

fn default_timeout() -> u64 {
    30
}

/// Parse and validate configuration content.
pub fn parse_config_content(
    content: &str,
    format: ConfigFormat,
) -> Result<ProvisionConfig, AppError> {
    let dto: ConfigDto = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    dto.validate()
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn parse_url(field: &str, value: &str) -> Result<Url, AppError> {
    let url = Url::parse(value)
        .map_err(|e| AppError::Validation(format!("{} is not a valid URL ({}): {}", field, value, e)))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Validation(format!("{} cannot be used as a base URL: {}", field, value)));
    }
    Ok(url)
}

fn validate_repository_name(name: &str) -> Result<(), AppError> {
    let valid = name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid || name == "." || name == ".." {
        return Err(AppError::Validation(format!(
            "request.name '{}' must contain only letters, digits, '-', '_' or '.'",
            name
        )));
    }
    Ok(())
}

impl ConfigDto {
    fn validate(self) -> Result<ProvisionConfig, AppError> {
        let source = SourceHostConfig {
            username: required("source.username", self.source.username)?,
            token: required("source.token", self.source.token)?,
            api_url: parse_url("source.api_url", &self.source.api_url)?,
            web_url: parse_url("source.web_url", &self.source.web_url)?,
        };

        let registry = RegistryHostConfig {
            username: required("registry.username", self.registry.username)?,
            password: required("registry.password", self.registry.password)?,
            api_url: parse_url("registry.api_url", &self.registry.api_url)?,
        };

        let request = self.request.validate()?;

        if self.general.clone_dir.as_os_str().is_empty() {
            return Err(AppError::Validation("general.clone_dir must not be empty".into()));
        }
        if self.general.timeout_secs == 0 {
            return Err(AppError::Validation(
                "general.timeout_secs must be greater than 0".into(),
            ));
        }
        let general =
            GeneralConfig { clone_dir: self.general.clone_dir, timeout_secs: self.general.timeout_secs };

        Ok(ProvisionConfig { source, registry, request, general })
    }
}

impl RequestDto {
    fn validate(self) -> Result<ProvisioningRequest, AppError> {
        let owner = required("request.owner", self.owner)?;
        let namespace = required("request.namespace", self.namespace)?;
        let name = required("request.name", self.name)?;
        validate_repository_name(&name)?;

        let template = TemplateRef::parse(&self.template, &owner).ok_or_else(|| {
            AppError::Validation(format!(
                "request.template '{}' must be 'name' or 'owner/name'",
                self.template
            ))
        })?;

        let mut seen = HashSet::new();
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for dto in self.parameters {
            let spec = WorkflowParameterSpec {
                name: required("request.parameters.name", dto.name)?,
                description: dto.description,
                default_value: dto.default,
                value_type: dto.value_type,
            };
            let id = spec.input_id();
            if !seen.insert(id.clone()) {
                return Err(AppError::Validation(format!(
                    "parameter '{}' derives input id '{}' which is already used",
                    spec.name, id
                )));
            }
            parameters.push(spec);
        }

        Ok(ProvisioningRequest {
            owner,
            namespace,
            name,
            description: self.description,
            visibility: Visibility::from(self.private),
            template,
            parameters,
        })
    }
}
