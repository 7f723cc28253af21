//! Provisioning configuration.

mod parse;

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::domain::ProvisioningRequest;

pub use parse::{ConfigFormat, parse_config_content};

/// Source-control host endpoint and basic-auth credentials.
#[derive(Clone)]
pub struct SourceHostConfig {
    pub username: String,
    pub token: String,
    /// REST API base.
    pub api_url: Url,
    /// Web base used for clone addresses.
    pub web_url: Url,
}

impl fmt::Debug for SourceHostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceHostConfig")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("web_url", &self.web_url)
            .finish()
    }
}

/// Registry host endpoint and login credentials.
#[derive(Clone)]
pub struct RegistryHostConfig {
    pub username: String,
    pub password: String,
    pub api_url: Url,
}

impl fmt::Debug for RegistryHostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryHostConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Directory the new repository is cloned into.
    pub clone_dir: PathBuf,
    /// HTTP transport timeout.
    pub timeout_secs: u64,
}

/// Validated, immutable configuration for one provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub source: SourceHostConfig,
    pub registry: RegistryHostConfig,
    pub request: ProvisioningRequest,
    pub general: GeneralConfig,
}

impl ProvisionConfig {
    /// Local working copy of the provisioned repository.
    pub fn repository_dir(&self) -> PathBuf {
        self.general.clone_dir.join(&self.request.name)
    }
}
