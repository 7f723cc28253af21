//! Docker Hub client using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::addresses::{registry_login_url, registry_repositories_url};
use crate::domain::{AppError, RegistryHostConfig, RemoteHost, RemoteRepositoryHandle};
use crate::ports::{RegistryHost, RegistryRepository, RegistryToken};

/// HTTP transport for the Docker Hub API.
#[derive(Clone)]
pub struct DockerHubHttpClient {
    username: String,
    password: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for DockerHubHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockerHubHttpClient")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl DockerHubHttpClient {
    pub fn new(config: &RegistryHostConfig, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            username: config.username.clone(),
            password: config.password.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Serialize)]
struct CreateRepositoryRequest<'a> {
    namespace: &'a str,
    name: &'a str,
    description: &'a str,
    full_description: &'a str,
    is_private: bool,
}

#[derive(Debug, Deserialize)]
struct CreatedRepository {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
}

impl RegistryHost for DockerHubHttpClient {
    fn login(&self) -> Result<RegistryToken, AppError> {
        let url = registry_login_url(&self.api_url)?;
        debug!(%url, "logging in to registry");

        let response = self
            .client
            .post(url)
            .json(&LoginRequest { username: &self.username, password: &self.password })
            .send()
            .map_err(|e| AppError::AuthenticationFailure {
                status: None,
                payload: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status != StatusCode::OK {
            return Err(AppError::AuthenticationFailure {
                status: Some(status.as_u16()),
                payload: body_text,
            });
        }

        let login: LoginResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::AuthenticationFailure {
                status: Some(status.as_u16()),
                payload: format!("Failed to parse response: {}", e),
            })?;
        Ok(RegistryToken(login.token))
    }

    fn create_repository(
        &self,
        token: &RegistryToken,
        repository: &RegistryRepository,
    ) -> Result<RemoteRepositoryHandle, AppError> {
        let url = registry_repositories_url(&self.api_url)?;
        debug!(%url, namespace = %repository.namespace, name = %repository.name, "creating registry repository");

        let body = CreateRepositoryRequest {
            namespace: &repository.namespace,
            name: &repository.name,
            description: &repository.description,
            full_description: &repository.description,
            is_private: repository.is_private,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&token.0)
            .json(&body)
            .send()
            .map_err(|e| AppError::RemoteCreationFailure {
                host: RemoteHost::Registry,
                status: None,
                payload: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status != StatusCode::CREATED {
            return Err(AppError::RemoteCreationFailure {
                host: RemoteHost::Registry,
                status: Some(status.as_u16()),
                payload: body_text,
            });
        }

        let created = serde_json::from_str::<CreatedRepository>(&body_text).ok();
        let name = created.as_ref().map_or_else(|| repository.name.clone(), |repo| repo.name.clone());
        let namespace = created
            .and_then(|repo| repo.namespace)
            .unwrap_or_else(|| repository.namespace.clone());

        Ok(RemoteRepositoryHandle {
            host: RemoteHost::Registry,
            full_name: format!("{}/{}", namespace, name),
            name,
            id: None,
        })
    }
}
