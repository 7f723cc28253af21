//! GitHub REST client using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::addresses::{contents_url, template_generate_url};
use crate::domain::{
    AppError, ContentIdentity, ProvisioningRequest, RemoteHost, RemoteRepositoryHandle,
    SourceHostConfig,
};
use crate::ports::{ContentUpdate, SourceControlHost};

const TEMPLATE_ACCEPT: &str = "application/vnd.github.baptiste-preview+json";
const CONTENTS_ACCEPT: &str = "application/vnd.github.v3+json";

/// HTTP transport for the GitHub API.
///
/// One request per call; no retries.
#[derive(Clone)]
pub struct GitHubHttpClient {
    username: String,
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for GitHubHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubHttpClient")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GitHubHttpClient {
    pub fn new(config: &SourceHostConfig, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            username: config.username.clone(),
            token: config.token.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    owner: &'a str,
    name: &'a str,
    description: &'a str,
    private: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedRepository {
    name: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ContentMetadata {
    sha: String,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    message: &'a str,
    content: &'a str,
    sha: &'a str,
}

impl SourceControlHost for GitHubHttpClient {
    fn generate_from_template(
        &self,
        request: &ProvisioningRequest,
    ) -> Result<RemoteRepositoryHandle, AppError> {
        let url = template_generate_url(&self.api_url, &request.template.owner, &request.template.name)?;
        debug!(%url, "generating repository from template");

        let body = GenerateRequest {
            owner: &request.owner,
            name: &request.name,
            description: &request.description,
            private: request.visibility.is_private(),
        };

        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.token))
            .header(ACCEPT, TEMPLATE_ACCEPT)
            .json(&body)
            .send()
            .map_err(|e| AppError::RemoteCreationFailure {
                host: RemoteHost::SourceControl,
                status: None,
                payload: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status != StatusCode::CREATED {
            return Err(AppError::RemoteCreationFailure {
                host: RemoteHost::SourceControl,
                status: Some(status.as_u16()),
                payload: body_text,
            });
        }

        // 201 is the success signal; the body only refines the handle.
        let created = serde_json::from_str::<GeneratedRepository>(&body_text).ok();
        let name = created.as_ref().map_or_else(|| request.name.clone(), |repo| repo.name.clone());
        let full_name = created
            .as_ref()
            .and_then(|repo| repo.full_name.clone())
            .unwrap_or_else(|| format!("{}/{}", request.owner, name));

        Ok(RemoteRepositoryHandle {
            host: RemoteHost::SourceControl,
            name,
            full_name,
            id: created.and_then(|repo| repo.id),
        })
    }

    fn content_identity(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentIdentity, AppError> {
        let url = contents_url(&self.api_url, owner, repo, path)?;
        debug!(%url, "fetching content identity");

        let missing = |status: Option<u16>, payload: String| AppError::RemoteContentMissing {
            path: path.to_string(),
            status,
            payload,
        };

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.token))
            .header(ACCEPT, CONTENTS_ACCEPT)
            .send()
            .map_err(|e| missing(None, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(missing(Some(status.as_u16()), body_text));
        }

        let metadata: ContentMetadata = serde_json::from_str(&body_text).map_err(|e| {
            missing(Some(status.as_u16()), format!("Failed to parse response: {}", e))
        })?;
        Ok(ContentIdentity(metadata.sha))
    }

    fn update_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        update: &ContentUpdate,
    ) -> Result<(), AppError> {
        let url = contents_url(&self.api_url, owner, repo, path)?;
        debug!(%url, "updating content");

        let body = UpdateRequest {
            message: &update.message,
            content: &update.content,
            sha: update.identity.as_str(),
        };

        let response = self
            .client
            .put(url)
            .basic_auth(&self.username, Some(&self.token))
            .header(ACCEPT, CONTENTS_ACCEPT)
            .json(&body)
            .send()
            .map_err(|e| AppError::RemoteWriteFailure {
                path: path.to_string(),
                status: None,
                payload: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::RemoteWriteFailure {
                path: path.to_string(),
                status: Some(status.as_u16()),
                payload: response.text().unwrap_or_default(),
            });
        }
        Ok(())
    }
}
