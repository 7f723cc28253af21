//! Host address construction.
//!
//! Every remote location is derived here from a base URL plus identifiers, so
//! adapters never format URLs by hand.

use url::Url;

use crate::domain::AppError;

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Validation(format!("URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `POST` target that generates a repository from `template_owner/template`.
pub fn template_generate_url(
    api_url: &Url,
    template_owner: &str,
    template: &str,
) -> Result<Url, AppError> {
    with_segments(api_url, &["repos", template_owner, template, "generate"])
}

/// Per-file content endpoint. Nested paths keep their `/` separators.
pub fn contents_url(api_url: &Url, owner: &str, name: &str, path: &str) -> Result<Url, AppError> {
    let mut segments = vec!["repos", owner, name, "contents"];
    segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
    with_segments(api_url, &segments)
}

/// Clone address `<web_url>/<owner>/<name>.git`.
pub fn clone_address(web_url: &Url, owner: &str, name: &str) -> Result<Url, AppError> {
    let repo = format!("{}.git", name);
    with_segments(web_url, &[owner, repo.as_str()])
}

pub fn registry_login_url(api_url: &Url) -> Result<Url, AppError> {
    with_segments(api_url, &["users", "login"])
}

/// Repository collection endpoint; the registry requires the trailing slash.
pub fn registry_repositories_url(api_url: &Url) -> Result<Url, AppError> {
    with_segments(api_url, &["repositories", ""])
}
