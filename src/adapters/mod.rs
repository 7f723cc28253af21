pub mod dockerhub_http;
pub mod git_command;
pub mod github_http;
pub mod orphan_report;

pub use dockerhub_http::DockerHubHttpClient;
pub use git_command::GitCommandCloner;
pub use github_http::GitHubHttpClient;
pub use orphan_report::ReportOrphans;

pub(crate) const USER_AGENT: &str = concat!("wfseed/", env!("CARGO_PKG_VERSION"));
