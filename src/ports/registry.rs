//! Container registry port definition.

use std::fmt;

use crate::domain::{AppError, RemoteRepositoryHandle};

/// Short-lived bearer token returned by registry login.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryToken(pub String);

impl fmt::Debug for RegistryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RegistryToken([REDACTED])")
    }
}

/// Repository to create in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRepository {
    pub namespace: String,
    /// Already lower-cased.
    pub name: String,
    pub description: String,
    pub is_private: bool,
}

/// Port for registry host operations.
pub trait RegistryHost {
    /// Exchange configured credentials for a bearer token.
    fn login(&self) -> Result<RegistryToken, AppError>;

    /// Create a repository using a token from `login`.
    fn create_repository(
        &self,
        token: &RegistryToken,
        repository: &RegistryRepository,
    ) -> Result<RemoteRepositoryHandle, AppError>;
}
