use std::sync::Mutex;

use crate::domain::{AppError, RemoteHost, RemoteRepositoryHandle};
use crate::ports::{RegistryHost, RegistryRepository, RegistryToken};

/// In-memory registry counting logins and creation requests.
#[derive(Default)]
pub struct FakeRegistry {
    pub login_failure: Option<u16>,
    pub create_failure: Option<u16>,
    pub logins: Mutex<usize>,
    pub created: Mutex<Vec<RegistryRepository>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_login(status: u16) -> Self {
        Self { login_failure: Some(status), ..Self::default() }
    }

    pub fn failing_create(status: u16) -> Self {
        Self { create_failure: Some(status), ..Self::default() }
    }

    pub fn login_count(&self) -> usize {
        *self.logins.lock().unwrap()
    }

    pub fn create_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

impl RegistryHost for FakeRegistry {
    fn login(&self) -> Result<RegistryToken, AppError> {
        *self.logins.lock().unwrap() += 1;
        match self.login_failure {
            Some(status) => Err(AppError::AuthenticationFailure {
                status: Some(status),
                payload: r#"{"detail":"Incorrect authentication credentials"}"#.into(),
            }),
            None => Ok(RegistryToken("fake-token".into())),
        }
    }

    fn create_repository(
        &self,
        token: &RegistryToken,
        repository: &RegistryRepository,
    ) -> Result<RemoteRepositoryHandle, AppError> {
        assert_eq!(token.0, "fake-token", "creation must use the login token");
        self.created.lock().unwrap().push(repository.clone());
        if let Some(status) = self.create_failure {
            return Err(AppError::RemoteCreationFailure {
                host: RemoteHost::Registry,
                status: Some(status),
                payload: r#"{"message":"already exists"}"#.into(),
            });
        }
        Ok(RemoteRepositoryHandle {
            host: RemoteHost::Registry,
            name: repository.name.clone(),
            full_name: format!("{}/{}", repository.namespace, repository.name),
            id: None,
        })
    }
}
