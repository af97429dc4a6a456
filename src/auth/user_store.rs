// User lookup capability with in-memory and YAML-backed implementations

use crate::core::errors::StoreError;
use crate::core::models::UserRecord;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Read-only access to stored user credentials
///
/// `Ok(None)` means the email is unknown; `Err` means the store itself failed.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn lookup_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// In-memory user store keyed by email
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list of records; later duplicates replace earlier ones
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.email.clone(), record))
            .collect();
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn lookup_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(email).cloned())
    }
}

#[derive(Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: Vec<UserRecord>,
}

/// User store loaded once from a YAML file
///
/// Expected layout:
/// ```yaml
/// users:
///   - id: "u1"
///     email: "a@b.com"
///     passwordHash: "<64 hex chars>"
///     salt: "s1"
/// ```
#[derive(Debug, Clone)]
pub struct YamlUserStore {
    inner: InMemoryUserStore,
}

impl YamlUserStore {
    /// Load users from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Unavailable(format!("Failed to read users file {:?}: {}", path, e))
        })?;
        let store = Self::from_yaml_str(&content)?;
        info!(path = ?path, users = store.inner.len(), "Loaded user store from YAML");
        Ok(store)
    }

    /// Parse users from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, StoreError> {
        let file: UsersFile = serde_yaml::from_str(content)
            .map_err(|e| StoreError::Malformed(format!("Failed to parse users YAML: {}", e)))?;
        Ok(Self {
            inner: InMemoryUserStore::from_records(file.users),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl UserStore for YamlUserStore {
    async fn lookup_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.inner.lookup_user_by_email(email).await
    }
}
