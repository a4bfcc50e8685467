#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;

use tavault::domain::error::TavaultError;
use tavault::ports::storage_port::StoragePort;

/// In-memory storage backend for tests. Listing order follows insertion
/// order so tests can exercise order-independence explicitly.
pub struct MockStoragePort {
    keys: Vec<String>,
    bodies: HashMap<String, Vec<u8>>,
    fetch_errors: HashMap<String, String>,
    list_error: Option<String>,
}

impl MockStoragePort {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            bodies: HashMap::new(),
            fetch_errors: HashMap::new(),
            list_error: None,
        }
    }

    pub fn with_object(mut self, key: &str, body: &str) -> Self {
        self.keys.push(key.to_string());
        self.bodies.insert(key.to_string(), body.as_bytes().to_vec());
        self
    }

    /// Key appears in listings but every fetch of it fails.
    pub fn with_fetch_error(mut self, key: &str, reason: &str) -> Self {
        self.keys.push(key.to_string());
        self.fetch_errors.insert(key.to_string(), reason.to_string());
        self
    }

    pub fn with_list_error(mut self, reason: &str) -> Self {
        self.list_error = Some(reason.to_string());
        self
    }
}

#[async_trait]
impl StoragePort for MockStoragePort {
    async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>, TavaultError> {
        if let Some(reason) = &self.list_error {
            return Err(TavaultError::Storage {
                context: format!("listing {prefix}"),
                reason: reason.clone(),
            });
        }
        Ok(self
            .keys
            .iter()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn fetch_object(&self, key: &str) -> Result<Vec<u8>, TavaultError> {
        if let Some(reason) = self.fetch_errors.get(key) {
            return Err(TavaultError::Storage {
                context: format!("fetching {key}"),
                reason: reason.clone(),
            });
        }
        self.bodies
            .get(key)
            .cloned()
            .ok_or_else(|| TavaultError::Storage {
                context: format!("fetching {key}"),
                reason: "object not found".to_string(),
            })
    }
}
