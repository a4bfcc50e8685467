//! Local-filesystem artifact source.
//!
//! Serves the same logical namespace as the bucket-backed adapter from a
//! directory tree: the object key `daily/<date>/<symbol>/<file>` maps to
//! that relative path under the configured root.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::error::TavaultError;
use crate::ports::config_port::ConfigPort;
use crate::ports::storage_port::StoragePort;

#[derive(Debug)]
pub struct LocalAdapter {
    root: PathBuf,
}

impl LocalAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, TavaultError> {
        let root = config
            .get_string("local", "root")
            .ok_or_else(|| TavaultError::ConfigMissing {
                section: "local".into(),
                key: "root".into(),
            })?;
        Ok(Self::new(PathBuf::from(root)))
    }
}

#[async_trait]
impl StoragePort for LocalAdapter {
    async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>, TavaultError> {
        // Retrieval prefixes name the leaf directory for one symbol and
        // day, so the listing reads that directory. A day the offline job
        // never wrote is an empty listing, not an error.
        let dir = self.root.join(prefix);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TavaultError::Storage {
                    context: format!("listing {prefix}"),
                    reason: e.to_string(),
                });
            }
        };

        let mut keys = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| TavaultError::Storage {
                context: format!("listing {prefix}"),
                reason: e.to_string(),
            })?;
            let Some(entry) = entry else { break };
            let file_type = entry.file_type().await.map_err(|e| TavaultError::Storage {
                context: format!("listing {prefix}"),
                reason: e.to_string(),
            })?;
            if file_type.is_file() {
                keys.push(format!("{prefix}/{}", entry.file_name().to_string_lossy()));
            }
        }
        Ok(keys)
    }

    async fn fetch_object(&self, key: &str) -> Result<Vec<u8>, TavaultError> {
        tokio::fs::read(self.root.join(key))
            .await
            .map_err(|e| TavaultError::Storage {
                context: format!("fetching {key}"),
                reason: e.to_string(),
            })
    }
}
