//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod gcs_adapter;
pub mod local_adapter;
pub mod web;

use std::sync::Arc;

use crate::domain::error::TavaultError;
use crate::ports::config_port::ConfigPort;
use crate::ports::storage_port::StoragePort;

/// Build the storage backend named by `[storage] backend` in the config.
pub fn storage_from_config(
    config: &dyn ConfigPort,
) -> Result<Arc<dyn StoragePort>, TavaultError> {
    let backend = config
        .get_string("storage", "backend")
        .unwrap_or_else(|| "gcs".to_string());

    match backend.as_str() {
        "gcs" => Ok(Arc::new(gcs_adapter::GcsAdapter::from_config(config)?)),
        "local" => Ok(Arc::new(local_adapter::LocalAdapter::from_config(config)?)),
        other => Err(TavaultError::ConfigInvalid {
            section: "storage".into(),
            key: "backend".into(),
            reason: format!("unknown backend '{other}' (expected gcs or local)"),
        }),
    }
}
