//! Artifact storage port trait.

use async_trait::async_trait;

use crate::domain::error::TavaultError;

/// Read-only access to the artifact store. Implementations must be safe to
/// share across concurrent requests behind an `Arc`, so the trait carries
/// `Send + Sync` itself.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// List every object key beginning with `prefix`. No ordering is
    /// guaranteed. An unknown prefix yields an empty listing, not an error.
    async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>, TavaultError>;

    /// Fetch the full object bytes at `key`.
    async fn fetch_object(&self, key: &str) -> Result<Vec<u8>, TavaultError>;
}
