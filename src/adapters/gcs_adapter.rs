//! Object-storage adapter over the GCS JSON API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::error::TavaultError;
use crate::ports::config_port::ConfigPort;
use crate::ports::storage_port::StoragePort;

const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";

/// Environment variable holding an optional OAuth bearer token. Public
/// buckets need none.
pub const AUTH_TOKEN_ENV: &str = "STORAGE_AUTH_TOKEN";

/// Bucket-backed artifact source.
///
/// The `reqwest::Client` is built once here and reused for every request;
/// it is internally reference-counted and safe for concurrent use, so one
/// adapter instance serves all in-flight retrievals for the process
/// lifetime.
pub struct GcsAdapter {
    client: reqwest::Client,
    endpoint: String,
    bucket: String,
    auth_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ObjectItem>,
}

#[derive(Debug, Deserialize)]
struct ObjectItem {
    name: String,
}

impl GcsAdapter {
    pub fn new(bucket: impl Into<String>, auth_token: Option<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, bucket, auth_token)
    }

    /// Point the adapter at a non-default endpoint, e.g. a storage emulator.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            auth_token,
        }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, TavaultError> {
        let bucket = config
            .get_string("gcs", "bucket")
            .ok_or_else(|| TavaultError::ConfigMissing {
                section: "gcs".into(),
                key: "bucket".into(),
            })?;
        let endpoint = config
            .get_string("gcs", "endpoint")
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let auth_token = std::env::var(AUTH_TOKEN_ENV).ok();
        Ok(Self::with_endpoint(endpoint, bucket, auth_token))
    }

    fn list_url(&self, prefix: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o?prefix={}&fields=items/name",
            self.endpoint,
            self.bucket,
            urlencoding::encode(prefix)
        )
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}?alt=media",
            self.endpoint,
            self.bucket,
            urlencoding::encode(key)
        )
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    fn storage_error(context: String, reason: impl ToString) -> TavaultError {
        TavaultError::Storage {
            context,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl StoragePort for GcsAdapter {
    async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>, TavaultError> {
        let context = || format!("listing {prefix}");
        let response = self
            .get(&self.list_url(prefix))
            .send()
            .await
            .map_err(|e| Self::storage_error(context(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::storage_error(
                context(),
                format!("unexpected status {status}"),
            ));
        }

        let listing: ListResponse = response
            .json()
            .await
            .map_err(|e| Self::storage_error(context(), e))?;
        Ok(listing.items.into_iter().map(|item| item.name).collect())
    }

    async fn fetch_object(&self, key: &str) -> Result<Vec<u8>, TavaultError> {
        let context = || format!("fetching {key}");
        let response = self
            .get(&self.object_url(key))
            .send()
            .await
            .map_err(|e| Self::storage_error(context(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::storage_error(
                context(),
                format!("unexpected status {status}"),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::storage_error(context(), e))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_encodes_the_prefix() {
        let adapter = GcsAdapter::new("ta-artifacts", None);
        assert_eq!(
            adapter.list_url("daily/2024-05-01/ABC"),
            "https://storage.googleapis.com/storage/v1/b/ta-artifacts/o\
             ?prefix=daily%2F2024-05-01%2FABC&fields=items/name"
        );
    }

    #[test]
    fn object_url_encodes_the_key_and_requests_media() {
        let adapter = GcsAdapter::new("ta-artifacts", None);
        assert_eq!(
            adapter.object_url("daily/2024-05-01/ABC/signals_0900.json"),
            "https://storage.googleapis.com/storage/v1/b/ta-artifacts/o/\
             daily%2F2024-05-01%2FABC%2Fsignals_0900.json?alt=media"
        );
    }

    #[test]
    fn custom_endpoint_drops_trailing_slash() {
        let adapter = GcsAdapter::with_endpoint("http://localhost:4443/", "b", None);
        assert!(adapter.list_url("p").starts_with("http://localhost:4443/storage/v1/b/b/o?"));
    }

    #[test]
    fn empty_listing_deserializes_without_items_field() {
        let listing: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(listing.items.is_empty());
    }

    #[test]
    fn listing_deserializes_object_names() {
        let listing: ListResponse = serde_json::from_str(
            r#"{"items":[{"name":"daily/2024-05-01/ABC/signals_0900.json"}]}"#,
        )
        .unwrap();
        assert_eq!(listing.items[0].name, "daily/2024-05-01/ABC/signals_0900.json");
    }
}
