use async_trait::async_trait;

use crate::app::ports::{ArtifactStore, ByteStream};
use crate::config::RelayConfig;
use crate::error::{RelayError, Result};

/// Writes artifacts to the storage service's object endpoint:
/// `PUT {base}/storage/v1/object/{bucket}/{key}?upsert=true`. The incoming
/// stream is wrapped directly into the request body, so bytes are piped
/// source-to-destination in a single pass with the HTTP stack's own
/// backpressure.
pub struct ObjectStorageStore {
    base_url: String,
    service_key: String,
    bucket: String,
}

impl ObjectStorageStore {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            base_url: config.storage_url.trim_end_matches('/').to_string(),
            service_key: config.storage_key.clone(),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ArtifactStore for ObjectStorageStore {
    async fn write(&self, key: &str, stream: ByteStream) -> Result<()> {
        let endpoint = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, key
        );
        let resp = reqwest::Client::new()
            .put(&endpoint)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("apikey", self.service_key.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .query(&[("upsert", "true")])
            .body(reqwest::Body::wrap_stream(stream))
            .send()
            .await
            .map_err(|e| RelayError::Transfer(format!("storage write failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Transfer(format!(
                "storage write failed: {} - {}",
                status, body
            )));
        }
        Ok(())
    }
}
