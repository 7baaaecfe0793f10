use async_trait::async_trait;
use futures::TryStreamExt;

use crate::app::ports::{ArtifactSource, ByteStream};
use crate::error::{RelayError, Result};

/// Fetches submission artifacts over HTTP. The response body is exposed as
/// a chunk stream rather than buffered, so arbitrarily large artifacts
/// stay within bounded memory.
pub struct HttpArtifactSource;

#[async_trait]
impl ArtifactSource for HttpArtifactSource {
    async fn fetch(&self, url: &str) -> Result<ByteStream> {
        let resp = reqwest::Client::new().get(url).send().await?;
        if !resp.status().is_success() {
            return Err(RelayError::Transfer(format!(
                "source responded with status {}",
                resp.status()
            )));
        }
        let stream = resp
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        Ok(Box::pin(stream))
    }
}
