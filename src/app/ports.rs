use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::domain::DeliveryRecord;
use crate::error::Result;

/// Byte stream flowing from the artifact source into storage. Chunks are
/// pulled on demand, so the source is never read faster than the
/// destination accepts.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// Read side of the transfer: opens the submission URL as a byte stream.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ByteStream>;
}

/// Write side of the transfer: durable object storage.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn write(&self, key: &str, stream: ByteStream) -> Result<()>;
}

/// Outbound plain-text email gateway.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}

/// Append-only delivery audit trail.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn append(&self, record: &DeliveryRecord) -> Result<()>;
}
