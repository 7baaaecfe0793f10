// Infrastructure layer: live adapters behind the application ports.

pub mod audit_store;
pub mod http_source;
pub mod mailgun;
pub mod object_store;

pub use audit_store::RestAuditLog;
pub use http_source::HttpArtifactSource;
pub use mailgun::MailgunNotifier;
pub use object_store::ObjectStorageStore;
