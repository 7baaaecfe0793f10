use crate::error::{RelayError, Result};

/// Process-wide configuration, loaded once at startup. Missing required
/// variables are a startup error, never a per-event error.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the storage service.
    pub storage_url: String,
    /// Service credential for object and table writes.
    pub storage_key: String,
    /// Bucket receiving submitted artifacts.
    pub bucket: String,
    pub mailgun_api_key: String,
    pub mailgun_domain: String,
    /// Fixed sender identity for outcome emails.
    pub email_from: String,
    /// Table receiving delivery records.
    pub audit_table: String,
    /// When set, a failed delivery-record write fails the invocation
    /// instead of being logged and swallowed.
    pub strict_audit: bool,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            storage_url: required("RELAY_STORAGE_URL")?,
            storage_key: required("RELAY_STORAGE_KEY")?,
            bucket: required("RELAY_STORAGE_BUCKET")?,
            mailgun_api_key: required("MAILGUN_API_KEY")?,
            mailgun_domain: required("MAILGUN_DOMAIN")?,
            email_from: required("RELAY_EMAIL_FROM")?,
            audit_table: required("RELAY_AUDIT_TABLE")?,
            strict_audit: flag("RELAY_STRICT_AUDIT"),
        })
    }
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| {
        RelayError::Config(format!("missing required environment variable '{}'", name))
    })
}

fn flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
