use async_trait::async_trait;

use crate::app::ports::AuditLog;
use crate::config::RelayConfig;
use crate::domain::DeliveryRecord;
use crate::error::{RelayError, Result};

/// Appends delivery records through the storage service's REST table
/// endpoint: `POST {base}/rest/v1/{table}`.
pub struct RestAuditLog {
    base_url: String,
    service_key: String,
    table: String,
}

impl RestAuditLog {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            base_url: config.storage_url.trim_end_matches('/').to_string(),
            service_key: config.storage_key.clone(),
            table: config.audit_table.clone(),
        }
    }
}

#[async_trait]
impl AuditLog for RestAuditLog {
    async fn append(&self, record: &DeliveryRecord) -> Result<()> {
        let endpoint = format!("{}/rest/v1/{}", self.base_url, self.table);
        let resp = reqwest::Client::new()
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("apikey", self.service_key.clone())
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| RelayError::Audit(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Audit(format!(
                "audit store responded with {}: {}",
                status, body
            )));
        }
        Ok(())
    }
}
