//! Decoding of the inbound trigger envelope into a typed submission event.

use serde::Deserialize;

use crate::domain::SubmissionEvent;
use crate::error::{RelayError, Result};

/// Outer notification wrapper delivered by the triggering system. The
/// submission descriptor is a JSON-encoded string nested inside the first
/// record's message field.
#[derive(Debug, Deserialize)]
struct TriggerEnvelope {
    #[serde(rename = "Records", default)]
    records: Vec<EnvelopeRecord>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeRecord {
    #[serde(rename = "Sns")]
    notification: NotificationBody,
}

#[derive(Debug, Deserialize)]
struct NotificationBody {
    #[serde(rename = "Message")]
    message: String,
}

/// Extracts and parses the nested submission message from a raw envelope.
/// No side effects; all failures surface as `RelayError::Decode`.
pub fn decode_event(raw: &str) -> Result<SubmissionEvent> {
    let envelope: TriggerEnvelope = serde_json::from_str(raw)
        .map_err(|e| RelayError::Decode(format!("invalid envelope JSON: {}", e)))?;
    let record = envelope
        .records
        .into_iter()
        .next()
        .ok_or_else(|| RelayError::Decode("envelope contains no records".to_string()))?;
    serde_json::from_str(&record.notification.message)
        .map_err(|e| RelayError::Decode(format!("invalid nested message JSON: {}", e)))
}
