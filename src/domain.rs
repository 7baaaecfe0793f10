use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject line used for every non-success outcome email.
pub const FAILURE_SUBJECT: &str = "Assignment Submission Failed";
/// Subject line used when the artifact lands in storage.
pub const SUCCESS_SUBJECT: &str = "Assignment Submission Successful";
/// Fixed reason attached to submissions whose URL does not reference a zip file.
pub const VALIDATION_MESSAGE: &str = "invalid submission URL, must reference a zip file";

/// Status literal carried by the triggering notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
    Successful,
    Failed,
    /// Any literal this relay does not recognize. Treated like Pending:
    /// only `Failed` short-circuits the pipeline.
    #[serde(other)]
    Unknown,
}

impl SubmissionStatus {
    /// The wire literal, used when recording delivery status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::Successful => "Successful",
            SubmissionStatus::Failed => "Failed",
            SubmissionStatus::Unknown => "Unknown",
        }
    }
}

/// One assignment submission as described by the triggering notification.
/// Immutable once decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionEvent {
    pub submission_url: String,
    pub email: String,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub log_message: Option<String>,
    pub assignment_id: String,
}

/// Fresh per-invocation identifier, used for audit correlation and for
/// keeping concurrent submissions from colliding on a storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Destination key for one artifact inside the storage bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTarget {
    pub key: String,
}

impl TransferTarget {
    /// Key layout: `{email}/{assignment_id}/{submission_id}/{file_name}`,
    /// where the file name is the last path segment of the submission URL.
    pub fn for_submission(event: &SubmissionEvent, id: &SubmissionId) -> Self {
        let file_name = event
            .submission_url
            .rsplit('/')
            .next()
            .unwrap_or(event.submission_url.as_str());
        Self {
            key: format!(
                "{}/{}/{}/{}",
                event.email, event.assignment_id, id, file_name
            ),
        }
    }
}

/// Append-only audit row describing one invocation's outcome.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRecord {
    #[serde(rename = "submissionId")]
    pub submission_id: String,
    pub email: String,
    pub status: String,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
    pub timestamp: String,
}

impl DeliveryRecord {
    pub fn new(id: &SubmissionId, email: &str, status: &str, error_message: &str) -> Self {
        Self {
            submission_id: id.to_string(),
            email: email.to_string(),
            status: status.to_string(),
            error_message: error_message.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Terminal classification of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The upstream submission system already marked the submission failed;
    /// the detail is its forwarded log message.
    UpstreamFailure { detail: String },
    /// The submission URL does not reference a zip archive.
    ValidationFailure,
    /// The artifact copy failed partway through.
    TransferFailed { detail: String },
    /// The artifact landed in storage at `bucket`/`key`.
    Success { bucket: String, key: String },
}

impl Outcome {
    pub fn subject(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => SUCCESS_SUBJECT,
            _ => FAILURE_SUBJECT,
        }
    }

    /// Plain-text email body for this outcome.
    pub fn body(&self, event: &SubmissionEvent) -> String {
        match self {
            Outcome::UpstreamFailure { detail } => format!(
                "You failed to submit your assignment {}. {}",
                event.assignment_id, detail
            ),
            Outcome::ValidationFailure => format!(
                "You failed to submit your assignment {}: {}.",
                event.assignment_id, VALIDATION_MESSAGE
            ),
            Outcome::TransferFailed { detail } => format!(
                "You failed to submit your assignment {}. The submission could not be transferred: {}",
                event.assignment_id, detail
            ),
            Outcome::Success { bucket, key } => format!(
                "You successfully submitted the assignment \"{}\". It is uploaded to the storage path {}/{}.",
                event.assignment_id, bucket, key
            ),
        }
    }

    /// Status literal and error detail recorded in the delivery audit row.
    /// Successful deliveries record the event's own status literal.
    pub fn audit_fields(&self, event: &SubmissionEvent) -> (String, String) {
        match self {
            Outcome::UpstreamFailure { detail } => ("Failed".to_string(), detail.clone()),
            Outcome::ValidationFailure => {
                ("Failed".to_string(), "Invalid submission URL".to_string())
            }
            Outcome::TransferFailed { detail } => ("Failed".to_string(), detail.clone()),
            Outcome::Success { .. } => (event.status.as_str().to_string(), String::new()),
        }
    }

    /// One-line summary handed back to the invoking platform.
    pub fn describe(&self) -> String {
        match self {
            Outcome::UpstreamFailure { .. } => "reported upstream submission failure".to_string(),
            Outcome::ValidationFailure => "rejected submission with invalid URL".to_string(),
            Outcome::TransferFailed { detail } => {
                format!("artifact transfer failed: {}", detail)
            }
            Outcome::Success { bucket, key } => {
                format!("artifact relayed to {}/{}", bucket, key)
            }
        }
    }
}
