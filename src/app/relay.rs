use tracing::{error, info, warn};

use crate::app::ports::{ArtifactSource, ArtifactStore, AuditLog, Notifier};
use crate::domain::{
    DeliveryRecord, Outcome, SubmissionEvent, SubmissionId, SubmissionStatus, TransferTarget,
};
use crate::error::{RelayError, Result};

/// Validator decision for one decoded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Triage {
    /// Short-circuit straight to reporting with the given outcome.
    Reject(Outcome),
    /// Proceed to the artifact transfer.
    Proceed,
}

/// Pure decision over the decoded event; no side effects. Only a `Failed`
/// status short-circuits — Pending and unrecognized statuses fall through
/// to the transfer when the URL is valid.
pub fn triage(event: &SubmissionEvent) -> Triage {
    if event.status == SubmissionStatus::Failed {
        return Triage::Reject(Outcome::UpstreamFailure {
            detail: event.log_message.clone().unwrap_or_default(),
        });
    }
    if !event.submission_url.ends_with(".zip") {
        return Triage::Reject(Outcome::ValidationFailure);
    }
    Triage::Proceed
}

/// Result handed back to the invoking platform for its own logging.
#[derive(Debug)]
pub struct InvocationReport {
    pub outcome: Outcome,
    pub message: String,
}

/// The relay pipeline: triage, transfer, report. Collaborators are injected
/// as capability ports so tests can substitute in-memory fakes.
pub struct SubmissionRelay {
    source: Box<dyn ArtifactSource>,
    store: Box<dyn ArtifactStore>,
    notifier: Box<dyn Notifier>,
    audit: Box<dyn AuditLog>,
    bucket: String,
    strict_audit: bool,
}

impl SubmissionRelay {
    pub fn new(
        source: Box<dyn ArtifactSource>,
        store: Box<dyn ArtifactStore>,
        notifier: Box<dyn Notifier>,
        audit: Box<dyn AuditLog>,
        bucket: String,
    ) -> Self {
        Self {
            source,
            store,
            notifier,
            audit,
            bucket,
            strict_audit: false,
        }
    }

    /// Escalate delivery-record write failures instead of swallowing them.
    pub fn with_strict_audit(mut self, strict: bool) -> Self {
        self.strict_audit = strict;
        self
    }

    /// Runs one invocation for an already-decoded event. Every path sends
    /// exactly one outcome email and attempts exactly one delivery record.
    pub async fn handle(&self, event: &SubmissionEvent) -> Result<InvocationReport> {
        let submission_id = SubmissionId::generate();
        info!(%submission_id, assignment = %event.assignment_id, "processing submission");

        let outcome = match triage(event) {
            Triage::Reject(outcome) => {
                warn!(%submission_id, ?outcome, "submission rejected before transfer");
                outcome
            }
            Triage::Proceed => self.transfer(event, &submission_id).await,
        };

        self.report(event, &submission_id, &outcome).await?;
        Ok(InvocationReport {
            message: outcome.describe(),
            outcome,
        })
    }

    /// Streams the artifact from the submission URL into storage in a
    /// single pass. Failures become a `TransferFailed` outcome, not an
    /// error: they still get reported downstream.
    async fn transfer(&self, event: &SubmissionEvent, id: &SubmissionId) -> Outcome {
        let target = TransferTarget::for_submission(event, id);
        info!(%id, key = %target.key, "starting artifact transfer");

        let result = async {
            let stream = self.source.fetch(&event.submission_url).await?;
            self.store.write(&target.key, stream).await
        }
        .await;

        match result {
            Ok(()) => {
                info!(%id, key = %target.key, "artifact transfer complete");
                Outcome::Success {
                    bucket: self.bucket.clone(),
                    key: target.key,
                }
            }
            Err(e) => {
                error!(%id, error = %e, "artifact transfer failed");
                Outcome::TransferFailed {
                    detail: e.to_string(),
                }
            }
        }
    }

    /// Sends the outcome email and appends the delivery record. The record
    /// write is attempted independently of the email result. The email
    /// failure is the invocation's failure; the audit failure is logged and
    /// swallowed unless strict audit is enabled.
    async fn report(
        &self,
        event: &SubmissionEvent,
        id: &SubmissionId,
        outcome: &Outcome,
    ) -> Result<()> {
        let sent = self
            .notifier
            .send(&event.email, outcome.subject(), &outcome.body(event))
            .await;

        let (status, error_message) = outcome.audit_fields(event);
        let record = DeliveryRecord::new(id, &event.email, &status, &error_message);
        let appended = self.audit.append(&record).await;

        if let Err(e) = sent {
            error!(%id, error = %e, "outcome email failed");
            return Err(RelayError::Notify(e.to_string()));
        }
        match appended {
            Ok(()) => info!(%id, "recorded delivery status"),
            Err(e) => {
                error!(%id, error = %e, "failed to record delivery status");
                if self.strict_audit {
                    return Err(RelayError::Audit(e.to_string()));
                }
            }
        }
        Ok(())
    }
}
