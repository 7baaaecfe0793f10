use std::io::Read;

use anyhow::Result;
use tracing::{error, info};

use submission_relay::app::relay::SubmissionRelay;
use submission_relay::config::RelayConfig;
use submission_relay::envelope;
use submission_relay::infra::{HttpArtifactSource, MailgunNotifier, ObjectStorageStore, RestAuditLog};
use submission_relay::logging;

/// Runs one invocation: reads the trigger envelope from stdin, relays the
/// submission, and exits zero only when reporting succeeded.
#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    dotenv::dotenv().ok();

    let config = RelayConfig::from_env()?;

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;

    let event = envelope::decode_event(&raw)?;
    info!(assignment = %event.assignment_id, "decoded submission event");

    let relay = SubmissionRelay::new(
        Box::new(HttpArtifactSource),
        Box::new(ObjectStorageStore::new(&config)),
        Box::new(MailgunNotifier::new(&config)),
        Box::new(RestAuditLog::new(&config)),
        config.bucket.clone(),
    )
    .with_strict_audit(config.strict_audit);

    match relay.handle(&event).await {
        Ok(report) => {
            info!("invocation complete");
            println!("{}", report.message);
            Ok(())
        }
        Err(e) => {
            error!("invocation failed: {}", e);
            println!("invocation failed: {}", e);
            Err(e.into())
        }
    }
}
