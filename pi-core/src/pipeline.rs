use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{
    backend::PredictionBackend,
    error::PipelineError,
    model::ValidatedInput,
    output::{append_ledger, log_path_for, write_run_log},
    projector,
    request::QueryParams,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Ledger row appended and full response logged.
    Saved { ledger: PathBuf, log: PathBuf },
    /// Backend answered but did not report success; nothing was written.
    Discarded { outcome: String },
}

/// Query the backend once and persist the result.
///
/// `now` stamps the ledger row and names the run log. Nothing is written
/// unless the backend call succeeds and reports a successful outcome.
pub async fn run_prediction(
    backend: &dyn PredictionBackend,
    input: &ValidatedInput,
    now: DateTime<Utc>,
) -> Result<RunOutcome, PipelineError> {
    let params = QueryParams::from(&input.request);
    let response = backend.get_predictions(&params).await?;

    let outcome = projector::outcome(&response)?;
    if outcome != projector::SUCCESS_OUTCOME {
        tracing::warn!(%outcome, "backend did not report success; nothing saved");
        return Ok(RunOutcome::Discarded { outcome });
    }

    let log = log_path_for(&input.ledger_path, now);
    let record = projector::project(&response, &input.request, now, &log)?;

    append_ledger(&input.ledger_path, &record)?;
    write_run_log(&log, &response)?;

    Ok(RunOutcome::Saved {
        ledger: input.ledger_path.clone(),
        log,
    })
}
