//! Flattens a backend response into a ledger row.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    error::ProjectionError,
    model::{OutputRecord, PredictionRequest},
};

/// Outcome the backend reports when the calculation ran.
pub const SUCCESS_OUTCOME: &str = "Successful";

const OUTCOME: &str = "/predictions/metadata/outcome";
const AVERAGE_TEMPERATURE: &str = "/dataSources/ocean/metadata/averageTemperatureUsed";
const MAXIMUM_WIND_SPEED: &str = "/predictions/data/maximumWindSpeed";
const MINIMUM_CENTRAL_PRESSURE: &str = "/predictions/data/minimumCentralPressure";
const OUTFLOW_TEMPERATURE: &str = "/predictions/data/outflowTemperature";
const OCEAN_SOURCE: &str = "/dataSources/ocean/metadata/sourceName";
const OCEAN_START: &str = "/dataSources/ocean/metadata/timeframe/start";
const OCEAN_END: &str = "/dataSources/ocean/metadata/timeframe/end";
const ATMOSPHERE_START: &str = "/dataSources/atmosphere/metadata/timeframe/start";
const ATMOSPHERE_END: &str = "/dataSources/atmosphere/metadata/timeframe/end";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The `predictions.metadata.outcome` value.
pub fn outcome(response: &Value) -> Result<String, ProjectionError> {
    field(response, OUTCOME)
}

pub fn is_successful(response: &Value) -> Result<bool, ProjectionError> {
    Ok(outcome(response)? == SUCCESS_OUTCOME)
}

/// Build the ledger row for one run.
///
/// `run_at` is the run's own timestamp, `log_path` where the full response
/// will be written.
pub fn project(
    response: &Value,
    request: &PredictionRequest,
    run_at: DateTime<Utc>,
    log_path: &Path,
) -> Result<OutputRecord, ProjectionError> {
    Ok(OutputRecord {
        date_run: run_at.format(DATE_FORMAT).to_string(),
        date_input: request.requested_instant.format(DATE_FORMAT).to_string(),
        sea_level_pressure_mb: request.sea_level_pressure_mb,
        ocean_profile: request.ocean_profile.to_string(),
        average_ocean_temperature: field(response, AVERAGE_TEMPERATURE)?,
        maximum_wind_speed: field(response, MAXIMUM_WIND_SPEED)?,
        minimum_central_pressure: field(response, MINIMUM_CENTRAL_PRESSURE)?,
        outflow_temperature: field(response, OUTFLOW_TEMPERATURE)?,
        ocean_source: field(response, OCEAN_SOURCE)?,
        ocean_timeframe_start: field(response, OCEAN_START)?,
        ocean_timeframe_end: field(response, OCEAN_END)?,
        atmosphere_timeframe_start: field(response, ATMOSPHERE_START)?,
        atmosphere_timeframe_end: field(response, ATMOSPHERE_END)?,
        full_log: log_path.display().to_string(),
    })
}

fn field(response: &Value, pointer: &'static str) -> Result<String, ProjectionError> {
    response
        .pointer(pointer)
        .map(cell)
        .ok_or(ProjectionError::MissingField(pointer))
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
