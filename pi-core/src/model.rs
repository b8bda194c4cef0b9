use std::{fmt, path::PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shallowest ocean layer the backend accepts, in metres.
pub const MINIMUM_LAYER_DEPTH: f64 = 15.0;

/// Layer depth used when no `-t` profile is given.
pub const DEFAULT_LAYER_DEPTH: f64 = 50.0;

/// Ledger file name used when neither `-o` nor the config file name one.
pub const DEFAULT_LEDGER_FILENAME: &str = "outputs.csv";

/// Ocean temperature sampling mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OceanProfile {
    /// Sea-surface temperature.
    Sst,
    /// Average over the top `n` metres of the ocean.
    Layer(f64),
}

impl OceanProfile {
    /// Depth in metres; SST is encoded as 0.
    pub fn depth_meters(&self) -> f64 {
        match self {
            OceanProfile::Sst => 0.0,
            OceanProfile::Layer(depth) => *depth,
        }
    }

    pub fn is_sst(&self) -> bool {
        matches!(self, OceanProfile::Sst)
    }
}

impl Default for OceanProfile {
    fn default() -> Self {
        OceanProfile::Layer(DEFAULT_LAYER_DEPTH)
    }
}

impl fmt::Display for OceanProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OceanProfile::Sst => f.write_str("SST"),
            OceanProfile::Layer(depth) => write!(f, "TOP {depth}m layer"),
        }
    }
}

/// Raw values as they come off the command line, before validation.
///
/// Absent fields resolve to:
/// - `date_digits`: the current UTC instant
/// - `ocean_profile`: [`DEFAULT_LAYER_DEPTH`]
/// - `output_path`: [`DEFAULT_LEDGER_FILENAME`] in the working directory
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub date_digits: Option<u64>,
    pub ocean_profile: Option<String>,
    pub sea_level_pressure: f64,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub requested_instant: DateTime<Utc>,
    pub ocean_profile: OceanProfile,
    pub sea_level_pressure_mb: f64,
}

/// A validated request plus where its results go.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub request: PredictionRequest,
    pub ledger_path: PathBuf,
}

/// Column names of the ledger, in row order.
pub const LEDGER_HEADERS: [&str; 14] = [
    "Date Run",
    "Date Input",
    "Sea Level Pressure (mb)",
    "Ocean Temperature Profile",
    "Average Ocean Temperature",
    "Potential Maximum Wind Velocity (m/s)",
    "Minimum Pressure At Eye (mb)",
    "Outflow Temperature (K)",
    "Ocean Temperature Source",
    "Earliest Ocean Recording",
    "Latest Ocean Recording",
    "Earliest Atmospheric Recording",
    "Latest Atmospheric Recording",
    "Full log",
];

/// One ledger row. Field order matches [`LEDGER_HEADERS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub date_run: String,
    pub date_input: String,
    pub sea_level_pressure_mb: f64,
    pub ocean_profile: String,
    pub average_ocean_temperature: String,
    pub maximum_wind_speed: String,
    pub minimum_central_pressure: String,
    pub outflow_temperature: String,
    pub ocean_source: String,
    pub ocean_timeframe_start: String,
    pub ocean_timeframe_end: String,
    pub atmosphere_timeframe_start: String,
    pub atmosphere_timeframe_end: String,
    pub full_log: String,
}
