use serde::Serialize;

use crate::model::{MINIMUM_LAYER_DEPTH, PredictionRequest};

/// ISO-8601 without offset; the instant is always UTC.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Query string sent to the prediction backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub datetime: String,
    pub sea_level_pressure: f64,
    /// Ignored by the backend when `sst_flag` is set.
    pub ocean_layer_depth: f64,
    pub sst_flag: bool,
}

impl From<&PredictionRequest> for QueryParams {
    fn from(request: &PredictionRequest) -> Self {
        let depth = request.ocean_profile.depth_meters();

        Self {
            datetime: request.requested_instant.format(DATETIME_FORMAT).to_string(),
            sea_level_pressure: request.sea_level_pressure_mb,
            ocean_layer_depth: if depth > 0.0 { depth } else { MINIMUM_LAYER_DEPTH },
            sst_flag: request.ocean_profile.is_sst(),
        }
    }
}
