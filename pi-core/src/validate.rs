//! Turns raw command-line values into a [`PredictionRequest`].
//!
//! Every parser takes the current instant explicitly where it matters, so
//! callers (and tests) decide what "now" is.

use std::{path::PathBuf, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    error::ValidationError,
    model::{DEFAULT_LEDGER_FILENAME, OceanProfile, PredictionRequest, RawInputs, ValidatedInput},
};

const DATE_DIGITS: usize = 10;

/// Parse a `YYYYMMDDHH` code into a UTC instant, defaulting to `now`.
pub fn parse_datetime(
    digits: Option<u64>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let Some(digits) = digits else {
        return Ok(now);
    };

    let raw = digits.to_string();
    if raw.len() != DATE_DIGITS {
        return Err(ValidationError::InvalidDate(raw));
    }

    let field = |range: std::ops::Range<usize>| raw[range].parse::<u32>().ok();
    let naive = match (field(0..4), field(4..6), field(6..8), field(8..10)) {
        (Some(year), Some(month), Some(day), Some(hour)) => {
            NaiveDate::from_ymd_opt(year as i32, month, day).and_then(|d| d.and_hms_opt(hour, 0, 0))
        }
        _ => None,
    };
    let instant = naive
        .ok_or_else(|| ValidationError::InvalidDate(raw.clone()))?
        .and_utc();

    if instant > now {
        return Err(ValidationError::FutureDate(instant.format("%Y-%m-%d %H:%M:%S").to_string()));
    }

    Ok(instant)
}

impl FromStr for OceanProfile {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();
        if lower == "sst" {
            return Ok(OceanProfile::Sst);
        }

        lower
            .strip_prefix('t')
            .filter(|depth| depth.starts_with(|c: char| c.is_ascii_digit()))
            .and_then(|depth| depth.parse::<f64>().ok())
            .filter(|depth| depth.is_finite() && *depth > 0.0)
            .map(OceanProfile::Layer)
            .ok_or_else(|| ValidationError::InvalidProfile(value.to_string()))
    }
}

/// Parse `sst` / `t<N>`; absent means the default top-50m layer.
pub fn parse_ocean_profile(token: Option<&str>) -> Result<OceanProfile, ValidationError> {
    token.map_or_else(|| Ok(OceanProfile::default()), OceanProfile::from_str)
}

pub fn parse_pressure(value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidPressure(value.to_string()))
    }
}

/// Validate every field, stopping at the first one that fails.
pub fn validate(raw: &RawInputs, now: DateTime<Utc>) -> Result<ValidatedInput, ValidationError> {
    let requested_instant = parse_datetime(raw.date_digits, now)?;
    let ocean_profile = parse_ocean_profile(raw.ocean_profile.as_deref())?;
    let sea_level_pressure_mb = parse_pressure(raw.sea_level_pressure)?;

    let ledger_path = raw
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILENAME));

    Ok(ValidatedInput {
        request: PredictionRequest {
            requested_instant,
            ocean_profile,
            sea_level_pressure_mb,
        },
        ledger_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap()
    }

    #[test]
    fn absent_date_defaults_to_now() {
        let now = fixed_now();
        assert_eq!(parse_datetime(None, now), Ok(now));
    }

    #[test]
    fn date_digits_decompose_exactly() {
        let parsed = parse_datetime(Some(2023010112), fixed_now()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn date_equal_to_now_is_accepted() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(parse_datetime(Some(2024061512), now), Ok(now));
    }

    #[test]
    fn future_date_is_rejected() {
        let err = parse_datetime(Some(2024061513), fixed_now()).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate(_)));

        let err = parse_datetime(Some(2099123123), fixed_now()).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate(_)));
    }

    #[test]
    fn impossible_calendar_fields_are_rejected() {
        for digits in [2023023012, 2023130112, 2023010124, 2023000112, 2023010012] {
            let err = parse_datetime(Some(digits), fixed_now()).unwrap_err();
            assert_eq!(err, ValidationError::InvalidDate(digits.to_string()), "digits {digits}");
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            parse_datetime(Some(20230101), fixed_now()),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_datetime(Some(20230101120), fixed_now()),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn leap_day_is_valid() {
        let parsed = parse_datetime(Some(2024022900), fixed_now()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
    }

    #[test]
    fn profile_tokens() {
        assert_eq!(parse_ocean_profile(Some("sst")), Ok(OceanProfile::Sst));
        assert_eq!(parse_ocean_profile(Some("SST")), Ok(OceanProfile::Sst));
        assert_eq!(parse_ocean_profile(Some("t50")), Ok(OceanProfile::Layer(50.0)));
        assert_eq!(parse_ocean_profile(Some("T100")), Ok(OceanProfile::Layer(100.0)));
        assert_eq!(parse_ocean_profile(Some("t22.5")), Ok(OceanProfile::Layer(22.5)));

        assert_eq!(parse_ocean_profile(Some("sst")).unwrap().depth_meters(), 0.0);
        assert_eq!(parse_ocean_profile(Some("t50")).unwrap().depth_meters(), 50.0);
    }

    #[test]
    fn absent_profile_is_fifty_metres_not_sst() {
        let profile = parse_ocean_profile(None).unwrap();
        assert_eq!(profile, OceanProfile::Layer(50.0));
        assert!(!profile.is_sst());
    }

    #[test]
    fn bad_profiles_are_rejected() {
        for token in ["t-5", "xyz", "t0", "t", "t50m", "50", "tnan", "tinf", "sst1", ""] {
            assert_eq!(
                parse_ocean_profile(Some(token)),
                Err(ValidationError::InvalidProfile(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn pressure_must_be_positive() {
        assert_eq!(parse_pressure(1013.25), Ok(1013.25));
        assert!(matches!(parse_pressure(0.0), Err(ValidationError::InvalidPressure(_))));
        assert!(matches!(parse_pressure(-5.0), Err(ValidationError::InvalidPressure(_))));
        assert!(matches!(parse_pressure(f64::NAN), Err(ValidationError::InvalidPressure(_))));
    }

    #[test]
    fn validate_resolves_defaults() {
        let raw = RawInputs {
            sea_level_pressure: 1010.0,
            ..Default::default()
        };
        let input = validate(&raw, fixed_now()).unwrap();

        assert_eq!(input.request.requested_instant, fixed_now());
        assert_eq!(input.request.ocean_profile, OceanProfile::Layer(50.0));
        assert_eq!(input.request.sea_level_pressure_mb, 1010.0);
        assert_eq!(input.ledger_path, PathBuf::from("outputs.csv"));
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let raw = RawInputs {
            date_digits: Some(2099010100),
            ocean_profile: Some("bogus".into()),
            sea_level_pressure: -1.0,
            output_path: None,
        };
        assert!(matches!(validate(&raw, fixed_now()), Err(ValidationError::FutureDate(_))));

        let raw = RawInputs {
            date_digits: None,
            ..raw
        };
        assert!(matches!(validate(&raw, fixed_now()), Err(ValidationError::InvalidProfile(_))));

        let raw = RawInputs {
            ocean_profile: Some("sst".into()),
            ..raw
        };
        assert!(matches!(validate(&raw, fixed_now()), Err(ValidationError::InvalidPressure(_))));
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_ocean_profile(Some("xyz")).unwrap_err();
        assert!(err.to_string().starts_with("xyz is not valid"));
    }
}
