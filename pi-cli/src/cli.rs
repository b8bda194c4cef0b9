use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use pi_core::{
    Config, HttpBackend, RawInputs, RunOutcome, ValidatedInput, config::ENDPOINT_ENV,
    run_prediction, validate,
};

/// Request potential-intensity predictions and save them locally.
#[derive(Debug, Parser)]
#[command(name = "pi", version, about = "Potential-intensity prediction client")]
pub struct Cli {
    /// Date and time (format YYYYMMDDHH); if absent, means "now" (UTC).
    #[arg(short = 'd', value_name = "YYYYMMDDHH")]
    pub date: Option<u64>,

    /// Ocean sample depth: 't<N>' for the top N metres, or 'sst'. Defaults to t50.
    #[arg(short = 't', value_name = "PROFILE")]
    pub ocean_profile: Option<String>,

    /// Sea level pressure (mb).
    #[arg(short = 'p', value_name = "MB", allow_negative_numbers = true)]
    pub sea_level_pressure: f64,

    /// Output CSV ledger path; run logs go to a `logs` directory beside it.
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prediction backend URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let now = Utc::now();
        let config = Config::load()?;

        let raw = RawInputs {
            date_digits: self.date,
            ocean_profile: self.ocean_profile,
            sea_level_pressure: self.sea_level_pressure,
            output_path: config.resolve_output_path(self.output),
        };
        let input = validate(&raw, now)?;

        let endpoint = config.resolve_endpoint(self.endpoint, std::env::var(ENDPOINT_ENV).ok());
        let backend = HttpBackend::new(endpoint);
        tracing::debug!(endpoint = backend.endpoint(), "using prediction backend");

        print_request(&input);

        match run_prediction(&backend, &input, now).await? {
            RunOutcome::Saved { ledger, log } => {
                println!("Success");
                println!("Saved outputs to CSV file {}", ledger.display());
                println!("Saved full log to JSON file {}", log.display());
            }
            RunOutcome::Discarded { .. } => {}
        }

        Ok(())
    }
}

fn print_request(input: &ValidatedInput) {
    let request = &input.request;
    println!(
        "Requesting data and predictions from PI REST API for:\n\
         Date: {}\n\
         Sea level pressure: {}\n\
         Using:\n\
         {}\n",
        request.requested_instant.format("%Y-%m-%dT%H:%M:%S"),
        request.sea_level_pressure_mb,
        request.ocean_profile,
    );
}
