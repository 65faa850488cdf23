//! phone-intel - Main entry point
//!
//! With a phone number argument, classifies it once and prints the result as
//! JSON on stdout. Without arguments, serves the MCP tools over stdio.

use anyhow::Result;
use phone_intel::plan::{LibPhonenumberPlan, NumberingPlan, RegionTable};
use phone_intel::services::{PhoneLookupService, PhoneLookupServiceImpl};
use phone_intel::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let regions = match &config.region_data_path {
        Some(path) => RegionTable::from_path(path)?,
        None => RegionTable::bundled()?,
    };
    let plan = Arc::new(LibPhonenumberPlan::new(regions)) as Arc<dyn NumberingPlan>;
    info!("Numbering plan data version {}", plan.version());

    let service: Arc<dyn PhoneLookupService> =
        Arc::new(PhoneLookupServiceImpl::new(plan, &config));

    if let Some(number) = std::env::args().nth(1) {
        return classify_once(service.as_ref(), &number);
    }

    info!("Starting MCP server with stdio transport");
    let summary = phone_intel::server::run_server(service).await?;

    info!(
        lookups = summary.lookups_total,
        parse_errors = summary.parse_errors_total,
        valid = summary.valid_numbers_total,
        avg_us = summary.lookup_duration_avg_us,
        "phone-intel shutdown complete"
    );
    Ok(())
}

fn classify_once(service: &dyn PhoneLookupService, number: &str) -> Result<()> {
    match service.classify(number, None) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            error!("Lookup failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
