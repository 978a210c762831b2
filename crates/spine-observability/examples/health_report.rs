//! Load a JSONL ledger, print its health report as JSON.
//!
//! ```text
//! SPINE_LOG=debug cargo run -p spine-observability --example health_report -- spine.jsonl [spine.toml]
//! ```

use std::path::Path;
use std::process::ExitCode;

use spine_core::config::SpineConfig;
use spine_core::errors::SpineResult;
use spine_core::hashing::Digest;
use spine_core::traits::RecordSource;
use spine_integrity::IntegrityOracle;
use spine_ledger::{JsonlStore, Ledger};
use spine_observability::tracing_setup::init_tracing;
use spine_observability::{HealthReporter, HealthSnapshot};

fn run(ledger_path: &str, config_path: Option<&str>) -> SpineResult<String> {
    let config = match config_path {
        Some(path) => SpineConfig::load(Path::new(path))?,
        None => SpineConfig::default(),
    };
    init_tracing(&config.observability)?;

    let store = JsonlStore::new(ledger_path);
    // Open without verifying so a broken chain still gets a report.
    let records = store.load()?;
    let ledger = Ledger::open_unverified(Digest::GENESIS, records).with_config(config.ledger.clone());

    let oracle = IntegrityOracle::new(config.oracle.clone());
    let report = HealthReporter::build(&HealthSnapshot::capture(&ledger, &oracle, None));
    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(ledger_path) = args.first() else {
        eprintln!("usage: health_report <ledger.jsonl> [config.toml]");
        return ExitCode::from(2);
    };
    match run(ledger_path, args.get(1).map(String::as_str)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("health_report: {e}");
            ExitCode::FAILURE
        }
    }
}
