//! Exercise file validation
//!
//! Loads each file through the full pipeline without running anything and
//! reports every issue found.

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::ConfigLoader;
use crate::error::{ConfigError, MirnoError};

/// Validates the given exercise files.
///
/// # Errors
///
/// Returns the first failure after reporting all files, so the process
/// exits with a configuration error code if anything was invalid.
pub fn run(args: &ValidateArgs) -> Result<(), MirnoError> {
    let loader = ConfigLoader::with_defaults();
    let mut first_error: Option<ConfigError> = None;
    let mut reports = Vec::new();

    for file in &args.files {
        match loader.load(file) {
            Ok(result) => {
                let strict_failure = args.strict && !result.warnings.is_empty();
                if strict_failure && first_error.is_none() {
                    first_error = Some(ConfigError::InvalidValue {
                        field: "warnings".to_string(),
                        value: result.warnings.len().to_string(),
                        expected: "no warnings in strict mode".to_string(),
                    });
                }
                reports.push(json!({
                    "file": file.display().to_string(),
                    "valid": !strict_failure,
                    "exercises": result.config.exercises.len(),
                    "warnings": result
                        .warnings
                        .iter()
                        .map(|w| json!({
                            "message": w.message,
                            "location": w.location,
                        }))
                        .collect::<Vec<_>>(),
                }));
            }
            Err(e) => {
                reports.push(json!({
                    "file": file.display().to_string(),
                    "valid": false,
                    "error": e.to_string(),
                    "details": error_details(&e),
                }));
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match args.format {
        OutputFormat::Human => print_human(&reports),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    first_error.map_or(Ok(()), |e| Err(e.into()))
}

fn error_details(error: &ConfigError) -> Vec<String> {
    match error {
        ConfigError::ValidationError { errors, .. } => {
            errors.iter().map(ToString::to_string).collect()
        }
        _ => vec![],
    }
}

fn print_human(reports: &[serde_json::Value]) {
    for report in reports {
        let file = report["file"].as_str().unwrap_or("<unknown>");
        if report["valid"].as_bool().unwrap_or(false) {
            let count = report["exercises"].as_u64().unwrap_or(0);
            println!("{file}: ok ({count} exercises)");
        } else {
            println!("{file}: FAILED");
            if let Some(error) = report["error"].as_str() {
                println!("  {error}");
            }
            if let Some(details) = report["details"].as_array() {
                for detail in details {
                    if let Some(line) = detail.as_str() {
                        println!("  {line}");
                    }
                }
            }
        }
        if let Some(warnings) = report["warnings"].as_array() {
            for warning in warnings {
                let message = warning["message"].as_str().unwrap_or("");
                let location = warning["location"].as_str().unwrap_or("<unknown>");
                println!("  warning: {message} at {location}");
            }
        }
    }
}
