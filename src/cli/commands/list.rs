//! Listing command
//!
//! Shows what is available to run or tap: built-in and configured
//! exercises, the phrase card set, and the navigable routes.

use serde_json::json;

use crate::cli::args::{ListArgs, ListCategory, OutputFormat};
use crate::cli::commands::session::load_config;
use crate::error::MirnoError;
use crate::nav::Route;
use crate::timer::PhaseTable;
use crate::tools::phrases;

/// Runs the list command.
///
/// # Errors
///
/// Returns an error only if a given exercise file fails to load.
pub fn run(args: &ListArgs) -> Result<(), MirnoError> {
    let config = load_config(args.config.as_deref())?;

    let mut exercises = vec![
        describe("transition", &PhaseTable::countdown(300), true),
        describe("breathing", &PhaseTable::breathing(), true),
    ];
    if let Some(config) = &config {
        for exercise in &config.exercises {
            if let Ok(table) = exercise.to_table() {
                exercises.push(describe(&exercise.name, &table, false));
            }
        }
    }

    let show = |category: ListCategory| {
        args.category == ListCategory::All || args.category == category
    };

    match args.format {
        OutputFormat::Json => {
            let mut output = serde_json::Map::new();
            if show(ListCategory::Exercises) {
                output.insert("exercises".to_string(), json!(exercises));
            }
            if show(ListCategory::Phrases) {
                let cards: Vec<_> = phrases::CARDS
                    .iter()
                    .map(|c| json!({"id": c.id, "label": c.label, "spoken": c.spoken}))
                    .collect();
                output.insert("phrases".to_string(), json!(cards));
            }
            if show(ListCategory::Routes) {
                let routes: Vec<_> = Route::ALL
                    .iter()
                    .map(|r| json!({"name": r.name(), "title": r.title()}))
                    .collect();
                output.insert("routes".to_string(), json!(routes));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if show(ListCategory::Exercises) {
                println!("exercises:");
                for exercise in &exercises {
                    println!(
                        "  {:<12} {}",
                        exercise["name"].as_str().unwrap_or(""),
                        exercise["summary"].as_str().unwrap_or("")
                    );
                }
            }
            if show(ListCategory::Phrases) {
                println!("phrase cards:");
                for card in &phrases::CARDS {
                    println!("  {:<4} {:<20} \"{}\"", card.id, card.label, card.spoken);
                }
            }
            if show(ListCategory::Routes) {
                println!("routes:");
                for route in Route::ALL {
                    println!("  {:<10} {}", route.name(), route.title());
                }
            }
        }
    }

    Ok(())
}

fn describe(name: &str, table: &PhaseTable, builtin: bool) -> serde_json::Value {
    let phases: Vec<String> = table
        .phases()
        .iter()
        .map(|p| format!("{} {}s", p.name, p.duration_seconds))
        .collect();
    let summary = format!(
        "{}{}",
        phases.join(", "),
        if table.is_cyclic() { " (cyclic)" } else { "" }
    );
    json!({
        "name": name,
        "summary": summary,
        "cyclic": table.is_cyclic(),
        "cycle_seconds": table.cycle_seconds(),
        "builtin": builtin,
    })
}
