//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use rf2_input_maps::{BindingLabel, SnapshotSource};
use serde_json::json;

use crate::error::CliError;

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let kind = error
        .downcast_ref::<CliError>()
        .map_or("other", CliError::type_name);
    print_json(&json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": kind
        }
    }));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print labeled bindings in the requested format
pub fn print_labels(labels: &[BindingLabel], source: SnapshotSource, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "source": source,
            "bindings": labels
        }));
        return;
    }

    if labels.is_empty() {
        println!("{}", "No bindings found".yellow());
        return;
    }

    let id_width = labels.iter().map(|l| l.id.chars().count()).max().unwrap_or(0);
    println!("{} ({})", "Controller Bindings:".bold(), source);
    for label in labels {
        let text = if label.is_set() {
            label.label.normal()
        } else {
            label.label.dimmed()
        };
        let device_type = format!("{:<8}", label.device_type);
        println!("  {:<id_width$}  {} {}", label.id, device_type.cyan(), text);
    }
}

/// Print a resolved DirectInput key code
pub fn print_dik(code: u32, name: &str, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "code": code,
            "name": name
        }));
    } else {
        println!("0x{code:02x} {} {}", "→".dimmed(), name.bold());
    }
}
