//! wardbook - Main entry point
//!
//! Without arguments, prints the (optionally seeded) patient book as JSON.
//! `wardbook check <field> <value...>` parses a single field value and
//! prints its normalised form, or fails with the field's constraint message.

use anyhow::{bail, Context, Result};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wardbook::sample::sample_patient_book;
use wardbook::{parser, Config, PatientBook};

const USAGE: &str = "Usage: wardbook [check <field> <value...>]\n\
Fields: index, id, name, ward, diagnosis, medication, notes, phone, address, \
email, tag, tags, date, datetime";

fn main() -> Result<()> {
    // Configuration is loaded first so that its log level can seed the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only, stdout carries the JSON output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let args: Vec<String> = env::args().skip(1).collect();
    match args.split_first() {
        None => print_book(&config),
        Some((command, rest)) if command == "check" => check_field(rest),
        Some((command, _)) => bail!("Unknown command: {}\n{}", command, USAGE),
    }
}

fn print_book(config: &Config) -> Result<()> {
    let book = if config.seed_sample_data {
        let book = sample_patient_book()?;
        info!("Seeded patient book with {} sample patients", book.len());
        book
    } else {
        PatientBook::new()
    };

    let json = if config.pretty_json {
        serde_json::to_string_pretty(&book)?
    } else {
        serde_json::to_string(&book)?
    };
    println!("{}", json);
    Ok(())
}

fn check_field(args: &[String]) -> Result<()> {
    let Some((field, values)) = args.split_first() else {
        bail!("Missing field name\n{}", USAGE);
    };
    let raw = values.join(" ");

    let normalised = match field.as_str() {
        "index" => parser::parse_index(&raw).map(|i| i.zero_based().to_string()),
        "id" => parser::parse_id(&raw).map(|v| v.to_string()),
        "name" => parser::parse_name(&raw).map(|v| v.to_string()),
        "ward" => parser::parse_ward(&raw).map(|v| v.to_string()),
        "diagnosis" => parser::parse_diagnosis(&raw).map(|v| v.to_string()),
        "medication" => parser::parse_medication(&raw).map(|v| v.to_string()),
        "notes" => parser::parse_notes(&raw).map(|v| v.to_string()),
        "phone" => parser::parse_phone(&raw).map(|v| v.to_string()),
        "address" => parser::parse_address(&raw).map(|v| v.to_string()),
        "email" => parser::parse_email(&raw).map(|v| v.to_string()),
        "tag" => parser::parse_tag(&raw).map(|v| v.to_string()),
        "tags" => parser::parse_tags(values).map(|tags| {
            let mut names: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            names.sort();
            names.join("")
        }),
        "date" => parser::parse_local_date(&raw).map(|d| wardbook::datetime::format_date(&d)),
        "datetime" => {
            parser::parse_local_date_time(&raw).map(|d| wardbook::datetime::format_date_time(&d))
        }
        other => bail!("Unknown field: {}\n{}", other, USAGE),
    };

    match normalised {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            error!("Rejected {} value", field);
            Err(e.into())
        }
    }
}
