//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};
use clap::{Args, ValueEnum};
use groundbook::operations::{query, AdminToken};
use groundbook::{GroundId, Reservation, UserId};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "ground",
    "user",
    "start",
    "hours",
    "price",
    "status",
];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "GROUNDBOOK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show only reservations made by this user
    #[arg(long, value_name = "ID", conflicts_with_all = ["ground", "pending"])]
    pub user: Option<i64>,

    /// Show only reservations on this ground (rejected ones included)
    #[arg(long, value_name = "ID", conflicts_with = "pending")]
    pub ground: Option<i64>,

    /// Show only reservations awaiting review
    #[arg(long)]
    pub pending: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let reservations = if let Some(user) = self.user {
            query::reservations_for_user(&db, UserId(user))
        } else if let Some(ground) = self.ground {
            query::reservations_for_ground(&db, GroundId(ground))
        } else if self.pending {
            query::pending_review(&db, &AdminToken::new())
        } else {
            query::all_reservations(&db)
        }
        .map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
            OutputFormat::Csv => format_as_delimited(&reservations, b',')?,
            OutputFormat::Tsv => format_as_delimited(&reservations, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.ground(),
            res.user(),
            format_timestamp(res.slot().start()),
            res.slot().hours(),
            res.price(),
            res.status(),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = reservations
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id().0,
                "ground": r.ground().0,
                "user": r.user().0,
                "start": format_timestamp(r.slot().start()),
                "hours": r.slot().hours(),
                "price": r.price(),
                "status": r.status().as_str(),
                "created_at": format_timestamp(r.created_at()),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        writer
            .write_record(&[
                res.id().to_string(),
                res.ground().to_string(),
                res.user().to_string(),
                format_timestamp(res.slot().start()),
                res.slot().hours().to_string(),
                res.price().to_string(),
                res.status().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
