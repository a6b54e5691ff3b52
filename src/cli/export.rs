//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{NestEggError, NestEggResult};
use crate::export::{export_full_json, export_full_yaml};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (stdout when omitted)
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn write_export<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: &ExportArgs,
    writer: &mut W,
) -> NestEggResult<()> {
    match args.format {
        ExportFormat::Json => export_full_json(storage, settings, writer, args.pretty)?,
        ExportFormat::Yaml => export_full_yaml(storage, settings, writer)?,
    }
    writer
        .flush()
        .map_err(|e| NestEggError::Export(e.to_string()))
}

pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> NestEggResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                NestEggError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_export(storage, settings, &args, &mut BufWriter::new(file))?;
            eprintln!("Exported to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_export(storage, settings, &args, &mut stdout.lock())?;
            println!();
        }
    }

    Ok(())
}
