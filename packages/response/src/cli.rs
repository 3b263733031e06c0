//! Command-line interface for inspecting WebTrust responses.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use roxmltree::Document;

use crate::error::Result;
use crate::output::{render, OutputFormat};
use crate::parse::{check_fault, ResponseKind};

/// WebTrust response inspector - decode GeoTrust SOAP responses.
#[derive(Parser)]
#[command(name = "webtrust-inspect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a saved response document and print the entity graph.
    Inspect {
        /// Path to the response XML (SOAP envelope or fragment)
        file: PathBuf,

        /// Entity to decode the payload as
        #[arg(short, long, default_value = "order-details", value_parser = parse_kind)]
        kind: ResponseKind,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Decode the payload even if the response is a SOAP fault
        #[arg(long)]
        allow_fault: bool,
    },
}

fn parse_kind(s: &str) -> std::result::Result<ResponseKind, String> {
    s.parse()
        .map_err(|e: crate::error::ResponseError| e.to_string())
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            file,
            kind,
            format,
            allow_fault,
        } => inspect_command(&file, kind, format, allow_fault),
    }
}

/// Execute the inspect command.
fn inspect_command(
    file: &Path,
    kind: ResponseKind,
    format: OutputFormat,
    allow_fault: bool,
) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let doc = Document::parse(&xml)?;

    if let Err(e) = check_fault(&doc) {
        if !allow_fault {
            return Err(e);
        }
        eprintln!("{} {e}", style("Warning:").yellow().bold());
    }

    let decoded = kind.decode(&doc);
    tracing::debug!(kind = %kind, file = %file.display(), "Decoded response");

    eprintln!(
        "{} {} as {}: {}",
        style("Decoded").bold(),
        style(file.display()).cyan(),
        style(kind).green(),
        decoded.summary()
    );

    print!("{}", render(&decoded, format)?);
    Ok(())
}
