//! Bidreport CLI - tender evaluation report generator

use anyhow::{bail, Context, Result};
use bidreport::prelude::*;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod form;
use form::ReportForm;

#[derive(Parser)]
#[command(name = "bidreport")]
#[command(author, version, about = "Tender bid-evaluation report generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the PDF report
    Generate(GenerateArgs),

    /// Print the formatted table to stdout without generating a PDF
    Preview {
        /// Form file (JSON); the built-in defaults are used when absent
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show deviations without an explicit leading sign
        #[arg(long)]
        unsigned: bool,
    },

    /// Write the default form as JSON to stdout
    Sample,
}

#[derive(Args)]
struct GenerateArgs {
    /// Form file (JSON); the built-in defaults are used when absent
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: derived from the tender number)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tender number override
    #[arg(long)]
    number: Option<String>,

    /// Tender date override (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Region override
    #[arg(long)]
    region: Option<String>,

    /// Authority override
    #[arg(long)]
    authority: Option<String>,

    /// Replace the form's lots (repeatable)
    #[arg(long = "lot", value_name = "NAME:COMPANY:ESTIMATE:BID")]
    lots: Vec<String>,

    /// Show deviations without an explicit leading sign
    #[arg(long)]
    unsigned: bool,

    /// External TTF font for the report text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Pin the footer timestamp ("YYYY-MM-DD HH:MM"), for reproducible output
    #[arg(long)]
    timestamp: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Preview { input, unsigned } => preview(input.as_deref(), unsigned),
        Commands::Sample => sample(),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut form = load_form(args.input.as_deref())?;

    if let Some(number) = args.number {
        form.tender.number = number;
    }
    if let Some(date) = args.date {
        form.tender.date = date;
    }
    if let Some(region) = args.region {
        form.tender.region = region;
    }
    if let Some(authority) = args.authority {
        form.tender.authority = authority;
    }
    if !args.lots.is_empty() {
        form.lots = args
            .lots
            .iter()
            .map(|spec| parse_lot(spec))
            .collect::<Result<Vec<_>>>()?;
    }

    for (i, lot) in form.lots.iter().enumerate() {
        lot.validate()
            .with_context(|| format!("Lot {} is invalid", i + 1))?;
    }

    let mut options = RenderOptions::default().with_sign(sign_display(args.unsigned));
    if let Some(font) = args.font {
        options = options.with_font(FontSource::File(font));
    }

    let generated_at = match args.timestamp.as_deref() {
        Some(text) => parse_timestamp(text)?,
        None => Local::now(),
    };

    let bytes = ReportRenderer::with_options(options)
        .render(&form.tender, &form.lots, generated_at)
        .context("Failed to render report")?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(form.tender.report_file_name()));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    eprintln!(
        "Wrote {} lot(s) to '{}' ({} bytes)",
        form.lots.len(),
        path.display(),
        bytes.len()
    );

    Ok(())
}

fn preview(input: Option<&Path>, unsigned: bool) -> Result<()> {
    let form = load_form(input)?;
    let table = ReportTable::build(&form.lots, sign_display(unsigned));

    let mut widths = [0usize; 5];
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    println!(
        "{} - Call for tenders No. {} ({})",
        bidreport::REPORT_TITLE,
        form.tender.number,
        form.tender.date.format("%Y/%m/%d")
    );
    for row in &table.rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }

    Ok(())
}

fn sample() -> Result<()> {
    let json = serde_json::to_string_pretty(&ReportForm::default())
        .context("Failed to serialize the default form")?;
    println!("{json}");
    Ok(())
}

fn load_form(path: Option<&Path>) -> Result<ReportForm> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse '{}'", path.display()))
        }
        None => Ok(ReportForm::default()),
    }
}

/// Parse a `NAME:COMPANY:ESTIMATE:BID` lot specification.
fn parse_lot(spec: &str) -> Result<LotRecord> {
    let parts: Vec<&str> = spec.splitn(4, ':').collect();
    let [name, company, estimate, bid] = parts.as_slice() else {
        bail!("Invalid lot '{spec}': expected NAME:COMPANY:ESTIMATE:BID");
    };
    let estimate = parse_amount("estimate", estimate)?;
    let bid = parse_amount("bid", bid)?;
    Ok(LotRecord::new(name.trim(), company.trim(), estimate, bid))
}

/// Parse a pinned footer timestamp in the local timezone.
fn parse_timestamp(text: &str) -> Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%d %H:%M")
        .with_context(|| format!("Invalid timestamp '{text}': expected YYYY-MM-DD HH:MM"))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .with_context(|| format!("Timestamp '{text}' is ambiguous in the local timezone"))
}

fn sign_display(unsigned: bool) -> SignDisplay {
    if unsigned {
        SignDisplay::Negative
    } else {
        SignDisplay::Always
    }
}
