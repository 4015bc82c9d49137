//! rimas CLI
//!
//! Converts tabular rhyme data (one verse line per column) into
//! consolidated rhyme records and writes them as a JSON array ready for
//! downstream import.

use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rimas_import::{ImportError, LogProgress, convert_rows, read_rows_file, write_records};

const DEFAULT_INPUT: &str = "data/rimas-separadas.csv";
const DEFAULT_OUTPUT: &str = "data/rimas-input.json";

/// How many error messages to print before collapsing to a count.
const MAX_ERRORS_SHOWN: usize = 10;

#[derive(Parser)]
#[command(name = "rimas")]
#[command(about = "Convert separated verse-line CSV into import-ready rhyme records", long_about = None)]
struct Cli {
    /// Input CSV file (header row; columns verso1..verso8, categoria, dificuldade)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!(
            "{} Conversion failed: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ImportError> {
    // Pre-flight: a missing input file aborts before any row processing.
    if !cli.input.exists() {
        eprintln!(
            "{} Input file not found: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            cli.input.display(),
        );
        eprintln!();
        eprintln!("Create the CSV file with columns:");
        eprintln!("  verso1, verso2, verso3, verso4, categoria");
        eprintln!("  or: linha1, linha2, linha3, linha4, tema");
        return Ok(());
    }

    println!(
        "{}",
        format!("Reading {}", cli.input.display())
            .if_supports_color(Stdout, |t| t.bold()),
    );

    let rows = read_rows_file(&cli.input)?;
    let (records, stats) = convert_rows(rows, Some(&LogProgress));

    println!();
    println!(
        "{} Conversion complete",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    println!("  Converted: {}", stats.converted);
    println!("  Errors:    {}", stats.errors.len());

    if !stats.errors.is_empty() {
        println!();
        println!(
            "{} Rows skipped:",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
        for error in stats.errors.iter().take(MAX_ERRORS_SHOWN) {
            println!("  {error}");
        }
        if stats.errors.len() > MAX_ERRORS_SHOWN {
            println!("  ... and {} more", stats.errors.len() - MAX_ERRORS_SHOWN);
        }
    }

    if records.is_empty() {
        println!();
        println!(
            "{} No valid rhymes found; nothing written.",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        );
        return Ok(());
    }

    let size = write_records(&cli.output, &records)?;
    println!();
    println!(
        "Saved to {} ({:.1} KB)",
        cli.output.display(),
        size as f64 / 1024.0,
    );

    print_sample(&records[0]);

    println!();
    println!("Next step: import the JSON with your seeding tool.");

    Ok(())
}

/// Print the first converted record so the operator can sanity-check the
/// column mapping.
fn print_sample(record: &rimas_catalog::RhymeRecord) {
    println!();
    println!("Sample record:");
    println!("  Theme:      {}", record.theme);
    println!("  Difficulty: {}", record.difficulty.as_str());
    if let Some(family) = &record.rhyme_family {
        println!("  Family:     {family}");
    }
    println!("  Ranking:    {}", record.ranking);
    println!("  Verse:");
    for line in record.verse.lines() {
        println!("    {line}");
    }
}
