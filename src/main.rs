//! FusionBedpe CLI entry point
//!
//! Converts fusion caller output to BEDPE and validates BEDPE files.

use clap::{Args, Parser, Subcommand};
use fusion_bedpe::core::{InputSource, OutputSink};
use fusion_bedpe::{convert_path, validate_source, ConversionStats, Tool};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fusion-bedpe")]
#[command(about = "Normalize gene-fusion caller output to BEDPE")]
#[command(version)]
#[command(author = "FusionBedpe Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input and output shared by every conversion subcommand
#[derive(Args)]
struct ConvertArgs {
    /// Input file (stdin if not specified; .gz and .bz2 are decompressed)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
    /// Output file (stdout if not specified)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert STAR-Fusion output
    #[command(name = "star-fusion")]
    StarFusion(ConvertArgs),
    /// Convert FusionCatcher output
    #[command(name = "fusioncatcher")]
    FusionCatcher(ConvertArgs),
    /// Convert SOAPfuse output
    #[command(name = "soapfuse")]
    Soapfuse(ConvertArgs),
    /// Convert FusionMap output
    #[command(name = "fusionmap")]
    FusionMap(ConvertArgs),
    /// Convert EricScript output
    #[command(name = "ericscript")]
    EricScript(ConvertArgs),
    /// Convert a PanCan fusion table
    #[command(name = "pancan")]
    PanCan(ConvertArgs),
    /// Convert a CIViC variant export
    #[command(name = "civic")]
    Civic(ConvertArgs),
    /// Convert a ChimerDB export (CSV)
    #[command(name = "chimerdb")]
    ChimerDb(ConvertArgs),
    /// Convert JAFFA output (CSV)
    #[command(name = "jaffa")]
    Jaffa(ConvertArgs),
    /// Convert INFUSION output
    #[command(name = "infusion")]
    Infusion(ConvertArgs),
    /// Validate a BEDPE file
    Validate {
        /// Input BEDPE file (stdin if not specified)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,
    },
}

fn run_conversion(tool: Tool, args: ConvertArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    let input = InputSource::from(args.input);
    let output = OutputSink::from(args.output);
    eprintln!(
        "Converting {} file: {} -> {}",
        tool,
        input.describe(),
        output.describe()
    );

    let stats: ConversionStats = convert_path(tool, &input, &output)
        .map_err(|e| anyhow::anyhow!("Failed to convert {}: {}", input.describe(), e))?;

    eprintln!("\n=== Conversion Statistics ===");
    eprintln!("Total records:   {}", stats.total);
    eprintln!("Sentinel sides:  {}", stats.sentinel_sides);
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn run_validation(input: Option<PathBuf>) -> anyhow::Result<()> {
    let input = InputSource::from(input);
    eprintln!("Validating BEDPE file: {}", input.describe());

    let report = validate_source(&input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", input.describe(), e))?;

    eprintln!("#lines: {}", report.valid_rows);
    match report.failure {
        None => {
            eprintln!("Valid BEDPE file");
            Ok(())
        }
        Some(failure) => {
            eprintln!("{}", failure);
            std::process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::StarFusion(args) => run_conversion(Tool::StarFusion, args),
        Commands::FusionCatcher(args) => run_conversion(Tool::FusionCatcher, args),
        Commands::Soapfuse(args) => run_conversion(Tool::Soapfuse, args),
        Commands::FusionMap(args) => run_conversion(Tool::FusionMap, args),
        Commands::EricScript(args) => run_conversion(Tool::EricScript, args),
        Commands::PanCan(args) => run_conversion(Tool::PanCan, args),
        Commands::Civic(args) => run_conversion(Tool::Civic, args),
        Commands::ChimerDb(args) => run_conversion(Tool::ChimerDb, args),
        Commands::Jaffa(args) => run_conversion(Tool::Jaffa, args),
        Commands::Infusion(args) => run_conversion(Tool::Infusion, args),
        Commands::Validate { input } => run_validation(input),
    }
}
