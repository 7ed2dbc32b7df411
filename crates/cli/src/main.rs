mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::{cmd_normalize, cmd_parse, cmd_validate};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Adaptive Cards element toolkit.
#[derive(Parser)]
#[command(
    name = "adaptivecards",
    version,
    about = "Parse, normalize and validate Adaptive Card elements"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log parser activity to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a card element (or array of elements) and list what was found
    Parse {
        /// Path to the element JSON file
        file: PathBuf,
    },

    /// Parse and re-serialize elements in canonical form
    Normalize {
        /// Path to the element JSON file
        file: PathBuf,
    },

    /// Check that a file parses cleanly
    Validate {
        /// Path to the element JSON file
        file: PathBuf,
        /// Treat parse warnings as failures
        #[arg(long)]
        strict: bool,
        /// Also check the serialized output against the bundled JSON Schema
        #[arg(long)]
        schema: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { file } => {
            cmd_parse(&file, cli.output, cli.quiet);
        }
        Commands::Normalize { file } => {
            cmd_normalize(&file, cli.output, cli.quiet);
        }
        Commands::Validate {
            file,
            strict,
            schema,
        } => {
            cmd_validate(&file, strict, schema, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
