mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "takeoff",
    version,
    about = "Equipment take-off extraction from MEP drawing PDFs"
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract equipment from PDFs, text dumps or directories of them
    Extract {
        /// PDF files, .txt page dumps, or directories to walk
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write the JSON result to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,

        /// Skip table detection
        #[arg(long)]
        no_tables: bool,

        /// Documents processed in parallel
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Characters of context kept before a tag
        #[arg(long, default_value_t = 50)]
        context_before: usize,

        /// Characters of context kept after a tag
        #[arg(long, default_value_t = 150)]
        context_after: usize,
    },
    /// Summarize the equipment found in one document
    Scan {
        /// PDF file or .txt page dump
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the built-in lexicons
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// List equipment categories in scan order
    List,
    /// Show the tag patterns and size indicators of a category
    Show {
        /// Category key (e.g., "ahu", "cooling_tower")
        category: String,
    },
    /// List the size measurement patterns
    Sizes,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "takeoff=warn",
        1 => "takeoff=info",
        _ => "takeoff=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            paths,
            out,
            compact,
            no_tables,
            jobs,
            context_before,
            context_after,
        } => commands::extract::run(
            paths,
            out,
            compact,
            commands::extract::Settings {
                detect_tables: !no_tables,
                jobs,
                context_before,
                context_after,
            },
        ),
        Commands::Scan { input_file, output } => commands::scan::run(input_file, &output),
        Commands::Lexicon { action } => match action {
            LexiconAction::List => commands::lexicon::list(),
            LexiconAction::Show { category } => commands::lexicon::show(&category),
            LexiconAction::Sizes => commands::lexicon::sizes(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
