mod commands;
mod config;
mod package;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use phrasebook_codegen::Target;
use tracing_subscriber::EnvFilter;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Phrasebook voice grammar compiler.
#[derive(Parser)]
#[command(name = "phrasebook", version, about = "Phrasebook voice grammar compiler")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log compiler progress to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate decoder source from a grammar file
    Generate {
        /// Grammar file (.yml, .yaml or .json); falls back to the config file
        grammar: Option<PathBuf>,
        /// Output language (rust or kotlin)
        #[arg(long)]
        target: Option<Target>,
        /// File to write; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Package declaration for Kotlin output
        #[arg(long)]
        package: Option<String>,
        /// Source root used to infer the Kotlin package (repeatable)
        #[arg(long = "source-root")]
        source_roots: Vec<PathBuf>,
        /// Configuration file (defaults to ./phrasebook.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compile a grammar and summarize its intents
    Check {
        /// Grammar file (.yml, .yaml or .json)
        grammar: PathBuf,
        /// Keyword set used to sanitize names (rust or kotlin)
        #[arg(long, default_value = "rust")]
        target: Target,
    },

    /// Decode an inference result against a grammar
    Decode {
        /// Grammar file (.yml, .yaml or .json)
        grammar: PathBuf,
        /// Name of the inferred intent
        #[arg(long)]
        intent: String,
        /// The inference did not understand the utterance
        #[arg(long)]
        not_understood: bool,
        /// Slot value as key=value (repeatable)
        #[arg(long = "slot", value_parser = commands::decode::parse_slot)]
        slots: Vec<(String, String)>,
        /// Keyword set used to sanitize names (rust or kotlin)
        #[arg(long, default_value = "rust")]
        target: Target,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            grammar,
            target,
            out,
            package,
            source_roots,
            config,
        } => {
            let args = commands::generate::GenerateArgs {
                grammar,
                target,
                out,
                package,
                source_roots,
                config,
            };
            commands::generate::cmd_generate(args, cli.output, cli.quiet);
        }
        Commands::Check { grammar, target } => {
            commands::check::cmd_check(&grammar, target, cli.output, cli.quiet);
        }
        Commands::Decode {
            grammar,
            intent,
            not_understood,
            slots,
            target,
        } => {
            commands::decode::cmd_decode(
                &grammar,
                &intent,
                !not_understood,
                slots,
                target,
                cli.output,
                cli.quiet,
            );
        }
    }
}

/// Logs go to stderr so generated source on stdout stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
