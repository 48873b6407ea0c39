//! TriggerMap CLI.
//!
//! # Commands
//! ```
//! triggermap map        --input <batch> [--format proto|jsonl] [--registry protocols|weaver]
//! triggermap encode     --input <batch.jsonl> --output <batch.bin>
//! triggermap registries [--json]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use triggermap_decoder::BatchFormat;
use triggermap_observability::{init_tracing, LogConfig};
use triggermap_registry::Source;

mod cmd_encode;
mod cmd_map;
mod cmd_registries;

#[derive(Parser)]
#[command(
    name = "triggermap",
    about = "Map blockchain trigger batches into typed records",
    version
)]
struct Cli {
    /// Global log level: trace | debug | info | warn | error
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a batch file and print the resulting records as JSON lines
    Map {
        /// Path to the batch file
        #[arg(short, long)]
        input: String,
        /// Batch encoding: proto | jsonl
        #[arg(long, default_value_t = BatchFormat::Proto)]
        format: BatchFormat,
        /// Schema registry to dispatch against: protocols | weaver
        #[arg(long, default_value_t = Source::Protocols)]
        registry: Source,
        /// Print only the batch summary, not the records
        #[arg(long)]
        summary: bool,
    },

    /// Convert a JSON-lines batch into the protobuf `Events` encoding
    Encode {
        /// Path to the JSON-lines batch
        #[arg(short, long)]
        input: String,
        /// Where to write the protobuf batch
        #[arg(short, long)]
        output: String,
    },

    /// List the compiled-in registries and their event types
    Registries {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&LogConfig {
        level: cli.log_level.clone(),
        json: cli.json_logs,
        ..LogConfig::default()
    });

    match cli.command {
        Commands::Map {
            input,
            format,
            registry,
            summary,
        } => cmd_map::run(&input, format, registry, summary),
        Commands::Encode { input, output } => cmd_encode::run(&input, &output),
        Commands::Registries { json } => cmd_registries::run(json),
    }
}
