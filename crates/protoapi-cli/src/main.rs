//! protoapi CLI - Multi-target code generator
//!
//! Commands:
//! - `protoapi generate` - Generate files for one backend from a schema request
//! - `protoapi backends` - List the available backends
//! - `protoapi templates` - List the embedded template keys

use clap::{Parser, Subcommand};
use protoapi_core::GenerateError;
use std::path::PathBuf;
use std::process::ExitCode;

mod generate;

#[derive(Parser)]
#[command(name = "protoapi")]
#[command(author, version, about = "Generate API stubs from a protocol schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate files for one backend
    Generate {
        /// Backend name (ts, ts-axios, ts-fetch, echo, spring, php)
        #[arg(short, long)]
        lang: Option<String>,

        /// Schema request as JSON, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read templates from this directory instead of the embedded ones
        #[arg(short, long)]
        template_dir: Option<PathBuf>,

        /// Path to a protoapi.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log level (trace, debug, info, warn, error, off)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// List available backends
    Backends,

    /// List embedded template keys
    Templates,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            lang,
            input,
            output,
            template_dir,
            config,
            log_level,
        } => generate::run(generate::GenerateArgs {
            lang,
            input,
            output,
            template_dir,
            config,
            log_level,
        }),
        Commands::Backends => {
            for name in protoapi_codegen::BackendRegistry::with_defaults().names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Templates => {
            for key in protoapi_assets::AssetStore::embedded().keys() {
                println!("{key}");
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<GenerateError>()
                .map_or(1, |e| 10 + e.error_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
