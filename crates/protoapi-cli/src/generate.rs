//! Generate command implementation
//!
//! Configuration is layered, later sources winning: defaults, the
//! `--config` file, the request's compiler-plugin parameter, then flags.

use anyhow::{Context, Result};
use protoapi_codegen::{Generator, OutputFiles};
use protoapi_core::{GeneratorConfig, SchemaRequest};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Arguments of `protoapi generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub lang: Option<String>,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub log_level: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let request = read_request(&args.input)?;
    let config = resolve_config(&args, &request)?;

    protoapi_logging::init_logging(config.log_level()?);
    tracing::debug!(?config, "resolved configuration");

    let files = Generator::from_config(&config)
        .generate(&config.backend, &request)
        .with_context(|| format!("Failed to generate {} output", config.backend))?;

    write_files(&config.output_dir, &files)?;
    tracing::info!(
        files = files.len(),
        output = %config.output_dir.display(),
        "generation complete"
    );
    Ok(())
}

/// Read and parse the schema request from a file or stdin.
fn read_request(input: &Path) -> Result<SchemaRequest> {
    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read schema request from stdin")?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?
    };

    SchemaRequest::from_json(&bytes)
        .with_context(|| format!("Failed to parse schema request {}", input.display()))
}

/// Merge every configuration source for this run.
pub fn resolve_config(args: &GenerateArgs, request: &SchemaRequest) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(parameter) = &request.parameter {
        config
            .apply_parameter(parameter)
            .context("Invalid compiler-plugin parameter")?;
    }

    if let Some(lang) = &args.lang {
        config.backend = lang.clone();
    }
    if let Some(dir) = &args.template_dir {
        config.template_dir = Some(dir.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }

    Ok(config)
}

/// Write every generated file below `root`, creating directories as needed.
///
/// Called only with a complete file set.
pub fn write_files(root: &Path, files: &OutputFiles) -> Result<()> {
    for (name, content) in files.iter() {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(file = %path.display(), "wrote file");
    }
    Ok(())
}
