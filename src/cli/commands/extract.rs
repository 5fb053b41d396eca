use std::path::Path;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    cli::args::ExtractCommand,
    config::load_config,
    core::{DigestIdDeriver, ExtractionOptions, FunctionNameClassifier, run_extraction},
};

/// Run an extraction from `cwd`.
///
/// Configuration priority: CLI flags > `.xliffrc.json` > defaults. Paths
/// given on the command line resolve against `cwd`, paths from the config
/// file against the file's directory.
pub fn extract(cmd: ExtractCommand, cwd: &Path) -> Result<CommandResult> {
    let args = cmd.args;
    let verbose = args.verbose;

    let loaded = load_config(cwd)?;
    if verbose && !loaded.from_file {
        eprintln!("Note: No .xliffrc.json found, using default configuration");
    }

    let project_dir = match &args.project_dir {
        Some(dir) => cwd.join(dir),
        None => loaded.resolve(&loaded.config.project_dir),
    };
    let output_dir = match &args.output_dir {
        Some(dir) => cwd.join(dir),
        None => loaded.resolve(&loaded.config.output_dir),
    };

    let mut config = loaded.config;
    if let Some(source_lang) = args.source_lang {
        config.source_lang = source_lang;
    }
    if !args.ignore.is_empty() {
        config.ignore = args.ignore;
    }
    if !args.functions.is_empty() {
        config.functions = args.functions;
    }
    config.validate()?;

    let options = ExtractionOptions {
        project_dir,
        output_dir,
        source_lang: config.source_lang,
        ignore: config.ignore,
        verbose,
    };
    let classifier = FunctionNameClassifier::new(config.functions);

    let summary = run_extraction(&options, &classifier, &DigestIdDeriver)
        .with_context(|| format!("Extraction from {} failed", options.project_dir.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            unit_count: summary.unit_count(),
            file_count: summary.file_count,
            output_path: summary.output_path,
        }),
    })
}
