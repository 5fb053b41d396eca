//! The extraction run: load → extract → build → write.
//!
//! Every step either succeeds or aborts the whole run. The catalog is only
//! written once every file has been extracted, so a failure anywhere leaves
//! any previous `messages.xlf` untouched.

use std::path::PathBuf;

use colored::Colorize;
use rayon::prelude::*;

use crate::core::{
    catalog,
    classify::CallClassifier,
    derive_id::IdDeriver,
    error::ExtractResult,
    extract::{Extractor, TranslationUnit},
    source_set::{SourceSet, load},
};

/// Inputs of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    pub project_dir: PathBuf,
    pub output_dir: PathBuf,
    pub source_lang: String,
    pub ignore: Vec<String>,
    pub verbose: bool,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct ExtractionSummary {
    pub units: Vec<TranslationUnit>,
    /// Source files analyzed (declaration files excluded).
    pub file_count: usize,
    pub output_path: PathBuf,
}

impl ExtractionSummary {
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}

pub fn run_extraction(
    options: &ExtractionOptions,
    classifier: &dyn CallClassifier,
    deriver: &dyn IdDeriver,
) -> ExtractResult<ExtractionSummary> {
    let source_set = load(&options.project_dir, &options.ignore, options.verbose)?;

    if options.verbose {
        eprintln!(
            "Loaded {} source file(s) from {}",
            source_set.len(),
            options.project_dir.display()
        );
    }

    let (units, file_count) = extract_units(&source_set, Extractor::new(classifier, deriver))?;

    if options.verbose {
        for unit in &units {
            eprintln!(
                "  {} {}:{} {}",
                unit.id.cyan(),
                unit.location.file,
                unit.location.offset,
                unit.source_text.dimmed()
            );
        }
    }

    let xml = catalog::build(&options.source_lang, &units).to_xml_string();
    let output_path = catalog::write(&options.output_dir, &xml)?;

    Ok(ExtractionSummary {
        units,
        file_count,
        output_path,
    })
}

/// Extract every non-declaration file and concatenate the per-file lists
/// in enumeration order.
///
/// Files are processed in parallel; collecting the indexed results restores
/// the enumeration order before concatenation.
pub fn extract_units(
    source_set: &SourceSet,
    extractor: Extractor<'_>,
) -> ExtractResult<(Vec<TranslationUnit>, usize)> {
    let relativize = |path: &std::path::Path| source_set.relativize(path);

    let per_file = source_set
        .files()
        .par_iter()
        .filter(|file| !file.is_declaration)
        .map(|file| extractor.extract(file, source_set.model(), &relativize))
        .collect::<ExtractResult<Vec<_>>>()?;

    let file_count = per_file.len();
    Ok((per_file.into_iter().flatten().collect(), file_count))
}
