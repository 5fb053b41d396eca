//! Source set loading: file enumeration, parsing and the semantic model.

use std::{
    fs,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use rayon::prelude::*;
use swc_common::{BytePos, SourceMap, Span};
use swc_ecma_ast::Module;

use crate::core::{
    error::LoadError,
    file_scanner::{is_declaration_file, scan_files},
    parsers::typescript::parse_typescript_source,
    semantic::SemanticModel,
};

/// One parsed source file of a [`SourceSet`].
pub struct ParsedFile {
    /// Position of this file in enumeration order.
    pub id: usize,
    pub path: PathBuf,
    /// File contents without a leading byte-order mark; spans index into this.
    pub code: String,
    pub module: Module,
    pub is_declaration: bool,
    start_pos: BytePos,
}

impl ParsedFile {
    fn byte_range(&self, span: Span) -> (usize, usize) {
        let lo = (span.lo.0 - self.start_pos.0) as usize;
        let hi = (span.hi.0 - self.start_pos.0) as usize;
        (lo, hi)
    }

    /// Verbatim source text covered by `span`.
    pub fn text(&self, span: Span) -> &str {
        let (lo, hi) = self.byte_range(span);
        &self.code[lo..hi]
    }

    /// Offset of the first character of `span`, in UTF-16 code units.
    pub fn offset(&self, span: Span) -> usize {
        let (lo, _) = self.byte_range(span);
        self.code[..lo].encode_utf16().count()
    }
}

/// The resolved files of one extraction run and the model spanning them.
pub struct SourceSet {
    root: PathBuf,
    files: Vec<ParsedFile>,
    model: SemanticModel,
}

impl SourceSet {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All files, in enumeration order.
    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn model(&self) -> &SemanticModel {
        &self.model
    }

    /// Path of `path` relative to the project root, `/`-separated.
    pub fn relativize(&self, path: &Path) -> String {
        relative_path(&self.root, path)
    }
}

pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve, read and parse every source file under `root_dir`.
///
/// Files are read and parsed in parallel; the resulting set keeps the
/// enumeration order produced by the scanner.
pub fn load(
    root_dir: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<SourceSet, LoadError> {
    let paths = scan_files(root_dir, ignore_patterns, verbose)?;

    let files = paths
        .into_par_iter()
        .enumerate()
        .map(|(id, path)| parse_file(id, path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut model = SemanticModel::new();
    for file in &files {
        model.register_module(file.id, &file.module);
    }

    Ok(SourceSet {
        root: root_dir.to_path_buf(),
        files,
        model,
    })
}

/// UTF-8 byte-order mark, dropped before parsing.
const BOM: char = '\u{feff}';

fn parse_file(id: usize, path: PathBuf) -> Result<ParsedFile, LoadError> {
    let mut code = fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    if code.starts_with(BOM) {
        code.replace_range(..BOM.len_utf8(), "");
    }
    let is_declaration = is_declaration_file(&path);

    // Each file gets its own SourceMap so parsing can run on any thread.
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_typescript_source(
        code.clone(),
        &path.to_string_lossy(),
        is_declaration,
        source_map,
    )
    .map_err(|message| LoadError::Parse {
        path: path.clone(),
        message,
    })?;

    Ok(ParsedFile {
        id,
        path,
        code,
        module: parsed.module,
        is_declaration,
        start_pos: parsed.start_pos,
    })
}
