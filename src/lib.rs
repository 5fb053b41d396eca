//! xliff-extract - i18n message extraction for TypeScript projects
//!
//! Walks the syntax tree of every `.ts` file in a project, collects the
//! messages passed to i18n calls such as `i18n("Hello", "description",
//! "meaning")`, and writes them as an XLIFF 1.2 catalog (`messages.xlf`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (load, extract, build, write)

pub mod cli;
pub mod config;
pub mod core;
