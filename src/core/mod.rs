//! Core extraction engine.
//!
//! A run flows through four stages:
//!
//! 1. **Load** (`source_set`, `file_scanner`, `parsers`, `semantic`): resolve
//!    the `.ts` files, parse them and build the semantic model.
//! 2. **Extract** (`extract`, `classify`, `derive_id`): walk each file and turn
//!    every recognized i18n call into a `TranslationUnit`.
//! 3. **Build** (`catalog::document`, `catalog::xml`): wrap all units into an
//!    XLIFF 1.2 document and serialize it.
//! 4. **Write** (`catalog::writer`): persist `messages.xlf`.
//!
//! `pipeline` chains the stages.

pub mod catalog;
pub mod classify;
pub mod derive_id;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;
pub mod semantic;
pub mod source_set;

pub use classify::{CallClassifier, CallSite, FunctionNameClassifier};
pub use derive_id::{DigestIdDeriver, IdDeriver};
pub use error::{ExtractError, ExtractResult, LoadError, WriteError};
pub use extract::{Extractor, SourceLocation, TranslationUnit};
pub use pipeline::{ExtractionOptions, ExtractionSummary, run_extraction};
pub use semantic::SemanticModel;
pub use source_set::{ParsedFile, SourceSet, load};
