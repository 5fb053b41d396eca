//! Translation unit extraction: one AST walk per source file.

pub mod translation_unit;
pub mod unit_extractor;


pub use translation_unit::{SourceLocation, TranslationUnit};
pub use unit_extractor::Extractor;
