//! Source file parsers.
//!
//! - `typescript`: TypeScript source parser (uses swc for AST generation)

pub mod typescript;
