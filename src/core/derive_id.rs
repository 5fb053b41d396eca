//! Message identifier derivation.

use sha2::{Digest, Sha256};

use crate::core::{
    classify::{CallSite, DESCRIPTION_ARG, ID_ARG, MEANING_ARG, TEXT_ARG},
    error::{ExtractError, ExtractResult},
    semantic::SemanticModel,
    source_set::ParsedFile,
};

/// Number of hex characters kept from the digest.
const DIGEST_LEN: usize = 16;

/// Separates the hashed parts so `("ab", "c")` and `("a", "bc")` differ.
const PART_SEPARATOR: &str = "\u{1f}";

/// Computes the canonical identifier of a classified call-site.
pub trait IdDeriver: Send + Sync {
    fn derive(
        &self,
        call: &CallSite<'_>,
        file: &ParsedFile,
        model: &SemanticModel,
    ) -> ExtractResult<String>;
}

/// Honors an explicit id argument, otherwise hashes the message parts.
///
/// The digest covers the verbatim text of the message, meaning and
/// description arguments, so the same message always gets the same id and
/// the same text with a different meaning gets a different one.
#[derive(Debug, Default)]
pub struct DigestIdDeriver;

impl IdDeriver for DigestIdDeriver {
    fn derive(
        &self,
        call: &CallSite<'_>,
        file: &ParsedFile,
        model: &SemanticModel,
    ) -> ExtractResult<String> {
        if let Some(span) = call.arg_span(ID_ARG) {
            return match call.arg(ID_ARG) {
                Some(expr) if model.is_string_literal(expr) => {
                    Ok(strip_delimiters(file.text(span)).to_string())
                }
                _ => Err(ExtractError::Derivation {
                    file: file.path.to_string_lossy().to_string(),
                    offset: file.offset(call.span),
                    message: format!(
                        "explicit id must be a string literal, found `{}`",
                        file.text(span)
                    ),
                }),
            };
        }

        let part = |index: usize| call.arg_span(index).map_or("", |span| file.text(span));

        let mut hasher = Sha256::new();
        hasher.update(part(TEXT_ARG));
        hasher.update(PART_SEPARATOR);
        hasher.update(part(MEANING_ARG));
        hasher.update(PART_SEPARATOR);
        hasher.update(part(DESCRIPTION_ARG));

        Ok(to_hex(&hasher.finalize())[..DIGEST_LEN].to_string())
    }
}

/// Drop exactly one leading and one trailing character (the quotes of a
/// string literal's source form).
pub fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
