/// Where a message was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path relative to the project root.
    pub file: String,
    /// Character offset of the call-site's first character.
    pub offset: usize,
}

/// One extracted message.
///
/// Built once per recognized call-site and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub id: String,
    /// Verbatim source form of the message argument, quotes included.
    pub source_text: String,
    pub location: SourceLocation,
    pub meaning: Option<String>,
    pub description: Option<String>,
}
