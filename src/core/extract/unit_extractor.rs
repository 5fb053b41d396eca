use std::path::Path;

use swc_ecma_ast::{CallExpr, OptCall};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    classify::{CallClassifier, CallSite, DESCRIPTION_ARG, MEANING_ARG, TEXT_ARG},
    derive_id::{IdDeriver, strip_delimiters},
    error::{ExtractError, ExtractResult},
    extract::{SourceLocation, TranslationUnit},
    semantic::SemanticModel,
    source_set::ParsedFile,
};

/// Extracts translation units from parsed files using an injected
/// classifier and id deriver.
#[derive(Clone, Copy)]
pub struct Extractor<'a> {
    classifier: &'a dyn CallClassifier,
    deriver: &'a dyn IdDeriver,
}

impl<'a> Extractor<'a> {
    pub fn new(classifier: &'a dyn CallClassifier, deriver: &'a dyn IdDeriver) -> Self {
        Self {
            classifier,
            deriver,
        }
    }

    /// Walk `file` depth-first, pre-order, and collect one unit per i18n call.
    ///
    /// Matched calls are still descended into, so i18n calls nested in the
    /// arguments of another one are found too, after their parent.
    pub fn extract(
        &self,
        file: &ParsedFile,
        model: &SemanticModel,
        relativize: &dyn Fn(&Path) -> String,
    ) -> ExtractResult<Vec<TranslationUnit>> {
        let mut visitor = UnitVisitor {
            extractor: *self,
            file,
            model,
            file_name: relativize(&file.path),
            units: Vec::new(),
            error: None,
        };
        file.module.visit_with(&mut visitor);

        match visitor.error {
            Some(err) => Err(err),
            None => Ok(visitor.units),
        }
    }
}

struct UnitVisitor<'a> {
    extractor: Extractor<'a>,
    file: &'a ParsedFile,
    model: &'a SemanticModel,
    file_name: String,
    units: Vec<TranslationUnit>,
    /// First failure; once set the rest of the walk is skipped.
    error: Option<ExtractError>,
}

impl UnitVisitor<'_> {
    fn visit_call_site(&mut self, site: CallSite<'_>) {
        if let Err(err) = self.collect(&site) {
            self.error = Some(err.in_file(&self.file_name));
        }
    }

    fn collect(&mut self, site: &CallSite<'_>) -> ExtractResult<()> {
        let Extractor {
            classifier,
            deriver,
        } = self.extractor;

        if !classifier.classify(site, self.file, self.model)? {
            return Ok(());
        }

        let text_span = site
            .arg_span(TEXT_ARG)
            .ok_or_else(|| ExtractError::Classification {
                file: self.file_name.clone(),
                offset: self.file.offset(site.span),
                message: "missing message text argument".to_string(),
            })?;

        let id = deriver.derive(site, self.file, self.model)?;

        self.units.push(TranslationUnit {
            id,
            source_text: self.file.text(text_span).to_string(),
            location: SourceLocation {
                file: self.file_name.clone(),
                offset: self.file.offset(site.span),
            },
            meaning: self.note(site, MEANING_ARG),
            description: self.note(site, DESCRIPTION_ARG),
        });

        Ok(())
    }

    /// Text of a note argument, only when it is statically a string literal.
    fn note(&self, site: &CallSite<'_>, index: usize) -> Option<String> {
        let expr = site.arg(index)?;
        if !self.model.is_string_literal(expr) {
            return None;
        }
        let span = site.arg_span(index)?;
        Some(strip_delimiters(self.file.text(span)).to_string())
    }
}

impl Visit for UnitVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.error.is_some() {
            return;
        }
        self.visit_call_site(CallSite::from_call(node));
        node.visit_children_with(self);
    }

    fn visit_opt_call(&mut self, node: &OptCall) {
        if self.error.is_some() {
            return;
        }
        self.visit_call_site(CallSite::from_opt_call(node));
        node.visit_children_with(self);
    }
}
