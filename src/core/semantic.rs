//! Whole-program semantic facts consumed by the classifier and id deriver.
//!
//! There is no TypeScript type checker here. The model answers the narrow set
//! of questions extraction actually asks: which expressions are statically
//! string-literal typed, and under which local names each file imports a
//! function.

use std::collections::HashMap;

use swc_ecma_ast::{
    Expr, ImportDecl, ImportSpecifier, Lit, Module, ModuleDecl, ModuleExportName, ModuleItem,
};

/// One named import binding: `import { imported as local_name } from "module_path"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    pub local_name: String,
    pub imported_name: String,
    pub module_path: String,
}

pub type FileImports = Vec<ImportInfo>;

/// Semantic facts for every file of a source set, indexed by file id.
#[derive(Debug, Default)]
pub struct SemanticModel {
    imports: HashMap<usize, FileImports>,
}

impl SemanticModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the import bindings of one parsed module.
    pub fn register_module(&mut self, file_id: usize, module: &Module) {
        let imports = collect_imports(module);
        if !imports.is_empty() {
            self.imports.insert(file_id, imports);
        }
    }

    pub fn imports(&self, file_id: usize) -> &[ImportInfo] {
        self.imports.get(&file_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve a local identifier to the name it was imported under, if any.
    pub fn imported_name(&self, file_id: usize, local_name: &str) -> Option<&str> {
        self.imports(file_id)
            .iter()
            .find(|i| i.local_name == local_name)
            .map(|i| i.imported_name.as_str())
    }

    /// Whether the static type of `expr` is a string literal type.
    ///
    /// Only quoted string literals and template literals without substitutions
    /// qualify. Identifiers, member accesses and computed expressions widen to
    /// `string` and never do.
    pub fn is_string_literal(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Lit(Lit::Str(_)) => true,
            Expr::Tpl(tpl) => tpl.exprs.is_empty(),
            _ => false,
        }
    }
}

fn collect_imports(module: &Module) -> FileImports {
    let mut imports = Vec::new();
    for item in &module.body {
        if let ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) = item {
            collect_import(decl, &mut imports);
        }
    }
    imports
}

fn collect_import(node: &ImportDecl, imports: &mut FileImports) {
    let Some(module_path) = node.src.value.as_str() else {
        return;
    };

    for specifier in &node.specifiers {
        if let ImportSpecifier::Named(named) = specifier {
            let local_name = named.local.sym.to_string();
            let imported_name = named
                .imported
                .as_ref()
                .map(|i| match i {
                    ModuleExportName::Ident(ident) => ident.sym.to_string(),
                    ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                })
                .unwrap_or_else(|| local_name.clone());

            imports.push(ImportInfo {
                local_name,
                imported_name,
                module_path: module_path.to_string(),
            });
        }
    }
}
