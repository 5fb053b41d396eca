//! Recognition of i18n call-sites.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, MemberExpr, MemberProp, OptCall, OptChainBase,
};

use crate::core::{
    error::{ExtractError, ExtractResult},
    semantic::SemanticModel,
    source_set::ParsedFile,
};

/// Default name of the i18n function.
pub const DEFAULT_FUNCTION: &str = "i18n";

/// Positional arguments of an i18n call, in source order.
pub const TEXT_ARG: usize = 0;
pub const DESCRIPTION_ARG: usize = 1;
pub const MEANING_ARG: usize = 2;
pub const ID_ARG: usize = 3;

/// A borrowed view over a plain (`f(..)`) or optional (`f?.(..)`) call.
#[derive(Clone, Copy)]
pub struct CallSite<'a> {
    pub span: Span,
    pub callee: Option<&'a Expr>,
    pub args: &'a [ExprOrSpread],
}

impl<'a> CallSite<'a> {
    pub fn from_call(call: &'a CallExpr) -> Self {
        let callee = match &call.callee {
            Callee::Expr(expr) => Some(&**expr),
            Callee::Super(_) | Callee::Import(_) => None,
        };
        Self {
            span: call.span,
            callee,
            args: &call.args,
        }
    }

    pub fn from_opt_call(call: &'a OptCall) -> Self {
        Self {
            span: call.span,
            callee: Some(&*call.callee),
            args: &call.args,
        }
    }

    /// Non-spread argument at `index`.
    pub fn arg(&self, index: usize) -> Option<&'a Expr> {
        self.args
            .get(index)
            .filter(|arg| arg.spread.is_none())
            .map(|arg| &*arg.expr)
    }

    /// Span of the argument expression at `index`, spread or not.
    pub fn arg_span(&self, index: usize) -> Option<Span> {
        self.args.get(index).map(|arg| arg.expr.span())
    }
}

/// Decides whether a call-site is an i18n invocation.
pub trait CallClassifier: Send + Sync {
    fn classify(
        &self,
        call: &CallSite<'_>,
        file: &ParsedFile,
        model: &SemanticModel,
    ) -> ExtractResult<bool>;
}

/// Matches calls by callee name.
///
/// A call is recognized when its callee is:
/// - an identifier equal to one of the configured names: `i18n("Hi")`
/// - an identifier imported under one of them: `import { i18n as t } ...; t("Hi")`
/// - a member access whose property is one of them: `this.i18n("Hi")`
pub struct FunctionNameClassifier {
    functions: Vec<String>,
}

impl FunctionNameClassifier {
    pub fn new(functions: Vec<String>) -> Self {
        Self { functions }
    }

    fn is_i18n_name(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    fn matches_callee(&self, callee: &Expr, file: &ParsedFile, model: &SemanticModel) -> bool {
        match callee {
            Expr::Ident(ident) => {
                let name = ident.sym.as_str();
                self.is_i18n_name(name)
                    || model
                        .imported_name(file.id, name)
                        .is_some_and(|imported| self.is_i18n_name(imported))
            }
            Expr::Member(member) => self.matches_member(member),
            Expr::OptChain(chain) => match &*chain.base {
                OptChainBase::Member(member) => self.matches_member(member),
                OptChainBase::Call(_) => false,
            },
            _ => false,
        }
    }

    fn matches_member(&self, member: &MemberExpr) -> bool {
        match &member.prop {
            MemberProp::Ident(prop) => self.is_i18n_name(prop.sym.as_str()),
            _ => false,
        }
    }
}

impl Default for FunctionNameClassifier {
    fn default() -> Self {
        Self::new(vec![DEFAULT_FUNCTION.to_string()])
    }
}

impl CallClassifier for FunctionNameClassifier {
    fn classify(
        &self,
        call: &CallSite<'_>,
        file: &ParsedFile,
        model: &SemanticModel,
    ) -> ExtractResult<bool> {
        let Some(callee) = call.callee else {
            return Ok(false);
        };
        if !self.matches_callee(callee, file, model) {
            return Ok(false);
        }

        let message = match call.args.first() {
            None => Some("missing message text argument"),
            Some(arg) if arg.spread.is_some() => Some("message text cannot be a spread argument"),
            Some(_) => None,
        };
        if let Some(message) = message {
            return Err(ExtractError::Classification {
                file: file.path.to_string_lossy().to_string(),
                offset: file.offset(call.span),
                message: message.to_string(),
            });
        }

        Ok(true)
    }
}
