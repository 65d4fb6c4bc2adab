use std::fmt;
use std::sync::Arc;

use crate::extension::Extension;

/// A literal or identifier appearing in a tag's argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprVal {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Ident(String),
}

/// An expression parsed out of a tag signature by the host parser.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub val: ExprVal,
    pub negated: bool,
}

impl Expr {
    pub fn new(val: ExprVal) -> Expr {
        Expr { val, negated: false }
    }

    pub fn new_negated(val: ExprVal) -> Expr {
        Expr { val, negated: true }
    }
}

/// The "call this extension" node handed back to the host compiler.
///
/// Carries everything the host's generated code needs at execution time: the
/// extension instance to dispatch to, the tag keyword it was invoked as, the
/// positional argument expressions, and the arguments of a nested content
/// block for tags that have one.
pub struct CallExtension {
    /// The extension instance the host dispatches to at render time
    pub extension: Arc<dyn Extension>,
    /// The tag token text captured at the call site, e.g. `render`
    pub label: String,
    /// Positional call arguments
    pub args: Vec<Expr>,
    /// Arguments of the nested `{% ... %}...{% end... %}` content block.
    /// Empty for tags that take no block content.
    pub content_args: Vec<Expr>,
}

impl CallExtension {
    pub fn new(
        extension: Arc<dyn Extension>,
        label: &str,
        args: Vec<Expr>,
        content_args: Vec<Expr>,
    ) -> CallExtension {
        CallExtension { extension, label: label.to_owned(), args, content_args }
    }
}

impl fmt::Debug for CallExtension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CallExtension")
            .field("tags", &self.extension.tags())
            .field("label", &self.label)
            .field("args", &self.args)
            .field("content_args", &self.content_args)
            .finish()
    }
}
