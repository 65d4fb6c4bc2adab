use std::path::Path;
use std::sync::Arc;

use serde_json::value::{Map, Value};

use crate::ast::{CallExtension, Expr};
use crate::errors::Result;
use crate::extension::Extension;
use crate::lexer::{Token, TokenKind};

/// The host templating environment an extension delegates rendering to.
///
/// Implementations own template lookup, compilation and rendering, including
/// whatever file I/O that takes. The call is synchronous: it either returns
/// the rendered output or an error, nothing in between.
pub trait Environment: Sync + Send {
    /// Renders the template at `template` with `data` as its variables.
    fn render(&self, template: &Path, data: &Map<String, Value>) -> Result<String>;
}

/// Capabilities the host parser exposes to an extension while it parses one
/// of the extension's tags.
///
/// The parser is positioned right after the tag's opening `{%` when the
/// extension's `parse` is called.
pub trait Parser {
    /// Reads the next lexical token.
    fn next_token(&mut self) -> Result<Token>;

    /// Parses a call-style argument list at the current position.
    ///
    /// `terminators` limits the token kinds the signature may run up to;
    /// `None` leaves the decision to the parser. With `allow_no_parens` the
    /// argument list doesn't have to be wrapped in parentheses, which is how
    /// tag signatures are usually written.
    fn parse_signature(
        &mut self,
        terminators: Option<&[TokenKind]>,
        allow_no_parens: bool,
    ) -> Result<Vec<Expr>>;

    /// Skips past the `%}` closing the tag identified by `tag`.
    fn advance_after_block_end(&mut self, tag: &str) -> Result<()>;
}

/// Constructors for the host AST nodes an extension can produce.
pub trait NodeFactory {
    /// Builds the node that makes the host call back into `extension` at
    /// template-execution time.
    fn call_extension(
        &self,
        extension: Arc<dyn Extension>,
        label: &str,
        args: Vec<Expr>,
        content_args: Vec<Expr>,
    ) -> CallExtension;
}

/// The default node factory, handing out this crate's node types as-is.
#[derive(Debug, Default)]
pub struct Nodes;

impl NodeFactory for Nodes {
    fn call_extension(
        &self,
        extension: Arc<dyn Extension>,
        label: &str,
        args: Vec<Expr>,
        content_args: Vec<Expr>,
    ) -> CallExtension {
        CallExtension::new(extension, label, args, content_args)
    }
}
