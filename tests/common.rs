extern crate render_tag;

use std::fs;
use std::path::Path;

use render_tag::{Environment, Error, Expr, Lexer, Map, Parser, Result, Token, TokenKind, Value};

/// A tiny host engine: reads the template from disk and substitutes every
/// `{{ key }}` occurrence with the matching payload value.
pub struct FileEnvironment;

impl Environment for FileEnvironment {
    fn render(&self, template: &Path, data: &Map<String, Value>) -> Result<String> {
        let source = fs::read_to_string(template)
            .map_err(|e| Error::chain(format!("Template `{}` not found", template.display()), e))?;

        let mut output = source;
        for (key, value) in data {
            let needle = format!("{{{{ {} }}}}", key);
            let replacement = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            output = output.replace(&needle, &replacement);
        }
        Ok(output)
    }
}

/// Host parser stand-in, scripted with the tokens and signature it should
/// hand out for a single tag.
pub struct ScriptedParser {
    tokens: Vec<Token>,
    signature: Vec<Expr>,
}

impl ScriptedParser {
    pub fn for_tag(tag: &str, signature: Vec<Expr>) -> ScriptedParser {
        ScriptedParser {
            tokens: vec![Token::new(TokenKind::Identifier, tag, 1, 3)],
            signature,
        }
    }
}

impl Parser for ScriptedParser {
    fn next_token(&mut self) -> Result<Token> {
        if self.tokens.is_empty() {
            return Err(Error::msg("unexpected end of input"));
        }
        Ok(self.tokens.remove(0))
    }

    fn parse_signature(
        &mut self,
        _terminators: Option<&[TokenKind]>,
        _allow_no_parens: bool,
    ) -> Result<Vec<Expr>> {
        Ok(self.signature.clone())
    }

    fn advance_after_block_end(&mut self, _tag: &str) -> Result<()> {
        Ok(())
    }
}

pub struct DefaultLexer;

impl Lexer for DefaultLexer {}
