use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::value::{Map, Value};

use crate::ast::CallExtension;
use crate::context::Context;
use crate::engine::{Environment, NodeFactory, Parser};
use crate::errors::Result;
use crate::lexer::Lexer;
use crate::utils::SafeString;

/// Key the caller's bound variables are injected under when
/// `include_context` is enabled.
const CONTEXT_KEY: &str = "context";

/// A custom tag recognized by the host engine's parser.
///
/// The host registers the extension once, routes every occurrence of one of
/// its `tags` in template source to `parse`, and dispatches the node that
/// `parse` returns back to the extension at template-execution time.
pub trait Extension: Sync + Send {
    /// The tag keywords this extension handles.
    fn tags(&self) -> &'static [&'static str];

    /// Called by the host compiler with the parser positioned right after
    /// the opening `{%` of one of the declared tags.
    fn parse(
        self: Arc<Self>,
        parser: &mut dyn Parser,
        nodes: &dyn NodeFactory,
        lexer: &dyn Lexer,
    ) -> Result<CallExtension>;
}

/// Options recognized by [`RenderExtension::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Merge the caller's bound variables into the data payload under the
    /// reserved `context` key. Defaults to `false`.
    pub include_context: bool,
}

/// The `{% render %}` tag: renders another template file with computed data.
///
/// ```text
/// {% render "partials/user_card.html", user_data %}
/// ```
///
/// The extension resolves the file against its configured base directory,
/// hands the data to the host environment's render pipeline and returns the
/// output pre-escaped so the enclosing template inserts it verbatim.
pub struct RenderExtension {
    environment: Arc<dyn Environment>,
    template_path: PathBuf,
}

impl RenderExtension {
    const TAGS: &'static [&'static str] = &["render"];

    /// Creates the extension with the host environment used to render
    /// sub-templates and the base directory template references are resolved
    /// against. Both are fixed for the lifetime of the extension.
    pub fn new(environment: Arc<dyn Environment>, template_path: impl Into<PathBuf>) -> Self {
        Self { environment, template_path: template_path.into() }
    }

    /// Renders `template_file` with `data` and returns the output as a
    /// pre-escaped string.
    ///
    /// Invoked by the host's generated call-extension code at
    /// template-execution time; `context` is the caller's bound variables,
    /// supplied by the host. A missing `data` means an empty payload and
    /// missing `options` keep the context out of the payload.
    ///
    /// With `include_context` the payload starts from the caller's bound
    /// variables under the `context` key before the explicit `data` fields
    /// are laid on top, so on a key collision the explicit field wins.
    pub fn render(
        &self,
        context: &Context,
        template_file: &str,
        data: Option<Map<String, Value>>,
        options: Option<RenderOptions>,
    ) -> Result<SafeString> {
        let data = data.unwrap_or_default();
        let options = options.unwrap_or_default();

        let template = self.full_template_path(template_file);
        let payload = if options.include_context {
            let mut payload = Map::new();
            payload.insert(CONTEXT_KEY.to_string(), context.clone().into_json());
            payload.extend(data);
            payload
        } else {
            data
        };

        let output = self.environment.render(&template, &payload)?;
        Ok(SafeString::from(output))
    }

    /// Joins a template file reference with the configured base directory.
    fn full_template_path(&self, template_file: &str) -> PathBuf {
        self.template_path.join(template_file)
    }
}

impl Extension for RenderExtension {
    fn tags(&self) -> &'static [&'static str] {
        Self::TAGS
    }

    fn parse(
        self: Arc<Self>,
        parser: &mut dyn Parser,
        nodes: &dyn NodeFactory,
        _lexer: &dyn Lexer,
    ) -> Result<CallExtension> {
        let tok = parser.next_token()?;

        // No terminator set; tag signatures are written without parentheses
        let args = parser.parse_signature(None, true)?;
        parser.advance_after_block_end(&tok.value)?;

        Ok(nodes.call_extension(self, &tok.value, args, Vec::new()))
    }
}
