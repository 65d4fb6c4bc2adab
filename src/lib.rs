#![doc(html_root_url = "https://docs.rs/render-tag")]
//! # render-tag
//!
//! A `{% render %}` tag extension for Jinja2-like template engines.
//!
//! The tag invokes the rendering of another template file with computed data
//! and, optionally, the caller's bound variables:
//!
//! ```text
//! {% render "partials/user_card.html", user_data %}
//! ```
//!
//! The extension itself stays small on purpose: it registers the `render`
//! keyword with the host parser, captures the call-site arguments, resolves
//! the target file against a configured base directory and delegates the
//! actual rendering back to the host environment. The output comes back
//! wrapped in [`SafeString`] so the host doesn't escape it a second time.
//!
//! The host engine is abstracted behind small capability traits —
//! [`Environment`] for rendering, [`Parser`] and [`NodeFactory`] for the
//! compile phase, [`Lexer`] for delimiter introspection — so the extension
//! can be wired into any engine that can implement them.
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use render_tag::{Context, Environment, Map, RenderExtension, Result, Value};
//!
//! // A stand-in for a real engine: echoes what it was asked to render.
//! struct EchoEnvironment;
//!
//! impl Environment for EchoEnvironment {
//!     fn render(&self, template: &Path, data: &Map<String, Value>) -> Result<String> {
//!         Ok(format!("{} with {} values", template.display(), data.len()))
//!     }
//! }
//!
//! let extension = RenderExtension::new(Arc::new(EchoEnvironment), "/templates");
//! let output = extension.render(&Context::new(), "page.html", None, None).unwrap();
//! assert_eq!(output.as_str(), "/templates/page.html with 0 values");
//! ```

mod ast;
mod context;
mod engine;
mod errors;
mod extension;
mod lexer;
mod utils;

// Library exports.

pub use crate::ast::{CallExtension, Expr, ExprVal};
pub use crate::context::Context;
pub use crate::engine::{Environment, NodeFactory, Nodes, Parser};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::extension::{Extension, RenderExtension, RenderOptions};
pub use crate::lexer::{Lexer, Token, TokenKind};
pub use crate::utils::SafeString;
// Re-export Value and other useful things from serde
// so hosts can encode payload data in template types
pub use serde_json::value::{from_value, to_value, Map, Number, Value};
