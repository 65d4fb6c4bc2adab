extern crate render_tag;

use std::error::Error as StdError;
use std::path::Path;
use std::sync::Arc;

use render_tag::{Context, Environment, Error, Map, RenderExtension, Result, Value};
use tempfile::tempdir;

mod common;
use crate::common::FileEnvironment;

/// Host that always fails compiling its template.
struct BrokenSyntaxEnvironment;

impl Environment for BrokenSyntaxEnvironment {
    fn render(&self, _template: &Path, _data: &Map<String, Value>) -> Result<String> {
        Err(Error::msg("unexpected `%}` at line 3"))
    }
}

#[test]
fn missing_template_aborts_the_render() {
    let dir = tempdir().unwrap();
    let extension = RenderExtension::new(Arc::new(FileEnvironment), dir.path());

    let result = extension.render(&Context::new(), "missing.html", None, None);

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Template `{}` not found", dir.path().join("missing.html").display())
    );
    // the io failure stays available as the source
    assert!(err.source().is_some());
}

#[test]
fn host_failures_are_not_translated() {
    let extension = RenderExtension::new(Arc::new(BrokenSyntaxEnvironment), "/tpl");

    let result = extension.render(&Context::new(), "broken.html", None, None);

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "unexpected `%}` at line 3");
    assert!(err.source().is_none());
}
