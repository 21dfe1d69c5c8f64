//! Template rendering.
//!
//! A template is markup text with `{{field}}` and `{{check.field}}`
//! placeholders, rendered by handlebars in strict mode. Markup output keeps
//! `<br>` line breaks and escapes the filler in substituted values; text
//! output turns `<br>` into `\n` and decodes entities.

use std::fmt;

use handlebars::{Handlebars, RenderErrorReason, no_escape, to_json};
use quick_xml::escape::unescape;
use serde::Serialize;

use mrz_model::layout::LINE_BREAK;
use mrz_model::{EncodedFieldSet, Placeholder};

use crate::error::{RenderError, Result};

const TEMPLATE_NAME: &str = "mrz";

/// A compiled template. Compiling renders once against an empty field set,
/// so every placeholder is known to resolve.
pub struct Template {
    source: String,
    markup: Handlebars<'static>,
    text: Handlebars<'static>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let mut markup = registry();
        markup.register_escape_fn(escape_filler);
        markup.register_template_string(TEMPLATE_NAME, source)?;

        let mut text = registry();
        text.register_escape_fn(no_escape);
        text.register_template_string(TEMPLATE_NAME, source.replace(LINE_BREAK, "\n"))?;

        let template = Self {
            source: source.to_string(),
            markup,
            text,
        };
        template.render(&EncodedFieldSet::default(), true)?;
        Ok(template)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether rendering reads `placeholder`.
    pub fn references(&self, placeholder: Placeholder) -> bool {
        let mut data = to_json(EncodedFieldSet::default());
        let removed = match placeholder {
            Placeholder::Field(field) => data
                .as_object_mut()
                .and_then(|map| map.remove(field.as_str())),
            Placeholder::Check(check) => data
                .get_mut("check")
                .and_then(|checks| checks.as_object_mut())
                .and_then(|map| map.remove(check.as_str())),
        };
        removed.is_some()
            && matches!(
                render_with(&self.text, &data),
                Err(RenderError::UnresolvedPlaceholder { .. })
            )
    }

    pub fn render(&self, fields: &EncodedFieldSet, text_only: bool) -> Result<String> {
        if text_only {
            let rendered = render_with(&self.text, fields)?;
            Ok(unescape(&rendered)?.into_owned())
        } else {
            render_with(&self.markup, fields)
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

fn render_with<T: Serialize>(registry: &Handlebars<'static>, data: &T) -> Result<String> {
    registry.render(TEMPLATE_NAME, data).map_err(|err| {
        if let RenderErrorReason::MissingVariable(Some(path)) = err.reason() {
            return RenderError::UnresolvedPlaceholder { name: path.clone() };
        }
        RenderError::Engine(err)
    })
}

fn registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
}

/// Values hold only `A-Z0-9<`; the filler is the one character markup
/// needs escaped.
fn escape_filler(value: &str) -> String {
    value.replace('<', "&lt;")
}

/// Render `template` against `fields`.
///
/// With `text_only` the result is plain text with `\n` between lines;
/// otherwise markup with `<br>` and `&lt;`.
pub fn render(template: &str, fields: &EncodedFieldSet, text_only: bool) -> Result<String> {
    Template::parse(template)?.render(fields, text_only)
}
