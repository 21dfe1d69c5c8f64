//! Error types for template rendering.

use quick_xml::escape::EscapeError;
use thiserror::Error;

/// Errors raised while compiling or rendering an MRZ template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Placeholder name that matches no field or check digit.
    #[error("unresolved placeholder {{{{{name}}}}}")]
    UnresolvedPlaceholder { name: String },

    /// Template text the engine cannot compile, such as `{{` without `}}`.
    #[error("invalid template syntax: {0}")]
    Syntax(#[from] handlebars::TemplateError),

    #[error("failed to render template: {0}")]
    Engine(handlebars::RenderError),

    /// Literal template text holds an invalid entity reference.
    #[error("invalid entity in template text")]
    Markup(#[from] EscapeError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
