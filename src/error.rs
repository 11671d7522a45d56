//! Error types for catalog construction and validation

use thiserror::Error;

/// Errors raised while building or validating a template catalog.
///
/// All of these are build-time/startup defects: a catalog that fails
/// validation is rejected outright rather than rendered with a silent
/// fallback, since a bad theme could produce illegible output.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Two templates declare the same slug
    #[error("duplicate template slug: {slug}")]
    DuplicateSlug { slug: String },

    /// A theme color field is empty or not a CSS color expression
    #[error("template '{slug}': {field} is not a CSS color expression: {value:?}")]
    InvalidColor {
        slug: String,
        field: &'static str,
        value: String,
    },

    /// The accent gradient is not a CSS gradient expression
    #[error("template '{slug}': accent_gradient is not a gradient expression: {value:?}")]
    InvalidGradient { slug: String, value: String },

    /// A surface-level color contradicts the declared dark-mode flag
    #[error("template '{slug}': {field} {value:?} contradicts dark = {dark}")]
    ContrastMismatch {
        slug: String,
        field: &'static str,
        value: String,
        dark: bool,
    },

    /// Error reading a catalog or profile file
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing catalog or profile TOML. Unknown layout or category
    /// names surface here, since both deserialize into closed enums.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
