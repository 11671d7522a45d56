//! CV Forge - a curated catalog of CV templates with live HTML previews
//!
//! This library provides the template catalog, a sample profile fixture,
//! a pure filter engine, eight structural layout renderers and a static
//! site generator for the gallery.
//!
//! # Example
//!
//! ```rust
//! use cv_forge::{catalog, profile, render_preview, Density};
//!
//! let template = catalog::builtin().get_by_slug("aurora-exec").unwrap();
//! let html = render_preview(template, profile::builtin(), Density::Full);
//! assert!(html.contains("cvf-layout-aurora"));
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod profile;
pub mod render;
pub mod site;
pub mod theme;

pub use catalog::{Catalog, Category, Layout, TemplateDefinition};
pub use error::ConfigurationError;
pub use filter::{filter, CategoryFilter, FilterState};
pub use profile::SampleProfile;
pub use render::{render_preview, render_preview_with_config, Density, HtmlConfig};
pub use site::{write_site, SiteError};
pub use theme::{Pattern, Theme};

/// Render the preview for a built-in template by slug.
///
/// Convenience entry point over [`catalog::builtin`] and
/// [`profile::builtin`]; returns `None` when the slug is not in the
/// catalog.
///
/// # Example
///
/// ```rust
/// use cv_forge::preview_by_slug;
///
/// let html = preview_by_slug("zenith-lead").unwrap();
/// assert!(html.contains("Valentina Ríos"));
/// assert!(preview_by_slug("no-such-template").is_none());
/// ```
pub fn preview_by_slug(slug: &str) -> Option<String> {
    let template = catalog::builtin().get_by_slug(slug)?;
    Some(render_preview(
        template,
        profile::builtin(),
        Density::Full,
    ))
}
