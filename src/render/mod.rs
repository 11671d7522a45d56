//! Layout dispatch and preview rendering
//!
//! The dispatcher maps a template's [`Layout`](crate::catalog::Layout) to
//! exactly one of the eight structural renderers. The mapping is an
//! exhaustive match over a closed enum, total and fixed at compile time:
//! adding a ninth layout will not build until every arm exists, and there
//! is no runtime registration or default fallback.

pub mod html;
mod layouts;
mod sections;

pub use html::HtmlBuilder;

use crate::catalog::{Layout, TemplateDefinition};
use crate::profile::SampleProfile;

/// Rendering density accepted by every layout renderer.
///
/// Today every renderer treats both values identically; the parameter is an
/// extension point for tighter gallery-card previews, kept rather than
/// guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    #[default]
    Full,
    Compact,
}

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Prefix for CSS class names (e.g. "cvf-" for "cvf-hero")
    pub class_prefix: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            class_prefix: Some("cvf-".to_string()),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

/// Render a template preview with default configuration
pub fn render_preview(
    template: &TemplateDefinition,
    profile: &SampleProfile,
    density: Density,
) -> String {
    render_preview_with_config(template, profile, density, HtmlConfig::default())
}

/// Render a template preview with custom output configuration.
///
/// Dispatches on `template.layout`; each renderer is a pure function of
/// (template, profile, density) and arranges the same profile fields into
/// its own structure, applying the template's theme tokens.
pub fn render_preview_with_config(
    template: &TemplateDefinition,
    profile: &SampleProfile,
    density: Density,
    config: HtmlConfig,
) -> String {
    let mut builder = HtmlBuilder::new(config);
    match template.layout {
        Layout::Aurora => layouts::aurora(&mut builder, template, profile, density),
        Layout::Zenith => layouts::zenith(&mut builder, template, profile, density),
        Layout::Atlas => layouts::atlas(&mut builder, template, profile, density),
        Layout::Pulse => layouts::pulse(&mut builder, template, profile, density),
        Layout::Prism => layouts::prism(&mut builder, template, profile, density),
        Layout::Halo => layouts::halo(&mut builder, template, profile, density),
        Layout::Orbit => layouts::orbit(&mut builder, template, profile, density),
        Layout::Mosaic => layouts::mosaic(&mut builder, template, profile, density),
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, profile};

    #[test]
    fn test_every_layout_surfaces_core_profile_fields() {
        let profile = profile::builtin();
        for layout in Layout::ALL {
            let template = catalog::builtin()
                .templates()
                .iter()
                .find(|t| t.layout == layout)
                .expect("builtin catalog covers every layout");
            let html = render_preview(template, profile, Density::Full);

            assert!(html.contains(&profile.name), "{layout}: name missing");
            assert!(
                html.contains(&html::escape_html(&profile.title)),
                "{layout}: title missing"
            );
            assert!(html.contains(&profile.location), "{layout}: location missing");
            for experience in &profile.experience {
                assert!(
                    html.contains(&experience.company),
                    "{layout}: company {} missing",
                    experience.company
                );
                assert!(
                    html.contains(&experience.role),
                    "{layout}: role {} missing",
                    experience.role
                );
            }
            for entry in &profile.education {
                assert!(
                    html.contains(&entry.institution),
                    "{layout}: education {} missing",
                    entry.institution
                );
            }
            for list in [
                &profile.skills,
                &profile.tools,
                &profile.languages,
                &profile.interests,
                &profile.certifications,
            ] {
                for item in list.iter() {
                    assert!(
                        html.contains(&html::escape_html(item)),
                        "{layout}: list item {item:?} missing"
                    );
                }
            }
            for contact in profile.contacts.iter().chain(profile.links.iter()) {
                assert!(
                    html.contains(&contact.value),
                    "{layout}: contact {} missing",
                    contact.value
                );
            }
        }
    }

    #[test]
    fn test_theme_tokens_flow_into_output() {
        let catalog = catalog::builtin();
        let template = catalog.get_by_slug("aurora-exec").unwrap();
        let html = render_preview(template, profile::builtin(), Density::Full);
        assert!(html.contains(&template.theme.accent));
        assert!(html.contains(&template.theme.accent_gradient));
        assert!(html.contains(&template.theme.surface));
    }

    #[test]
    fn test_contrast_classes_follow_dark_flag() {
        let profile = profile::builtin();
        for template in catalog::builtin().templates() {
            let html = render_preview(template, profile, Density::Full);
            if template.theme.dark {
                assert!(html.contains("cvf-on-dark"), "{}: dark classes", template.slug);
                assert!(!html.contains("cvf-on-light"), "{}: light leak", template.slug);
            } else {
                assert!(html.contains("cvf-on-light"), "{}: light classes", template.slug);
                assert!(!html.contains("cvf-on-dark"), "{}: dark leak", template.slug);
            }
        }
    }

    #[test]
    fn test_compact_density_is_accepted_by_every_layout() {
        let profile = profile::builtin();
        for template in catalog::builtin().templates() {
            let html = render_preview(template, profile, Density::Compact);
            assert!(html.contains(&profile.name));
        }
    }
}
