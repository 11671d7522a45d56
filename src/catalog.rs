//! Template catalog: definitions, registry and built-in data
//!
//! The catalog is the single source of truth queried by every other
//! component. It is an ordered collection of [`TemplateDefinition`]s with a
//! slug index for keyed lookup, validated on construction so that a
//! malformed template (duplicate slug, broken theme) aborts loudly instead
//! of degrading at render time.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::theme::Theme;

/// Built-in catalog data, embedded so the binary is self-contained
const BUILTIN_CATALOG: &str = include_str!("data/catalog.toml");

/// Discipline a template is curated for (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Tecnología")]
    Tecnologia,
    #[serde(rename = "Diseño")]
    Diseno,
    Producto,
    Data,
    Marketing,
    Talento,
}

impl Category {
    /// All categories, in chip-display order
    pub const ALL: [Category; 6] = [
        Category::Tecnologia,
        Category::Diseno,
        Category::Producto,
        Category::Data,
        Category::Marketing,
        Category::Talento,
    ];

    /// Human-facing label (also the serialized form)
    pub fn label(self) -> &'static str {
        match self {
            Category::Tecnologia => "Tecnología",
            Category::Diseno => "Diseño",
            Category::Producto => "Producto",
            Category::Data => "Data",
            Category::Marketing => "Marketing",
            Category::Talento => "Talento",
        }
    }

    /// Parse a display label back into a category (exact, case-sensitive)
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Layout identifier: the dispatch key selecting one of the eight
/// structural renderers.
///
/// This is a closed enumeration with exhaustive matching in the dispatcher,
/// so adding a ninth layout is a compile-time-checked extension. Unknown
/// names can only appear in external TOML, where deserialization fails and
/// catalog construction aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Aurora,
    Zenith,
    Atlas,
    Pulse,
    Prism,
    Halo,
    Orbit,
    Mosaic,
}

impl Layout {
    /// All layout variants
    pub const ALL: [Layout; 8] = [
        Layout::Aurora,
        Layout::Zenith,
        Layout::Atlas,
        Layout::Pulse,
        Layout::Prism,
        Layout::Halo,
        Layout::Orbit,
        Layout::Mosaic,
    ];

    /// Lowercase variant name, as used in catalog data
    pub fn name(self) -> &'static str {
        match self {
            Layout::Aurora => "aurora",
            Layout::Zenith => "zenith",
            Layout::Atlas => "atlas",
            Layout::Pulse => "pulse",
            Layout::Prism => "prism",
            Layout::Halo => "halo",
            Layout::Orbit => "orbit",
            Layout::Mosaic => "mosaic",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static metadata, theme and layout identifier for one CV design
///
/// Constructed once at catalog-build time and never mutated; every consumer
/// reads it for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateDefinition {
    /// Stable URL-safe identifier, unique across the catalog
    pub slug: String,
    /// Display name
    pub name: String,
    /// One-line pitch shown on gallery cards
    pub tagline: String,
    /// Longer description for the detail page and metadata
    pub summary: String,
    /// Curated discipline
    pub category: Category,
    /// Short accent label shown in the hero band
    pub hero_accent: String,
    /// Roles this template is recommended for, in display order
    pub recommended_for: Vec<String>,
    /// Strength statements promoted by some layouts
    pub strengths: Vec<String>,
    /// Search keywords matched by the filter engine
    pub keywords: Vec<String>,
    /// Structural renderer selected for this template
    pub layout: Layout,
    /// Visual identity tokens
    pub theme: Theme,
}

/// TOML document shape for catalog files
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(rename = "template")]
    templates: Vec<TemplateDefinition>,
}

/// Ordered, validated collection of template definitions with keyed lookup
#[derive(Debug)]
pub struct Catalog {
    templates: Vec<TemplateDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from definitions, validating slug uniqueness and
    /// every theme. Any violation is a [`ConfigurationError`]; a partially
    /// valid catalog is never produced.
    pub fn new(templates: Vec<TemplateDefinition>) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(templates.len());
        for (position, template) in templates.iter().enumerate() {
            template.theme.validate(&template.slug)?;
            if index.insert(template.slug.clone(), position).is_some() {
                return Err(ConfigurationError::DuplicateSlug {
                    slug: template.slug.clone(),
                });
            }
        }
        Ok(Self { templates, index })
    }

    /// Load a catalog from TOML text
    pub fn from_str(content: &str) -> Result<Self, ConfigurationError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Self::new(parsed.templates)
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// All templates, in catalog order
    pub fn templates(&self) -> &[TemplateDefinition] {
        &self.templates
    }

    /// Exact-match, case-sensitive lookup by slug.
    ///
    /// A miss is a normal outcome (stale or mistyped link) and is handled
    /// by the caller as a missing resource, never as a crash.
    pub fn get_by_slug(&self, slug: &str) -> Option<&TemplateDefinition> {
        self.index.get(slug).map(|&i| &self.templates[i])
    }

    /// Distinct categories present in this catalog, in first-appearance
    /// order; used to build the gallery filter chips.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for template in &self.templates {
            if !seen.contains(&template.category) {
                seen.push(template.category);
            }
        }
        seen
    }

    /// All slugs, in catalog order; used by the page-shell layer to
    /// pre-materialize one detail page per template.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.slug.as_str())
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The built-in catalog, initialized once and immutable for the remainder
/// of the process. Concurrent reads need no synchronization.
pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::from_str(BUILTIN_CATALOG).expect("built-in catalog should be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_template_toml() -> &'static str {
        r##"
[[template]]
slug = "aurora-exec"
name = "Aurora Exec"
tagline = "Narrativa ejecutiva con cierre de impacto"
summary = "Plantilla oscura para liderazgo técnico."
category = "Tecnología"
hero_accent = "Liderazgo"
recommended_for = ["CTO", "VP Engineering"]
strengths = ["Métricas arriba", "Jerarquía clara", "Lectura ATS"]
keywords = ["ejecutivo", "tech", "dark"]
layout = "aurora"

[template.theme]
accent = "#38BDF8"
accent_gradient = "linear-gradient(135deg, #38BDF8 0%, #6366F1 60%, #0F172A 100%)"
surface = "#0B1120"
background = "#020617"
border = "rgba(148, 163, 184, 0.25)"
text_muted = "#94A3B8"
pill = "rgba(56, 189, 248, 0.16)"
dark = true
pattern = "glow"

[[template]]
slug = "zenith-lead"
name = "Zenith Lead"
tagline = "Editorial claro para portafolios de diseño"
summary = "Plantilla clara con sidebar de skills."
category = "Diseño"
hero_accent = "Diseño"
recommended_for = ["Design Lead"]
strengths = ["Hero editorial", "Sidebar compacta", "Pills de skills"]
keywords = ["design", "editorial"]
layout = "zenith"

[template.theme]
accent = "#F472B6"
accent_gradient = "linear-gradient(135deg, #F472B6 0%, #FB7185 55%, #7C3AED 100%)"
surface = "#FFFFFF"
background = "#F8FAFC"
border = "#E2E8F0"
text_muted = "#64748B"
pill = "rgba(244, 114, 182, 0.14)"
dark = false
pattern = "flat"
"##
    }

    #[test]
    fn test_builtin_catalog_loads_and_covers_all_layouts() {
        let catalog = builtin();
        assert!(!catalog.is_empty());
        for layout in Layout::ALL {
            assert!(
                catalog.templates().iter().any(|t| t.layout == layout),
                "no builtin template uses layout {layout}"
            );
        }
    }

    #[test]
    fn test_builtin_slugs_round_trip() {
        let catalog = builtin();
        for template in catalog.templates() {
            let found = catalog.get_by_slug(&template.slug).unwrap();
            assert_eq!(found.slug, template.slug);
            assert_eq!(found.name, template.name);
        }
    }

    #[test]
    fn test_get_by_slug_miss_is_none() {
        assert!(builtin().get_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::from_str(two_template_toml()).unwrap();
        assert!(catalog.get_by_slug("aurora-exec").is_some());
        assert!(catalog.get_by_slug("Aurora-Exec").is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let catalog = Catalog::from_str(two_template_toml()).unwrap();
        let mut templates = catalog.templates().to_vec();
        templates.push(templates[0].clone());
        let result = Catalog::new(templates);
        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateSlug { slug }) if slug == "aurora-exec"
        ));
    }

    #[test]
    fn test_unknown_layout_name_rejected() {
        let toml = two_template_toml().replace("layout = \"aurora\"", "layout = \"nebula\"");
        let result = Catalog::from_str(&toml);
        assert!(matches!(result, Err(ConfigurationError::Parse(_))));
    }

    #[test]
    fn test_broken_theme_rejected_at_construction() {
        let toml = two_template_toml().replace("dark = false", "dark = true");
        let result = Catalog::from_str(&toml);
        assert!(matches!(
            result,
            Err(ConfigurationError::ContrastMismatch { .. })
        ));
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = Catalog::from_str(two_template_toml()).unwrap();
        assert_eq!(
            catalog.categories(),
            vec![Category::Tecnologia, Category::Diseno]
        );
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("tecnología"), None);
    }

    #[test]
    fn test_slugs_enumeration_matches_order() {
        let catalog = Catalog::from_str(two_template_toml()).unwrap();
        let slugs: Vec<&str> = catalog.slugs().collect();
        assert_eq!(slugs, vec!["aurora-exec", "zenith-lead"]);
    }
}
