//! Pure predicate-based subset selection over the catalog

use crate::catalog::{Category, TemplateDefinition};

/// Category selector for the gallery: everything, or one exact category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "Todos" sentinel: every category matches
    #[default]
    All,
    /// Exact, case-sensitive match against one category
    Only(Category),
}

impl CategoryFilter {
    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Transient gallery filter state; reconstructible from the UI at any time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }
}

/// Select the templates matching a category selector and free-text query.
///
/// Pure and deterministic: no side effects, and the relative order of the
/// result equals catalog order. The query is trimmed and lowercased; an
/// empty query matches everything, a non-empty query must be a substring of
/// the name, the tagline, or any keyword. Category and query predicates
/// must both hold. An empty result is a normal outcome, not an error.
pub fn filter<'a>(
    templates: &'a [TemplateDefinition],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a TemplateDefinition> {
    let normalized = query.trim().to_lowercase();

    templates
        .iter()
        .filter(|template| category.matches(template.category))
        .filter(|template| normalized.is_empty() || matches_query(template, &normalized))
        .collect()
}

fn matches_query(template: &TemplateDefinition, normalized: &str) -> bool {
    template.name.to_lowercase().contains(normalized)
        || template.tagline.to_lowercase().contains(normalized)
        || template
            .keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(normalized))
}
