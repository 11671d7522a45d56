//! End-to-end tests: catalog loading, filtering, rendering and site output

use cv_forge::{
    catalog, filter, profile, render_preview, write_site, Catalog, CategoryFilter,
    ConfigurationError, Density,
};

#[test]
fn test_write_site_produces_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog::builtin();

    write_site(catalog, profile::builtin(), dir.path()).unwrap();

    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(index.contains("<title>Plantillas de CV | CV Forge 2025</title>"));
    assert!(index.contains("assets/style.css"));

    for template in catalog.templates() {
        let page = dir
            .path()
            .join("templates")
            .join(&template.slug)
            .join("index.html");
        let html = std::fs::read_to_string(&page)
            .unwrap_or_else(|_| panic!("missing detail page for {}", template.slug));
        assert!(html.contains(&template.name));
    }

    let not_found = std::fs::read_to_string(dir.path().join("404.html")).unwrap();
    assert!(not_found.contains("Plantilla no encontrada"));

    let css = std::fs::read_to_string(dir.path().join("assets/style.css")).unwrap();
    assert!(css.contains(".cvf-preview"));
}

#[test]
fn test_write_site_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog::builtin();
    write_site(catalog, profile::builtin(), dir.path()).unwrap();
    write_site(catalog, profile::builtin(), dir.path()).unwrap();

    let count = std::fs::read_dir(dir.path().join("templates")).unwrap().count();
    assert_eq!(count, catalog.len());
}

#[test]
fn test_filter_results_render_without_loss() {
    let catalog = catalog::builtin();
    let profile = profile::builtin();
    let matches = filter(catalog.templates(), CategoryFilter::All, "data");
    assert!(!matches.is_empty());
    for template in matches {
        let html = render_preview(template, profile, Density::Full);
        assert!(html.contains(&profile.name));
        assert!(html.contains(&template.theme.accent));
    }
}

#[test]
fn test_external_catalog_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");

    let source = catalog::builtin();
    let slug = &source.templates()[0].slug;
    let content = format!(
        r##"
[[template]]
slug = "{slug}"
name = "Copia"
tagline = "Copia de prueba"
summary = "Resumen."
category = "Data"
hero_accent = "Data"
recommended_for = ["Analyst"]
strengths = ["Una"]
keywords = ["copia"]
layout = "orbit"

[template.theme]
accent = "#38BDF8"
accent_gradient = "linear-gradient(135deg, #38BDF8 0%, #0F172A 100%)"
surface = "#0B1120"
background = "#020617"
border = "#1E293B"
text_muted = "#94A3B8"
pill = "rgba(56, 189, 248, 0.16)"
dark = true
pattern = "glow"
"##
    );
    std::fs::write(&path, content).unwrap();

    let loaded = Catalog::from_file(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get_by_slug(slug).unwrap().name, "Copia");
}

#[test]
fn test_missing_catalog_file_is_io_error() {
    let result = Catalog::from_file(std::path::Path::new("/nonexistent/catalog.toml"));
    assert!(matches!(result, Err(ConfigurationError::Io(_))));
}
