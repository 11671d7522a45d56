//! Page assembly: gallery, detail and not-found documents
//!
//! Every page is produced by wrapping a body fragment in [`page_shell`],
//! which owns the document head (title, meta description, stylesheet link).
//! Pages are plain strings; the writing of files is the concern of
//! [`super::write_site`].

use crate::catalog::{Catalog, TemplateDefinition};
use crate::filter::{filter, CategoryFilter, FilterState};
use crate::profile::SampleProfile;
use crate::render::html::{escape_attr, escape_html, HtmlBuilder};
use crate::render::{render_preview, Density, HtmlConfig};
use crate::theme::Pattern;

/// Site name used in titles and hero copy
pub const SITE_NAME: &str = "CV Forge 2025";

/// Wrap a body fragment in the shared document shell.
///
/// `asset_prefix` is the relative path from the page back to the site root,
/// e.g. `""` for the index and `"../../"` for a detail page.
pub fn page_shell(title: &str, description: &str, asset_prefix: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="stylesheet" href="{prefix}assets/style.css">
</head>
<body class="cvf-page">
{body}</body>
</html>
"#,
        title = escape_html(title),
        description = escape_attr(description),
        prefix = asset_prefix,
    )
}

/// The gallery page: hero copy, filter chips, one card per matching
/// template and an explicit empty state when nothing matches.
pub fn gallery_page(catalog: &Catalog, profile: &SampleProfile, state: &FilterState) -> String {
    let matches = filter(catalog.templates(), state.category, &state.query);

    let mut b = HtmlBuilder::new(HtmlConfig::default());
    b.open("main", &["gallery"], "");

    b.open("header", &["gallery-hero"], "");
    b.leaf("p", &["gallery-kicker"], "", SITE_NAME);
    b.leaf(
        "h1",
        &["gallery-title"],
        "",
        "Plantillas de CV listas para destacar",
    );
    b.leaf(
        "p",
        &["gallery-subtitle"],
        "",
        "Elige una plantilla curada por disciplina, con vista previa real y paleta lista para imprimir.",
    );
    b.close();

    b.open("nav", &["chip-row"], "");
    chip(&mut b, "Todos", state.category == CategoryFilter::All);
    for category in catalog.categories() {
        chip(
            &mut b,
            category.label(),
            state.category == CategoryFilter::Only(category),
        );
    }
    b.close();

    if matches.is_empty() {
        b.open("div", &["empty-state"], "");
        b.leaf(
            "p",
            &["empty-title"],
            "",
            "No encontramos plantillas con ese criterio.",
        );
        b.leaf(
            "p",
            &["empty-hint"],
            "",
            "Prueba con otra palabra clave o cambia de categoría.",
        );
        b.close();
    } else {
        b.open("div", &["card-grid"], "");
        for template in &matches {
            gallery_card(&mut b, template, profile);
        }
        b.close();
    }

    b.close();

    let description = format!(
        "Catálogo de {} plantillas de CV con vista previa por disciplina.",
        catalog.len()
    );
    page_shell(
        &format!("Plantillas de CV | {SITE_NAME}"),
        &description,
        "",
        &b.build(),
    )
}

fn chip(b: &mut HtmlBuilder, label: &str, active: bool) {
    let classes: &[&str] = if active {
        &["chip", "chip-active"]
    } else {
        &["chip"]
    };
    b.leaf("span", classes, "", label);
}

/// One gallery card: a compact live preview capped by the template's
/// metadata and a link to its detail page.
fn gallery_card(b: &mut HtmlBuilder, template: &TemplateDefinition, profile: &SampleProfile) {
    let theme = &template.theme;
    b.open("article", &["template-card"], "");

    // Glow themes wash the preview well with their gradient; flat themes
    // sit on the plain surface color.
    let preview_background = match theme.pattern {
        Pattern::Glow => &theme.accent_gradient,
        Pattern::Flat => &theme.surface,
    };
    b.open(
        "div",
        &["card-preview"],
        &format!("background: {preview_background}"),
    );
    b.raw(&render_preview(template, profile, Density::Compact));
    b.close();

    b.open("div", &["card-body"], "");
    b.open("div", &["card-meta"], "");
    b.leaf("span", &["card-category"], "", template.category.label());
    b.marker(
        &["card-swatch"],
        &format!("background: {}", theme.accent_gradient),
    );
    b.close();
    b.leaf("h2", &["card-name"], "", &template.name);
    b.leaf("p", &["card-tagline"], "", &template.tagline);
    b.link(
        &["card-link"],
        "",
        Some(&format!("templates/{}/", template.slug)),
        "Ver plantilla",
    );
    b.close();

    b.close();
}

/// The detail page for one template: full preview, strengths and
/// recommended roles.
pub fn detail_page(template: &TemplateDefinition, profile: &SampleProfile) -> String {
    let mut b = HtmlBuilder::new(HtmlConfig::default());
    b.open("main", &["detail"], "");

    b.open("nav", &["detail-nav"], "");
    b.link(&["back-link"], "", Some("../../"), "← Todas las plantillas");
    b.close();

    b.open("header", &["detail-header"], "");
    b.leaf("p", &["detail-category"], "", template.category.label());
    b.leaf("h1", &["detail-name"], "", &template.name);
    b.leaf("p", &["detail-tagline"], "", &template.tagline);
    b.leaf("p", &["detail-summary"], "", &template.summary);
    b.close();

    b.open("div", &["detail-columns"], "");

    b.open("div", &["detail-preview"], "");
    b.raw(&render_preview(template, profile, Density::Full));
    b.close();

    b.open("aside", &["detail-aside"], "");
    b.leaf("h2", &["aside-heading"], "", "Fortalezas");
    b.open("ul", &["strength-list"], "");
    for strength in &template.strengths {
        b.leaf("li", &[], "", strength);
    }
    b.close();
    b.leaf("h2", &["aside-heading"], "", "Recomendada para");
    b.open("div", &["role-row"], "");
    for role in &template.recommended_for {
        b.leaf("span", &["role-chip"], "", role);
    }
    b.close();
    b.close();

    b.close();
    b.close();

    page_shell(
        &format!("{} | {SITE_NAME}", template.name),
        &template.summary,
        "../../",
        &b.build(),
    )
}

/// The not-found page written as 404.html
pub fn not_found_page() -> String {
    let mut b = HtmlBuilder::new(HtmlConfig::default());
    b.open("main", &["not-found"], "");
    b.leaf("h1", &["not-found-title"], "", "Plantilla no encontrada");
    b.leaf(
        "p",
        &["not-found-hint"],
        "",
        "El enlace puede estar desactualizado. Vuelve al catálogo para explorar las plantillas disponibles.",
    );
    b.link(&["back-link"], "", Some("/"), "Volver al catálogo");
    b.close();

    page_shell(
        &format!("Plantilla no encontrada | {SITE_NAME}"),
        "La plantilla solicitada no existe en el catálogo.",
        "",
        &b.build(),
    )
}

/// Static stylesheet for the `cvf-` class vocabulary emitted by the
/// renderers and page assemblers. Theme-dependent colors are always inline
/// on the elements; this sheet only carries structure and typography.
pub const STYLESHEET: &str = r#"/* CV Forge 2025 */
:root {
  --ink: #0f172a;
  --muted: #64748b;
  --paper: #f1f5f9;
}

* { box-sizing: border-box; }

body.cvf-page {
  margin: 0;
  font-family: "Inter", "Segoe UI", system-ui, sans-serif;
  color: var(--ink);
  background: var(--paper);
}

/* gallery */
.cvf-gallery { max-width: 1180px; margin: 0 auto; padding: 48px 24px; }
.cvf-gallery-kicker { text-transform: uppercase; letter-spacing: 0.2em; font-size: 12px; color: var(--muted); }
.cvf-gallery-title { font-size: 40px; margin: 8px 0; }
.cvf-gallery-subtitle { color: var(--muted); max-width: 640px; }
.cvf-chip-row { display: flex; flex-wrap: wrap; gap: 8px; margin: 24px 0; }
.cvf-chip {
  padding: 6px 14px; border-radius: 999px; font-size: 13px;
  border: 1px solid #cbd5e1; background: #fff; color: var(--ink);
}
.cvf-chip-active { background: var(--ink); color: #fff; border-color: var(--ink); }
.cvf-card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 24px; }
.cvf-template-card {
  background: #fff; border: 1px solid #e2e8f0; border-radius: 16px;
  overflow: hidden; display: flex; flex-direction: column;
}
.cvf-card-preview { height: 260px; overflow: hidden; padding: 16px; }
.cvf-card-preview .cvf-preview { transform: scale(0.45); transform-origin: top left; width: 222%; }
.cvf-card-body { padding: 16px 20px 20px; }
.cvf-card-meta { display: flex; align-items: center; justify-content: space-between; }
.cvf-card-category { font-size: 12px; text-transform: uppercase; letter-spacing: 0.12em; color: var(--muted); }
.cvf-card-swatch { width: 40px; height: 10px; border-radius: 999px; display: inline-block; }
.cvf-card-name { margin: 8px 0 4px; font-size: 20px; }
.cvf-card-tagline { margin: 0 0 12px; color: var(--muted); font-size: 14px; }
.cvf-card-link { font-weight: 600; font-size: 14px; text-decoration: none; color: var(--ink); }
.cvf-empty-state { padding: 64px 24px; text-align: center; border: 1px dashed #cbd5e1; border-radius: 16px; }
.cvf-empty-title { font-size: 18px; font-weight: 600; margin: 0 0 4px; }
.cvf-empty-hint { color: var(--muted); margin: 0; }

/* detail */
.cvf-detail { max-width: 1180px; margin: 0 auto; padding: 32px 24px 64px; }
.cvf-detail-nav { margin-bottom: 24px; }
.cvf-back-link { color: var(--muted); text-decoration: none; font-size: 14px; }
.cvf-detail-category { text-transform: uppercase; letter-spacing: 0.12em; font-size: 12px; color: var(--muted); }
.cvf-detail-name { font-size: 36px; margin: 4px 0; }
.cvf-detail-tagline { font-size: 18px; color: var(--muted); margin: 0 0 8px; }
.cvf-detail-summary { max-width: 720px; }
.cvf-detail-columns { display: grid; grid-template-columns: minmax(0, 1fr) 280px; gap: 32px; margin-top: 32px; }
.cvf-detail-aside { align-self: start; position: sticky; top: 24px; }
.cvf-aside-heading { font-size: 14px; text-transform: uppercase; letter-spacing: 0.12em; color: var(--muted); }
.cvf-strength-list { padding-left: 18px; font-size: 14px; }
.cvf-role-row { display: flex; flex-wrap: wrap; gap: 6px; }
.cvf-role-chip {
  font-size: 12px; padding: 4px 10px; border-radius: 999px;
  border: 1px solid #cbd5e1; background: #fff;
}

/* not found */
.cvf-not-found { max-width: 520px; margin: 96px auto; text-align: center; padding: 0 24px; }
.cvf-not-found-title { font-size: 32px; }
.cvf-not-found-hint { color: var(--muted); }

/* preview frame shared by all layouts */
.cvf-preview {
  border: 1px solid transparent; border-radius: 20px; overflow: hidden;
  font-size: 13px; line-height: 1.45;
}
.cvf-preview.cvf-on-dark { color: #f8fafc; }
.cvf-preview.cvf-on-light { color: var(--ink); }
.cvf-hero { padding: 28px 32px; color: #fff; }
.cvf-hero-accent { text-transform: uppercase; letter-spacing: 0.18em; font-size: 11px; margin: 0 0 6px; opacity: 0.85; }
.cvf-profile-name { font-size: 26px; margin: 0; }
.cvf-profile-title { margin: 2px 0 8px; opacity: 0.9; }
.cvf-hero-meta { display: flex; gap: 16px; font-size: 12px; opacity: 0.85; }
.cvf-hero-meta p { margin: 0; }
.cvf-profile-summary { margin: 10px 0 0; font-size: 13px; max-width: 560px; }
.cvf-preview-body { display: grid; gap: 24px; padding: 24px 32px 32px; }
.cvf-split-wide-left { grid-template-columns: minmax(0, 1.7fr) minmax(0, 1fr); }
.cvf-split-wide-right { grid-template-columns: minmax(0, 1fr) minmax(0, 1.7fr); }
.cvf-split-even { grid-template-columns: 1fr 1fr; }
.cvf-column-main, .cvf-column-side { display: flex; flex-direction: column; gap: 14px; min-width: 0; }
.cvf-column-side.cvf-framed { border-left: 1px solid rgba(100, 116, 139, 0.3); padding-left: 20px; }
.cvf-pair-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 14px; }

.cvf-card { border-radius: 14px; padding: 16px 18px; }
.cvf-on-dark .cvf-card { background: rgba(255, 255, 255, 0.06); }
.cvf-on-light .cvf-card { background: #fff; border: 1px solid #e2e8f0; }
.cvf-hero-card { color: #fff; }
.cvf-hero-card.cvf-card { border: none; }

.cvf-section-heading {
  display: flex; align-items: center; gap: 8px; margin: 0;
  font-size: 11px; text-transform: uppercase; letter-spacing: 0.16em;
}
.cvf-heading-dot { width: 8px; height: 8px; border-radius: 999px; display: inline-block; }

.cvf-experience { display: flex; flex-direction: column; gap: 12px; }
.cvf-experience-meta { display: flex; justify-content: space-between; font-size: 12px; }
.cvf-experience-meta .cvf-company { font-weight: 600; }
.cvf-experience-meta .cvf-period { opacity: 0.7; }
.cvf-role { margin: 2px 0 6px; font-size: 14px; }
.cvf-achievements { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 4px; }
.cvf-achievement { display: flex; gap: 8px; align-items: baseline; font-size: 12px; }
.cvf-bullet-dot { width: 5px; height: 5px; border-radius: 999px; flex-shrink: 0; display: inline-block; }

.cvf-education-item p { margin: 0; font-size: 12px; }
.cvf-education-item .cvf-institution { font-weight: 600; font-size: 13px; }
.cvf-education-item .cvf-period-label { opacity: 0.7; }
.cvf-education { display: flex; flex-direction: column; gap: 10px; }

.cvf-contact-list { display: flex; flex-direction: column; gap: 8px; }
.cvf-contact-item p { margin: 0; }
.cvf-contact-label { font-size: 11px; text-transform: uppercase; letter-spacing: 0.1em; opacity: 0.7; }
.cvf-contact-value { font-size: 12px; text-decoration: none; color: inherit; word-break: break-word; }

.cvf-pill-stack { display: flex; flex-wrap: wrap; gap: 6px; }
.cvf-pill { font-size: 11px; padding: 4px 10px; border-radius: 999px; border: 1px solid transparent; }

.cvf-flat-list { list-style: none; margin: 0; padding: 0; font-size: 12px; display: flex; flex-direction: column; gap: 4px; }

.cvf-strengths-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; }
.cvf-strength-card { font-size: 12px; padding: 10px 12px; border-radius: 10px; }
.cvf-on-dark .cvf-strength-card { background: rgba(255, 255, 255, 0.08); }
.cvf-on-light .cvf-strength-card { background: var(--paper); }
.cvf-strength-rows { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 6px; }
.cvf-strength-row { font-size: 12px; padding: 8px 12px; border-radius: 8px; border: 1px solid rgba(100, 116, 139, 0.25); }

@media (max-width: 860px) {
  .cvf-preview-body, .cvf-detail-columns, .cvf-pair-grid { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, profile};

    #[test]
    fn test_gallery_lists_every_template_by_default() {
        let catalog = catalog::builtin();
        let html = gallery_page(catalog, profile::builtin(), &FilterState::default());
        for template in catalog.templates() {
            assert!(html.contains(&template.name), "missing {}", template.name);
            assert!(html.contains(&format!("templates/{}/", template.slug)));
        }
        assert!(html.contains("Todos"));
        assert!(!html.contains("cvf-empty-state"));
    }

    #[test]
    fn test_gallery_empty_state() {
        let state = FilterState::new(CategoryFilter::All, "sin-coincidencias");
        let html = gallery_page(catalog::builtin(), profile::builtin(), &state);
        assert!(html.contains("cvf-empty-state"));
        assert!(html.contains("No encontramos plantillas con ese criterio."));
        assert!(!html.contains("cvf-template-card"));
    }

    #[test]
    fn test_card_preview_background_follows_pattern() {
        let catalog = catalog::builtin();
        let html = gallery_page(catalog, profile::builtin(), &FilterState::default());

        let glow = catalog.get_by_slug("aurora-exec").unwrap();
        assert_eq!(glow.theme.pattern, Pattern::Glow);
        assert!(html.contains(&format!(
            r#"cvf-card-preview" style="background: {}""#,
            glow.theme.accent_gradient
        )));

        let flat = catalog.get_by_slug("zenith-lead").unwrap();
        assert_eq!(flat.theme.pattern, Pattern::Flat);
        assert!(html.contains(&format!(
            r#"cvf-card-preview" style="background: {}""#,
            flat.theme.surface
        )));
    }

    #[test]
    fn test_detail_page_metadata() {
        let catalog = catalog::builtin();
        let template = catalog.get_by_slug("aurora-exec").unwrap();
        let html = detail_page(template, profile::builtin());
        assert!(html.contains(&format!("<title>{} | {SITE_NAME}</title>", template.name)));
        assert!(html.contains(&escape_attr(&template.summary)));
        assert!(html.contains("../../assets/style.css"));
    }

    #[test]
    fn test_not_found_page_title() {
        let html = not_found_page();
        assert!(html.contains(&format!("<title>Plantilla no encontrada | {SITE_NAME}</title>")));
    }

    #[test]
    fn test_shell_escapes_title() {
        let html = page_shell("a < b", "desc", "", "<p>x</p>");
        assert!(html.contains("<title>a &lt; b</title>"));
    }
}
