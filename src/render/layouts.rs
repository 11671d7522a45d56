//! The eight structural layout renderers
//!
//! Each renderer is a pure function of (template, profile, density): it
//! arranges the same profile fields into its own spatial structure, applies
//! the template's theme tokens (accent for markers, gradient for hero
//! bands, surface and border for the frame) and delegates every repeated
//! section to the shared helpers in [`super::sections`].
//!
//! Section order inside a renderer is fixed by that renderer; the intra-
//! section list order always follows the profile fixture.

use crate::catalog::TemplateDefinition;
use crate::profile::SampleProfile;
use crate::theme::Theme;

use super::html::HtmlBuilder;
use super::sections::{
    contact_list, education_list, experience_list, flat_list, pill_stack, section_heading,
    strengths_grid, text_mode,
};
use super::Density;

fn frame_style(theme: &Theme) -> String {
    format!(
        "background: {}; border-color: {}",
        theme.surface, theme.border
    )
}

fn hero_style(theme: &Theme) -> String {
    format!("background: {}", theme.accent_gradient)
}

/// Name, title and location/primary-contact meta, shared hero content
fn identity(b: &mut HtmlBuilder, template: &TemplateDefinition, profile: &SampleProfile) {
    b.leaf("p", &["hero-accent"], "", &template.hero_accent);
    b.leaf("h1", &["profile-name"], "", &profile.name);
    b.leaf("p", &["profile-title"], "", &profile.title);
    b.open("div", &["hero-meta"], "");
    b.leaf("p", &["location"], "", &profile.location);
    if let Some(contact) = profile.primary_contact() {
        b.leaf("p", &["primary-contact"], "", contact);
    }
    b.close();
    b.leaf("p", &["profile-summary"], "", &profile.summary);
}

/// Single-column gradient hero over a two-column body; experience and
/// education in the wide column, everything else stacked in the sidebar.
pub(super) fn aurora(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-aurora", text_mode(theme)],
        &frame_style(theme),
    );

    b.open("header", &["hero"], &hero_style(theme));
    identity(b, template, profile);
    b.close();

    b.open("div", &["preview-body", "split-wide-left"], "");

    b.open("div", &["column-main"], "");
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();

    b.open("aside", &["column-side"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    section_heading(b, theme, "Skills");
    pill_stack(b, theme, &profile.skills);
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    section_heading(b, theme, "Certificaciones");
    flat_list(b, theme, &profile.certifications);
    section_heading(b, theme, "Intereses");
    flat_list(b, theme, &profile.interests);
    b.close();

    b.close();
    b.close();
}

/// Editorial hero band with recommended roles promoted to the top of the
/// main column and a framed sidebar for contact and pills.
pub(super) fn zenith(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-zenith", text_mode(theme)],
        &frame_style(theme),
    );

    b.open("header", &["hero"], &hero_style(theme));
    identity(b, template, profile);
    b.close();

    b.open("div", &["preview-body", "split-wide-left"], "");

    b.open("div", &["column-main"], "");
    b.open("div", &["role-row"], "");
    for role in &template.recommended_for {
        b.leaf("span", &["role-chip"], "", role);
    }
    b.close();
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    b.open("div", &["pair-grid"], "");
    b.open("div", &["pair-cell"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["pair-cell"], "");
    section_heading(b, theme, "Certificaciones");
    flat_list(b, theme, &profile.certifications);
    b.close();
    b.close();
    b.close();

    b.open("aside", &["column-side", "framed"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    section_heading(b, theme, "Skills");
    pill_stack(b, theme, &profile.skills);
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    section_heading(b, theme, "Intereses");
    flat_list(b, theme, &profile.interests);
    b.close();

    b.close();
    b.close();
}

/// Asymmetric sidebar of stacked cards next to a card-framed main column;
/// no hero band, the identity lives in the first sidebar card.
pub(super) fn atlas(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-atlas", text_mode(theme)],
        &frame_style(theme),
    );
    b.open("div", &["preview-body", "split-wide-right"], "");

    b.open("aside", &["column-side"], "");
    b.open("div", &["card"], "");
    identity(b, template, profile);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    contact_list(b, theme, &profile.links);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Skills");
    pill_stack(b, theme, &profile.skills);
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    b.close();
    b.close();

    b.open("div", &["column-main"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    b.close();
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Programas y logros");
    flat_list(
        b,
        theme,
        profile.certifications.iter().chain(&profile.interests),
    );
    b.close();
    b.close();
    b.close();

    b.close();
    b.close();
}

/// Gradient washed over the whole surface with a strengths grid promoted
/// below the identity card; sidebar of translucent cards.
pub(super) fn pulse(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-pulse", text_mode(theme)],
        &format!(
            "background: {}; border-color: {}",
            theme.accent_gradient, theme.border
        ),
    );
    b.open("div", &["preview-body", "split-wide-left"], "");

    b.open("div", &["column-main"], "");
    b.open("div", &["card"], "");
    identity(b, template, profile);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Loop de impacto");
    strengths_grid(b, theme, &template.strengths);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    b.close();
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Certificaciones");
    flat_list(b, theme, &profile.certifications);
    b.close();
    b.close();
    b.close();

    b.open("aside", &["column-side"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Skills clave");
    pill_stack(b, theme, &profile.skills);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Intereses");
    flat_list(b, theme, &profile.interests);
    b.close();
    b.close();

    b.close();
    b.close();
}

/// Hybrid: a gradient identity card nested in a light frame, with paired
/// cards for contact and links in the main column.
pub(super) fn prism(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-prism", text_mode(theme)],
        &frame_style(theme),
    );
    b.open("div", &["preview-body", "split-wide-right"], "");

    b.open("aside", &["column-side"], "");
    b.open("div", &["card", "hero-card"], &hero_style(theme));
    identity(b, template, profile);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Skills");
    pill_stack(b, theme, &profile.skills);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    b.close();
    b.close();

    b.open("div", &["column-main"], "");
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    b.close();
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    b.close();
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Intereses & DEI");
    flat_list(b, theme, profile.interests.iter().chain(&profile.certifications));
    b.close();
    b.close();
    b.close();

    b.close();
    b.close();
}

/// Calm hero band over a light body; key strengths promoted as a list of
/// framed rows, pills folded into the sidebar.
pub(super) fn halo(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-halo", text_mode(theme)],
        &format!(
            "background: {}; border-color: {}",
            theme.background, theme.border
        ),
    );

    b.open("header", &["hero"], &hero_style(theme));
    identity(b, template, profile);
    b.close();

    b.open("div", &["preview-body", "split-wide-right"], "");

    b.open("aside", &["column-side"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Skills");
    pill_stack(b, theme, &profile.skills);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Intereses");
    pill_stack(b, theme, &profile.interests);
    b.close();
    b.close();

    b.open("div", &["column-main"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Programas clave");
    b.open("ul", &["strength-rows"], "");
    for strength in &template.strengths {
        b.leaf("li", &["strength-row"], "", strength);
    }
    b.close();
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    b.close();
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Certificaciones");
    flat_list(b, theme, &profile.certifications);
    b.close();
    b.close();
    b.close();

    b.close();
    b.close();
}

/// Symmetric two-column split; identity and stack on the left, experiments
/// and publications on the right. No hero band.
pub(super) fn orbit(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-orbit", text_mode(theme)],
        &frame_style(theme),
    );
    b.open("div", &["preview-body", "split-even"], "");

    b.open("aside", &["column-side"], "");
    b.open("div", &["card"], "");
    identity(b, template, profile);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Stack y skills");
    pill_stack(b, theme, &profile.skills);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    b.close();
    b.close();

    b.open("div", &["column-main"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Experimentos y logros");
    experience_list(b, theme, &profile.experience);
    b.close();
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Publicaciones & Certificaciones");
    flat_list(b, theme, &profile.certifications);
    b.close();
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Intereses");
    flat_list(b, theme, &profile.interests);
    b.close();
    b.close();

    b.close();
    b.close();
}

/// Symmetric mosaic of cards with the strengths grid leading the right
/// column and paired skill cards below the experience block.
pub(super) fn mosaic(
    b: &mut HtmlBuilder,
    template: &TemplateDefinition,
    profile: &SampleProfile,
    _density: Density,
) {
    let theme = &template.theme;
    b.open(
        "section",
        &["preview", "layout-mosaic", text_mode(theme)],
        &frame_style(theme),
    );
    b.open("div", &["preview-body", "split-even"], "");

    b.open("aside", &["column-side"], "");
    b.open("div", &["card"], "");
    identity(b, template, profile);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Contacto");
    contact_list(b, theme, &profile.contacts);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Links");
    contact_list(b, theme, &profile.links);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Idiomas");
    pill_stack(b, theme, &profile.languages);
    b.close();
    b.close();

    b.open("div", &["column-main"], "");
    strengths_grid(b, theme, &template.strengths);
    b.open("div", &["card"], "");
    section_heading(b, theme, "Experiencia");
    experience_list(b, theme, &profile.experience);
    b.close();
    b.open("div", &["pair-grid"], "");
    b.open("div", &["card"], "");
    section_heading(b, theme, "Skills");
    pill_stack(b, theme, &profile.skills);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Herramientas");
    pill_stack(b, theme, &profile.tools);
    b.close();
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Educación");
    education_list(b, theme, &profile.education);
    b.close();
    b.open("div", &["card"], "");
    section_heading(b, theme, "Certificaciones e intereses");
    flat_list(
        b,
        theme,
        profile.certifications.iter().chain(&profile.interests),
    );
    b.close();
    b.close();

    b.close();
    b.close();
}
