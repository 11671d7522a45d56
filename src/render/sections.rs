//! Shared per-section rendering helpers
//!
//! Small stateless functions used by all eight layouts so that no
//! field-iteration logic is duplicated per renderer. Each helper takes the
//! theme and derives its text-contrast classes from the theme's `dark`
//! flag, which keeps the contrast invariant in one place: a dark theme
//! always selects the light-on-dark class set, in every layout.

use crate::profile::{Contact, Education, Experience};
use crate::theme::Theme;

use super::html::HtmlBuilder;

/// Text-contrast modifier class for the given theme
pub(super) fn text_mode(theme: &Theme) -> &'static str {
    if theme.dark {
        "on-dark"
    } else {
        "on-light"
    }
}

/// Uppercase section heading with an accent dot
pub(super) fn section_heading(b: &mut HtmlBuilder, theme: &Theme, title: &str) {
    b.open("h3", &["section-heading", text_mode(theme)], "");
    b.marker(
        &["heading-dot"],
        &format!("background: {}", theme.accent),
    );
    b.leaf("span", &[], "", title);
    b.close();
}

/// Experience entries with accent bullet markers per achievement
pub(super) fn experience_list(b: &mut HtmlBuilder, theme: &Theme, items: &[Experience]) {
    b.open("div", &["experience", text_mode(theme)], "");
    for item in items {
        b.open("article", &["experience-item"], "");
        b.open("div", &["experience-meta"], "");
        b.leaf("span", &["company"], "", &item.company);
        b.leaf("span", &["period"], "", &item.period);
        b.close();
        b.leaf("h4", &["role"], "", &item.role);
        b.open("ul", &["achievements"], "");
        for achievement in &item.achievements {
            b.open("li", &["achievement"], "");
            b.marker(
                &["bullet-dot"],
                &format!("background: {}", theme.accent),
            );
            b.leaf("span", &[], "", achievement);
            b.close();
        }
        b.close();
        b.close();
    }
    b.close();
}

/// Education entries: institution, degree, period
pub(super) fn education_list(b: &mut HtmlBuilder, theme: &Theme, items: &[Education]) {
    b.open("div", &["education", text_mode(theme)], "");
    for item in items {
        b.open("div", &["education-item"], "");
        b.leaf("p", &["institution"], "", &item.institution);
        b.leaf("p", &["degree"], "", &item.degree);
        b.leaf("p", &["period-label"], "", &item.period);
        b.close();
    }
    b.close();
}

/// Contact or link entries; values on light surfaces take the accent color
pub(super) fn contact_list(b: &mut HtmlBuilder, theme: &Theme, items: &[Contact]) {
    b.open("div", &["contact-list", text_mode(theme)], "");
    for item in items {
        b.open("div", &["contact-item"], "");
        b.leaf("p", &["contact-label"], "", &item.label);
        let style = if theme.dark {
            String::new()
        } else {
            format!("color: {}", theme.accent)
        };
        b.link(&["contact-value"], &style, item.href.as_deref(), &item.value);
        b.close();
    }
    b.close();
}

/// Flat list of short strings rendered as wrapping pills
pub(super) fn pill_stack(b: &mut HtmlBuilder, theme: &Theme, items: &[String]) {
    b.open("div", &["pill-stack", text_mode(theme)], "");
    let style = format!(
        "background: {}; border-color: {}",
        theme.pill, theme.border
    );
    for item in items {
        b.leaf("span", &["pill"], &style, item);
    }
    b.close();
}

/// Plain bullet-less list (certifications, interests)
pub(super) fn flat_list<'a>(
    b: &mut HtmlBuilder,
    theme: &Theme,
    items: impl IntoIterator<Item = &'a String>,
) {
    b.open("ul", &["flat-list", text_mode(theme)], "");
    for item in items {
        b.leaf("li", &[], "", item);
    }
    b.close();
}

/// Strength statements as a grid of small cards
pub(super) fn strengths_grid(b: &mut HtmlBuilder, theme: &Theme, items: &[String]) {
    b.open("div", &["strengths-grid", text_mode(theme)], "");
    for item in items {
        b.leaf("div", &["strength-card"], "", item);
    }
    b.close();
}
