//! Visual theme tokens for templates
//!
//! A [`Theme`] describes the complete visual identity of one template:
//! accent color and gradient, surfaces, borders and the dark-mode flag.
//! Every value is a CSS-compatible color expression that the rendering
//! layer consumes verbatim; the theme itself carries no behavior beyond
//! validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Background treatment used by the gallery card preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Plain surface color
    #[default]
    Flat,
    /// Surface washed with the accent gradient
    Glow,
}

/// Color and contrast tokens applied uniformly by every layout renderer
///
/// Immutable after construction and owned exclusively by its
/// [`TemplateDefinition`](crate::catalog::TemplateDefinition). Swapping the
/// theme between two templates reproduces the same layout with different
/// colors; the `dark` flag is the single source of truth for text-contrast
/// selection, so a valid theme can never put dark text on a dark surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Accent color for bullet markers and section-heading dots
    pub accent: String,
    /// Multi-stop gradient for hero bands, derived from the accent family
    pub accent_gradient: String,
    /// Main card surface color
    pub surface: String,
    /// Page-level background behind the card
    pub background: String,
    /// Card border color
    pub border: String,
    /// Muted/secondary text color
    pub text_muted: String,
    /// Pill and badge fill color
    pub pill: String,
    /// Dark-mode flag: selects light-on-dark body text when set
    pub dark: bool,
    /// Gallery card background treatment
    #[serde(default)]
    pub pattern: Pattern,
}

impl Theme {
    /// Validate every token of this theme.
    ///
    /// Checks that each color field holds a CSS color expression, that the
    /// accent gradient is a gradient expression, and that surface and
    /// background brightness agree with the `dark` flag. `slug` identifies
    /// the owning template in error messages.
    pub fn validate(&self, slug: &str) -> Result<(), ConfigurationError> {
        let fields: [(&'static str, &str); 6] = [
            ("accent", &self.accent),
            ("surface", &self.surface),
            ("background", &self.background),
            ("border", &self.border),
            ("text_muted", &self.text_muted),
            ("pill", &self.pill),
        ];
        for (field, value) in fields {
            if !is_css_color(value) {
                return Err(ConfigurationError::InvalidColor {
                    slug: slug.to_string(),
                    field,
                    value: value.to_string(),
                });
            }
        }

        if !self.accent_gradient.contains("gradient(") {
            return Err(ConfigurationError::InvalidGradient {
                slug: slug.to_string(),
                value: self.accent_gradient.clone(),
            });
        }

        // Surface and background brightness must agree with the declared
        // mode, otherwise body text would land on a same-contrast surface.
        // Both carry text: the surface in every layout, the background in
        // hero-band frames and gallery card previews.
        for (field, value) in [
            ("surface", &self.surface),
            ("background", &self.background),
        ] {
            if let Some(luma) = relative_luma(value) {
                if self.dark != (luma < 0.5) {
                    return Err(ConfigurationError::ContrastMismatch {
                        slug: slug.to_string(),
                        field,
                        value: value.clone(),
                        dark: self.dark,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Check whether a string is a hex or rgb/rgba color expression
pub(crate) fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    (value.starts_with("rgb(") || value.starts_with("rgba(")) && value.ends_with(')')
}

/// Approximate relative luminance of a color, in `0.0..=1.0`.
///
/// Understands hex and rgb/rgba expressions; returns `None` for anything
/// else so callers can skip the contrast check rather than guess.
pub(crate) fn relative_luma(value: &str) -> Option<f64> {
    let (r, g, b) = parse_rgb(value)?;
    Some((0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0)
}

fn parse_rgb(value: &str) -> Option<(f64, f64, f64)> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        return Some((
            f64::from(channel(0)?),
            f64::from(channel(2)?),
            f64::from(channel(4)?),
        ));
    }

    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut channels = inner.split(',').map(str::trim);
    let mut next = || channels.next()?.parse::<f64>().ok();
    Some((next()?, next()?, next()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme(dark: bool, surface: &str) -> Theme {
        Theme {
            accent: "#38BDF8".to_string(),
            accent_gradient: "linear-gradient(135deg, #38BDF8 0%, #6366F1 55%, #0F172A 100%)"
                .to_string(),
            surface: surface.to_string(),
            background: "#020617".to_string(),
            border: "rgba(148, 163, 184, 0.25)".to_string(),
            text_muted: "#94A3B8".to_string(),
            pill: "rgba(56, 189, 248, 0.16)".to_string(),
            dark,
            pattern: Pattern::Glow,
        }
    }

    #[test]
    fn test_is_css_color() {
        assert!(is_css_color("#0F172A"));
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#ffffff80"));
        assert!(is_css_color("rgba(255, 255, 255, 0.1)"));
        assert!(is_css_color("rgb(10, 20, 30)"));
        assert!(!is_css_color(""));
        assert!(!is_css_color("tomato"));
        assert!(!is_css_color("#12345"));
        assert!(!is_css_color("rgba(1,2,3"));
    }

    #[test]
    fn test_relative_luma_extremes() {
        assert!(relative_luma("#000000").unwrap() < 0.01);
        assert!(relative_luma("#ffffff").unwrap() > 0.99);
        assert!(relative_luma("rgb(255, 255, 255)").unwrap() > 0.99);
        assert_eq!(relative_luma("linear-gradient(#000, #fff)"), None);
    }

    #[test]
    fn test_short_hex_expansion() {
        let short = relative_luma("#1a2").unwrap();
        let long = relative_luma("#11aa22").unwrap();
        assert!((short - long).abs() < 1e-9);
    }

    #[test]
    fn test_valid_dark_theme() {
        sample_theme(true, "#0B1120").validate("demo").unwrap();
    }

    #[test]
    fn test_valid_light_theme() {
        let mut theme = sample_theme(false, "#F8FAFC");
        theme.background = "#EEF2FF".to_string();
        theme.validate("demo").unwrap();
    }

    #[test]
    fn test_dark_flag_with_light_surface_rejected() {
        let result = sample_theme(true, "#F8FAFC").validate("demo");
        assert!(matches!(
            result,
            Err(ConfigurationError::ContrastMismatch {
                field: "surface",
                dark: true,
                ..
            })
        ));
    }

    #[test]
    fn test_dark_flag_with_light_background_rejected() {
        let mut theme = sample_theme(true, "#0B1120");
        theme.background = "#FFFFFF".to_string();
        assert!(matches!(
            theme.validate("demo"),
            Err(ConfigurationError::ContrastMismatch {
                field: "background",
                dark: true,
                ..
            })
        ));
    }

    #[test]
    fn test_light_flag_with_dark_background_rejected() {
        let mut theme = sample_theme(false, "#F8FAFC");
        theme.background = "#020617".to_string();
        assert!(matches!(
            theme.validate("demo"),
            Err(ConfigurationError::ContrastMismatch {
                field: "background",
                dark: false,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_color_rejected() {
        let mut theme = sample_theme(true, "#0B1120");
        theme.pill = String::new();
        let result = theme.validate("demo");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidColor { field: "pill", .. })
        ));
    }

    #[test]
    fn test_non_gradient_accent_gradient_rejected() {
        let mut theme = sample_theme(true, "#0B1120");
        theme.accent_gradient = "#38BDF8".to_string();
        assert!(matches!(
            theme.validate("demo"),
            Err(ConfigurationError::InvalidGradient { .. })
        ));
    }
}
