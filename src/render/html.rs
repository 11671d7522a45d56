//! HTML fragment assembly for the layout renderers
//!
//! [`HtmlBuilder`] produces the markup tree incrementally: open and close
//! container elements, emit leaf elements with escaped text, and attach
//! inline style declarations for the theme tokens that cannot live in the
//! static stylesheet (accents, gradients, surfaces).

use super::HtmlConfig;

/// Build an HTML fragment incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    out: String,
    open_tags: Vec<&'static str>,
}

impl HtmlBuilder {
    /// Create a new builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            out: String::new(),
            open_tags: Vec::new(),
        }
    }

    fn prefix(&self) -> &str {
        self.config.class_prefix.as_deref().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.open_tags.len())
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, classes: &[&str]) -> String {
        if classes.is_empty() {
            return String::new();
        }
        let prefix = self.prefix();
        let list = classes
            .iter()
            .map(|c| format!("{prefix}{c}"))
            .collect::<Vec<_>>()
            .join(" ");
        format!(r#" class="{list}""#)
    }

    fn style_attr(style: &str) -> String {
        if style.is_empty() {
            String::new()
        } else {
            format!(r#" style="{}""#, escape_attr(style))
        }
    }

    /// Open a container element; must be paired with [`HtmlBuilder::close`]
    pub fn open(&mut self, tag: &'static str, classes: &[&str], style: &str) {
        let line = format!(
            "{}<{}{}{}>{}",
            self.indent_str(),
            tag,
            self.class_attr(classes),
            Self::style_attr(style),
            self.newline()
        );
        self.out.push_str(&line);
        self.open_tags.push(tag);
    }

    /// Close the most recently opened container element
    pub fn close(&mut self) {
        if let Some(tag) = self.open_tags.pop() {
            let line = format!("{}</{}>{}", self.indent_str(), tag, self.newline());
            self.out.push_str(&line);
        }
    }

    /// Emit a leaf element with escaped text content
    pub fn leaf(&mut self, tag: &str, classes: &[&str], style: &str, text: &str) {
        let line = format!(
            "{}<{}{}{}>{}</{}>{}",
            self.indent_str(),
            tag,
            self.class_attr(classes),
            Self::style_attr(style),
            escape_html(text),
            tag,
            self.newline()
        );
        self.out.push_str(&line);
    }

    /// Emit an anchor with an optional href (falls back to a span)
    pub fn link(&mut self, classes: &[&str], style: &str, href: Option<&str>, text: &str) {
        match href {
            Some(href) => {
                let line = format!(
                    "{}<a{}{} href=\"{}\">{}</a>{}",
                    self.indent_str(),
                    self.class_attr(classes),
                    Self::style_attr(style),
                    escape_attr(href),
                    escape_html(text),
                    self.newline()
                );
                self.out.push_str(&line);
            }
            None => self.leaf("span", classes, style, text),
        }
    }

    /// Splice a pre-rendered fragment in as-is, without escaping
    pub fn raw(&mut self, fragment: &str) {
        self.out.push_str(fragment);
        if self.config.pretty_print && !fragment.ends_with('\n') {
            self.out.push('\n');
        }
    }

    /// Emit a self-closing decorative element (dots, dividers)
    pub fn marker(&mut self, classes: &[&str], style: &str) {
        let line = format!(
            "{}<span{}{}></span>{}",
            self.indent_str(),
            self.class_attr(classes),
            Self::style_attr(style),
            self.newline()
        );
        self.out.push_str(&line);
    }

    /// Finish the fragment, closing any elements left open
    pub fn build(mut self) -> String {
        while !self.open_tags.is_empty() {
            self.close();
        }
        self.out
    }
}

/// Escape text content for HTML
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape attribute values (quotes matter here)
pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_nested_structure_and_prefix() {
        let mut b = HtmlBuilder::new(HtmlConfig::default().with_pretty_print(false));
        b.open("div", &["card"], "");
        b.leaf("h1", &["title"], "", "Hola");
        b.close();
        let html = b.build();
        assert_eq!(
            html,
            r#"<div class="cvf-card"><h1 class="cvf-title">Hola</h1></div>"#
        );
    }

    #[test]
    fn test_inline_style_attribute() {
        let mut b = HtmlBuilder::new(HtmlConfig::default().with_pretty_print(false));
        b.marker(&["dot"], "background: #38BDF8");
        let html = b.build();
        assert_eq!(
            html,
            r#"<span class="cvf-dot" style="background: #38BDF8"></span>"#
        );
    }

    #[test]
    fn test_link_without_href_is_span() {
        let mut b = HtmlBuilder::new(HtmlConfig::default().with_pretty_print(false));
        b.link(&["value"], "", None, "+52 55 1234 5678");
        assert_eq!(
            b.build(),
            r#"<span class="cvf-value">+52 55 1234 5678</span>"#
        );
    }

    #[test]
    fn test_build_closes_dangling_elements() {
        let mut b = HtmlBuilder::new(HtmlConfig::default().with_pretty_print(false));
        b.open("div", &[], "");
        b.open("section", &[], "");
        let html = b.build();
        assert_eq!(html, "<div><section></section></div>");
    }

    #[test]
    fn test_custom_prefix() {
        let mut b = HtmlBuilder::new(
            HtmlConfig::default()
                .with_pretty_print(false)
                .with_class_prefix("x-"),
        );
        b.leaf("p", &["muted"], "", "texto");
        assert_eq!(b.build(), r#"<p class="x-muted">texto</p>"#);
    }
}
