//! Rendering targets for decomposed text.

use super::{CharacterUnit, RenderTarget};

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Unit(CharacterUnit),
}

/// An in-memory retained element: flat text before mounting, one inline
/// unit per character after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub children: Vec<Node>,
}

impl Element {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            children: vec![Node::Text(text.into())],
        }
    }

    pub fn units(&self) -> impl Iterator<Item = &CharacterUnit> {
        self.children.iter().filter_map(|n| match n {
            Node::Unit(u) => Some(u),
            Node::Text(_) => None,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.units().count()
    }
}

impl RenderTarget for Element {
    fn text_content(&self) -> String {
        self.children
            .iter()
            .map(|n| match n {
                Node::Text(t) => t.clone(),
                Node::Unit(u) => u.glyph.to_string(),
            })
            .collect()
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn append_unit(&mut self, unit: &CharacterUnit) {
        self.children.push(Node::Unit(unit.clone()));
    }
}

/// Writes units as HTML `<span>`s into a string buffer.
///
/// Each unit becomes
/// `<span class="char" style="display:inline-block;animation-delay:Nms">g</span>`,
/// with the glyph HTML-escaped and the space substitute written as `&nbsp;`.
#[derive(Debug, Clone, Default)]
pub struct MarkupTarget {
    text: String,
    html: String,
}

impl MarkupTarget {
    /// A target whose visible text is `text` (not yet decomposed).
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let html = escape_html(&text);
        Self { text, html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl RenderTarget for MarkupTarget {
    fn text_content(&self) -> String {
        self.text.clone()
    }

    fn clear(&mut self) {
        self.text.clear();
        self.html.clear();
    }

    fn append_unit(&mut self, unit: &CharacterUnit) {
        self.text.push(unit.glyph);
        let glyph = match unit.glyph {
            super::NBSP => "&nbsp;".to_string(),
            c => escape_html(c.encode_utf8(&mut [0u8; 4])),
        };
        self.html.push_str(&format!(
            r#"<span class="char" style="display:inline-block;animation-delay:{}ms">{glyph}</span>"#,
            unit.delay_ms
        ));
    }
}

/// Escape text for use in HTML content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetic::render;

    #[test]
    fn element_text_before_and_after() {
        let mut el = Element::with_text("a b");
        assert_eq!(el.text_content(), "a b");
        render(Some(&mut el), "a b", 10);
        assert_eq!(el.text_content(), "a\u{00A0}b");
        let delays: Vec<u32> = el.units().map(|u| u.delay_ms).collect();
        assert_eq!(delays, vec![0, 10, 20]);
    }

    #[test]
    fn markup_spans_in_order() {
        let mut target = MarkupTarget::new("Hi there");
        render(Some(&mut target), "Hi there", 50);
        let html = target.html();
        assert_eq!(html.matches(r#"class="char""#).count(), 8);
        assert!(html.starts_with(
            r#"<span class="char" style="display:inline-block;animation-delay:0ms">H</span>"#
        ));
        assert!(html.contains(r#"animation-delay:100ms">&nbsp;</span>"#));
        assert!(html.ends_with(r#"animation-delay:350ms">e</span>"#));
    }

    #[test]
    fn markup_escapes_glyphs() {
        let mut target = MarkupTarget::new("<&>");
        render(Some(&mut target), "<&>", 0);
        assert!(target.html().contains(">&lt;</span>"));
        assert!(target.html().contains(">&amp;</span>"));
        assert!(!target.html().contains("><</span>"));
    }

    #[test]
    fn undecomposed_markup_is_escaped_text() {
        assert_eq!(MarkupTarget::new("a<b").html(), "a&lt;b");
    }

    #[test]
    fn escape_quotes_for_attributes() {
        assert_eq!(escape_html(r#"x="1"&'"#), "x=&quot;1&quot;&amp;&#39;");
    }
}
