//! Full-page HTML runtime generation. Produces a self-contained document
//! with inline CSS, pre-decomposed kinetic titles, and the hover script.

use crate::codegen::script::generate_page_bootstrap_js;
use crate::codegen::PageOutput;
use crate::kinetic::surface::escape_html;

use super::helpers::generate_warnings_js;

/// Full HTML document from PageOutput.
pub fn wrap_html_full(output: &PageOutput) -> String {
    let title = escape_html(&output.title);
    let lang = escape_html(&output.lang);
    let css = &output.css;
    let body = wrap_markup(output);
    let hover_js = &output.hover_js;
    let bootstrap_js = generate_page_bootstrap_js();
    let warnings_js = generate_warnings_js(&output.warnings);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
{body}
<script>
{hover_js}
{bootstrap_js}{warnings_js}</script>
</body>
</html>
"##
    )
}

/// Just the page body: background, header, grid, footer. No document shell,
/// styles, or script, for embedding into an existing site.
pub fn wrap_markup(output: &PageOutput) -> String {
    let mut s = String::with_capacity(
        output.header_html.len() + output.grid_html.len() + output.footer_html.len() + 256,
    );
    s.push_str("<div class=\"app\">\n");
    s.push_str("<div class=\"animated-background\"></div>\n");
    s.push_str("<div class=\"container\">\n");
    s.push_str(&output.header_html);
    s.push('\n');
    s.push_str(&output.grid_html);
    s.push('\n');
    if !output.footer_html.is_empty() {
        s.push_str(&output.footer_html);
        s.push('\n');
    }
    s.push_str("</div>\n</div>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::generate_page;
    use crate::profile::Profile;

    fn builtin_page() -> PageOutput {
        generate_page(&Profile::builtin(), Vec::new())
    }

    #[test]
    fn document_shell() {
        let html = wrap_html_full(&builtin_page());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Ayaan Rulhania</title>"));
        assert!(html.contains("@keyframes char-in"));
        assert!(html.contains("function attachKinetic(el)"));
        assert!(html.contains("querySelectorAll('[data-kinetic]')"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn script_follows_markup() {
        let html = wrap_html_full(&builtin_page());
        let grid = html.find("<div class=\"projects-grid\">").unwrap();
        let script = html.find("<script>").unwrap();
        assert!(grid < script);
    }

    #[test]
    fn warnings_are_logged_in_page() {
        let page = generate_page(&Profile::named("Solo"), Vec::new());
        let html = wrap_html_full(&page);
        assert!(html.contains("console.warn('[folio]', \"no projects; the grid will be empty\");"));
    }

    #[test]
    fn markup_has_no_shell() {
        let body = wrap_markup(&builtin_page());
        assert!(body.starts_with("<div class=\"app\">"));
        assert!(!body.contains("<html"));
        assert!(!body.contains("<script"));
        assert!(body.contains("<footer class=\"footer\">"));
    }
}
