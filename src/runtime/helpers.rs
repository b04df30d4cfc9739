//! Shared JS generation helpers used by both HTML and Web Component outputs.

/// Encode `s` as a JS string literal that is safe inside an inline
/// `<script>` (`</` is written as `<\/`).
pub(crate) fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string())
        .to_string()
        .replace("</", "<\\/")
}

/// Generate JS console.warn() calls for compiler warnings.
pub(super) fn generate_warnings_js(warnings: &[String]) -> String {
    if warnings.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n// ── Compiler warnings ─────────────────────────────────────────\n");
    for w in warnings {
        out.push_str(&format!("console.warn('[folio]', {});\n", js_string(w)));
    }
    out
}

/// Convert a kebab-case tag name to PascalCase class name.
/// e.g. "kinetic-text" → "KineticText"
pub fn tag_to_class_name(tag: &str) -> String {
    tag.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_script_close() {
        assert_eq!(js_string("a</script>\"b"), r#""a<\/script>\"b""#);
    }

    #[test]
    fn warnings_become_console_calls() {
        let js = generate_warnings_js(&["no projects".to_string()]);
        assert!(js.contains("console.warn('[folio]', \"no projects\");"));
        assert!(generate_warnings_js(&[]).is_empty());
    }

    #[test]
    fn class_names_from_tags() {
        assert_eq!(tag_to_class_name("kinetic-text"), "KineticText");
        assert_eq!(tag_to_class_name("folio-name-title"), "FolioNameTitle");
    }
}
