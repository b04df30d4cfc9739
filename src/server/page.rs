use crate::codegen::kinetic_title_html;
use crate::kinetic::surface::escape_html;

/// Insert a dismissable warnings panel just before `</body>`.
pub(super) fn with_warnings_panel(html: String, warnings: &[String]) -> String {
    if warnings.is_empty() {
        return html;
    }
    let items: String = warnings
        .iter()
        .map(|w| format!("    <li>{}</li>\n", escape_html(w)))
        .collect();
    let panel = format!(
        r##"<aside id="folio-dev-warnings" style="position:fixed;right:16px;bottom:16px;max-width:420px;z-index:9999;padding:12px 16px;border-radius:8px;background:#1a1408;border:1px solid #5c4812;color:#e8c766;font:12px/1.6 'JetBrains Mono',monospace;">
  <strong>{count} warning(s)</strong>
  <button onclick="this.parentNode.remove()" style="float:right;background:none;border:none;color:inherit;cursor:pointer;">×</button>
  <ul style="margin:8px 0 0 16px;">
{items}  </ul>
</aside>
"##,
        count = warnings.len(),
    );
    match html.rfind("</body>") {
        Some(at) => {
            let mut out = html;
            out.insert_str(at, &panel);
            out
        }
        None => html + &panel,
    }
}

/// Stand-in page shown while the source fails to compile. The heading uses
/// the same kinetic entrance as the real page.
pub(super) fn build_error_page(file_name: &str, error: &str) -> String {
    let heading = kinetic_title_html("Not quite", 40);
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{file_name}: compile error</title>
<style>
  body {{ margin: 0; min-height: 100vh; display: grid; place-items: center;
    background: radial-gradient(circle at 30% 20%, rgba(245,87,108,0.16), transparent 50%), #0b0b12;
    color: #e6e6f0; font-family: 'Inter', system-ui, sans-serif; }}
  main {{ width: min(680px, 92vw); }}
  h1 {{ font-size: 2.4rem; font-weight: 800; letter-spacing: -0.02em; }}
  h1 .char {{ animation: rise 420ms ease-out both; }}
  @keyframes rise {{ from {{ opacity: 0; transform: translateY(0.4em); }} }}
  .file {{ color: #f5576c; }}
  pre {{ margin: 20px 0; padding: 18px 20px; border-radius: 14px; overflow-x: auto;
    background: linear-gradient(135deg, rgba(102,126,234,0.12), rgba(245,87,108,0.12));
    font: 13px/1.7 'JetBrains Mono', monospace; white-space: pre-wrap; }}
  .hint {{ color: #6c6c88; font-size: 0.85rem; }}
</style>
</head>
<body>
<main>
  <h1>{heading}</h1>
  <p><span class="file">{file_name}</span> did not compile.</p>
  <pre>{error}</pre>
  <p class="hint">Save the file again and this page reloads.</p>
</main>
</body>
</html>"##,
        file_name = escape_html(file_name),
        error = escape_html(error),
    )
}
