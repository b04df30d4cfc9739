//! WASM bindings for the folio compiler.
//!
//! Exposes the compiler's core functions to JavaScript via wasm-bindgen.
//! Build with: `wasm-pack build --target web --features wasm`

use serde::Serialize;
use wasm_bindgen::prelude::*;

fn js_err(e: crate::error::FolioError) -> JsError {
    JsError::new(&e.to_string())
}

/// Compile `.folio` source to a self-contained HTML page.
///
/// Returns the HTML string on success, or throws a JS error on failure.
#[wasm_bindgen]
pub fn compile_to_html(source: &str) -> Result<String, JsError> {
    crate::compile_html(source).map_err(js_err)
}

/// Compile `.folio` source to a Web Component ES module.
///
/// `tag_name` must be a valid custom element name (must contain a hyphen).
#[wasm_bindgen]
pub fn compile_to_component(source: &str, tag_name: &str) -> Result<String, JsError> {
    crate::compile_component(source, tag_name).map_err(js_err)
}

/// Decompose `text` into kinetic units: `[{ source, glyph, index, delay_ms }]`.
#[wasm_bindgen]
pub fn decompose_text(text: &str, stagger_ms: u32) -> Result<JsValue, JsError> {
    let units = crate::kinetic::decompose(text, stagger_ms);
    serde_wasm_bindgen::to_value(&units).map_err(|e| JsError::new(&e.to_string()))
}

#[derive(Serialize)]
struct Validation {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    warnings: Vec<String>,
    projects: usize,
    staggers: [u32; 2],
}

/// Validate `.folio` source without producing a page.
///
/// Returns `{ valid, error?, warnings, projects, staggers: [name, section] }`.
#[wasm_bindgen]
pub fn validate(source: &str) -> JsValue {
    let report = match crate::compile_full(source) {
        Ok(output) => Validation {
            valid: true,
            error: None,
            projects: output.card_count(),
            staggers: [output.staggers.0, output.staggers.1],
            warnings: output.warnings,
        },
        Err(e) => Validation {
            valid: false,
            error: Some(e.to_string()),
            warnings: Vec::new(),
            projects: 0,
            staggers: [0, 0],
        },
    };
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}
