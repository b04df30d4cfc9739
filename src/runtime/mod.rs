//! Generates self-contained HTML pages and ES module Web Components from
//! compiled folio output. Zero client-side dependencies.
//!
//! This module is split into:
//! - `html`: full-page document and bare markup fragment
//! - `component`: `<kinetic-text>` Web Component ES module
//! - `helpers`: shared JS helpers (string embedding, warnings, class names)

mod component;
mod helpers;
mod html;

pub use component::{wrap_web_component, DEFAULT_TAG};
#[cfg(not(target_arch = "wasm32"))]
pub(crate) use helpers::js_string;
pub use helpers::tag_to_class_name;
pub use html::{wrap_html_full, wrap_markup};
