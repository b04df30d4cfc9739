use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use notify::{Event, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tower_livereload::LiveReloadLayer;

use crate::codegen::PageOutput;

mod page;

struct DevState {
    source_path: PathBuf,
    /// Directory the page's relative assets (the profile image) resolve from.
    asset_root: PathBuf,
    tag_name: String,
}

type SharedState = Arc<Mutex<DevState>>;

/// Start the dev server with hot-reload for a `.folio` (or `.json`) file.
pub async fn run_dev_server(path: PathBuf, port: u16) -> anyhow::Result<()> {
    let tag_name = crate::derive_tag_name(&path);
    let asset_root = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let state = Arc::new(Mutex::new(DevState {
        source_path: path.clone(),
        asset_root: asset_root.clone(),
        tag_name,
    }));

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    // File watcher
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() || event.kind.is_create() {
                tracing::info!(paths = ?event.paths, "change detected, reloading");
                reloader.reload();
            }
        }
    })
    .context("creating file watcher")?;
    watcher
        .watch(&asset_root, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {}", asset_root.display()))?;

    let app = Router::new()
        .route("/", get(serve_page))
        .route("/component.js", get(serve_component))
        .route("/profile.json", get(serve_profile))
        .route("/compile", post(serve_compile))
        .fallback(serve_asset)
        .layer(livereload)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    eprintln!("folio dev server");
    eprintln!("  file:       {}", path.display());
    eprintln!("  preview:    http://localhost:{port}/");
    eprintln!("  component:  http://localhost:{port}/component.js");
    eprintln!("  profile:    http://localhost:{port}/profile.json");
    eprintln!("  watching for changes...");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "dev server listening");
    axum::serve(listener, app).await?;

    // Keep watcher alive
    drop(watcher);
    Ok(())
}

// ── Compile helper ────────────────────────────────────────────────────

fn compile_source(state: &SharedState) -> (String, Result<PageOutput, String>) {
    let (source_path, tag_name) = match state.lock() {
        Ok(s) => (s.source_path.clone(), s.tag_name.clone()),
        Err(e) => return (String::new(), Err(format!("Lock error: {e}"))),
    };
    let result = crate::compile_file(&source_path).map_err(|e| e.to_string());
    if let Err(e) = &result {
        tracing::warn!(path = %source_path.display(), error = %e, "dev compile failed");
    }
    (tag_name, result)
}

fn file_label(state: &SharedState) -> String {
    state
        .lock()
        .ok()
        .and_then(|s| {
            s.source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

// ── Route handlers ────────────────────────────────────────────────────

/// Serve the compiled page with a warnings panel.
async fn serve_page(State(state): State<SharedState>) -> Html<String> {
    let (_, result) = compile_source(&state);
    match result {
        Ok(output) => Html(page::with_warnings_panel(
            crate::runtime::wrap_html_full(&output),
            &output.warnings,
        )),
        Err(e) => Html(page::build_error_page(&file_label(&state), &e)),
    }
}

/// Serve the Web Component JS module with the source's timing.
async fn serve_component(
    State(state): State<SharedState>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    let (tag_name, result) = compile_source(&state);
    let js = match result {
        Ok(output) => crate::runtime::wrap_web_component(output.timing(), &tag_name),
        Err(e) => component_error_js(&e),
    };
    ([(header::CONTENT_TYPE, "text/javascript")], js)
}

/// Stand-in module body that reports a compile error in the console.
fn component_error_js(error: &str) -> String {
    format!(
        "console.error({});\n",
        crate::runtime::js_string(&format!("folio: {error}"))
    )
}

/// Serve the lowered profile as JSON.
async fn serve_profile(State(state): State<SharedState>) -> Response {
    let (_, result) = compile_source(&state);
    let json = result.and_then(|output| output.profile.to_json().map_err(|e| e.to_string()));
    match json {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e).into_response(),
    }
}

// ── POST /compile: recompile an edited source without saving ────────

#[derive(Deserialize)]
struct CompileRequest {
    source: String,
}

#[derive(Serialize)]
struct CompileResponse {
    html: Option<String>,
    warnings: Vec<String>,
    error: Option<String>,
}

async fn serve_compile(axum::Json(req): axum::Json<CompileRequest>) -> axum::Json<CompileResponse> {
    match crate::compile_full(&req.source) {
        Ok(output) => axum::Json(CompileResponse {
            html: Some(crate::runtime::wrap_html_full(&output)),
            warnings: output.warnings,
            error: None,
        }),
        Err(e) => axum::Json(CompileResponse {
            html: None,
            warnings: Vec::new(),
            error: Some(e.to_string()),
        }),
    }
}

// ── Static assets next to the source file ─────────────────────────────

async fn serve_asset(State(state): State<SharedState>, uri: Uri) -> Response {
    let Some(rel) = safe_relative_path(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let root = match state.lock() {
        Ok(s) => s.asset_root.clone(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let path = root.join(rel);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(_) => {
            tracing::debug!(path = %path.display(), "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Map a request path to a path under the asset root. Rejects anything
/// that could climb out of it.
fn safe_relative_path(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let rel = Path::new(trimmed);
    rel.components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then(|| rel.to_path_buf())
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_stay_under_root() {
        assert_eq!(safe_relative_path("/icn.png"), Some(PathBuf::from("icn.png")));
        assert_eq!(safe_relative_path("/img/me.jpg"), Some(PathBuf::from("img/me.jpg")));
        assert_eq!(safe_relative_path("/../secret"), None);
        assert_eq!(safe_relative_path("/img/../../secret"), None);
        assert_eq!(safe_relative_path("/"), None);
    }

    #[test]
    fn component_error_is_a_single_js_statement() {
        let js = component_error_js("expected '}'\nat line 2 </script>");
        assert_eq!(js.lines().count(), 1);
        assert!(js.starts_with("console.error(\"folio: expected '}'\\nat line 2"));
        assert!(js.contains("<\\/script>"));
        assert!(js.trim_end().ends_with(");"));
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type(Path::new("icn.png")), "image/png");
        assert_eq!(content_type(Path::new("a.JPG")), "application/octet-stream");
        assert_eq!(content_type(Path::new("font.woff2")), "font/woff2");
    }
}
