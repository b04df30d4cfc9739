pub mod ast;
pub mod codegen;
pub mod error;
pub mod kinetic;
pub mod lexer;
pub mod parser;
pub mod profile;
pub mod runtime;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod token;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::fs;
use std::path::{Path, PathBuf};

use codegen::PageOutput;
use error::{ErrorKind, FolioError, Result};
use profile::{Profile, Timing};

/// File name of the shared component module written by [`build_dir`].
pub const COMPONENT_FILE: &str = "kinetic-text.js";

/// Derive a custom element tag name from a file path.
///
/// Strips leading digits/dashes from the stem, ensures the name contains
/// a hyphen (prefixes with `folio-` if needed).
pub fn derive_tag_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("portfolio");
    let cleaned = stem.trim_start_matches(|c: char| c.is_ascii_digit() || c == '-');
    let name = if cleaned.is_empty() { stem } else { cleaned };
    let name = name.to_ascii_lowercase();
    if name.contains('-') {
        name
    } else {
        format!("folio-{name}")
    }
}

/// Parse and lower a `.folio` source string into a profile, plus any
/// lowering warnings.
pub fn parse(source: &str) -> Result<(Profile, Vec<String>)> {
    let tokens = lexer::lex(source)?;
    let mut parser = parser::Parser::new(tokens);
    let file = parser.parse()?;
    codegen::lower(&file)
}

/// Full compilation producing structured output (for advanced use).
pub fn compile_full(source: &str) -> Result<PageOutput> {
    let (profile, warnings) = parse(source)?;
    Ok(codegen::generate_page(&profile, warnings))
}

/// Compile a `.folio` source string to a self-contained HTML page.
pub fn compile_html(source: &str) -> Result<String> {
    let output = compile_full(source)?;
    Ok(runtime::wrap_html_full(&output))
}

/// Compile a `.folio` source string to an ES module Web Component whose
/// timing follows the source's `kinetic {}` and `hover {}` blocks.
pub fn compile_component(source: &str, tag_name: &str) -> Result<String> {
    let (profile, _) = parse(source)?;
    Ok(runtime::wrap_web_component(&profile.timing, tag_name))
}

/// Load a profile from disk. `.json` files are deserialized directly;
/// anything else is treated as `.folio` source.
pub fn load_profile(path: &Path) -> Result<(Profile, Vec<String>)> {
    let source = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        tracing::debug!(path = %path.display(), "loading JSON profile");
        let profile = Profile::from_json(&source)?;
        if !profile.timing.hover.easing.is_valid() {
            return Err(ErrorKind::Message(format!(
                "hover easing {} has x control points outside 0..1",
                profile.timing.hover.easing.to_css()
            ))
            .into());
        }
        Ok((profile, Vec::new()))
    } else {
        tracing::debug!(path = %path.display(), "compiling folio source");
        parse(&source)
    }
}

/// Compile a file on disk to structured page output.
pub fn compile_file(path: &Path) -> Result<PageOutput> {
    let (profile, warnings) = load_profile(path)?;
    Ok(codegen::generate_page(&profile, warnings))
}

/// Like [`compile_file`], but any warning fails the compilation.
pub fn compile_file_strict(path: &Path) -> Result<PageOutput> {
    let output = compile_file(path)?;
    if output.warnings.is_empty() {
        Ok(output)
    } else {
        Err(ErrorKind::Strict(output.warnings).into())
    }
}

/// Outcome of [`build_dir`].
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, with their size in bytes.
    pub pages: Vec<(PathBuf, usize)>,
    /// The shared component module, when it was written.
    pub component: Option<PathBuf>,
    /// `(source, message)` for every warning.
    pub warnings: Vec<(PathBuf, String)>,
    /// `(source, error)` for every file that failed to compile.
    pub errors: Vec<(PathBuf, FolioError)>,
}

impl BuildReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compile every `.folio` file in `dir` to `<stem>.html` in `outdir`, and
/// write one shared `kinetic-text.js` component alongside them.
///
/// A file that fails to compile is recorded in the report and the rest of
/// the directory is still built. Only I/O problems with `dir` or `outdir`
/// themselves are returned as errors.
pub fn build_dir(dir: &Path, outdir: &Path) -> Result<BuildReport> {
    if !dir.is_dir() {
        return Err(ErrorKind::Message(format!("'{}' is not a directory", dir.display())).into());
    }
    fs::create_dir_all(outdir)?;

    let mut sources: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "folio"))
        .collect();
    sources.sort();

    let mut report = BuildReport::default();
    let mut timing: Option<Timing> = None;

    for path in sources {
        let output = match compile_file(&path) {
            Ok(o) => o,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "build: compile failed");
                report.errors.push((path, e));
                continue;
            }
        };

        for w in &output.warnings {
            report.warnings.push((path.clone(), w.clone()));
        }
        if timing.is_none() {
            timing = Some(*output.timing());
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");
        let out_file = outdir.join(format!("{stem}.html"));
        let html = runtime::wrap_html_full(&output);
        fs::write(&out_file, &html)?;
        tracing::debug!(out = %out_file.display(), bytes = html.len(), "build: wrote page");
        report.pages.push((out_file, html.len()));
    }

    if !report.pages.is_empty() {
        let timing = timing.unwrap_or_default();
        let js = runtime::wrap_web_component(&timing, runtime::DEFAULT_TAG);
        let out_file = outdir.join(COMPONENT_FILE);
        fs::write(&out_file, js)?;
        report.component = Some(out_file);
    }

    Ok(report)
}
