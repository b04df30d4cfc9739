use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use kinetic_folio::codegen::PageOutput;
use kinetic_folio::error::FolioError;
use kinetic_folio::kinetic::surface::Element;
use kinetic_folio::kinetic::{HoverAnimation, TextBlock};
use kinetic_folio::profile::Profile;
use kinetic_folio::runtime;

#[derive(Parser)]
#[command(name = "folio", version)]
#[command(about = "folio: kinetic typography portfolio compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a .folio (or profile .json) file to HTML, a Web Component, JSON, or bare markup
    Compile {
        /// Input .folio or .json file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Custom element tag name (default: derived from filename)
        #[arg(long)]
        tag: Option<String>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Validate a .folio file without producing output
    Check {
        /// Input .folio or .json file
        file: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Batch compile all .folio files in a directory
    Build {
        /// Input directory containing .folio files
        dir: PathBuf,

        /// Output directory for compiled files
        #[arg(long, default_value = "dist")]
        outdir: PathBuf,
    },

    /// Print the built-in portfolio as .folio source
    New {
        /// Write to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Show how a string decomposes into kinetic units
    Inspect {
        /// Text to decompose
        text: String,

        /// Entrance stagger in milliseconds
        #[arg(long, default_value_t = 50)]
        stagger: u32,
    },

    /// Start a hot-reload dev server for a .folio file
    Dev {
        /// Input .folio or .json file
        file: PathBuf,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },
}

/// Output format for the compile command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Self-contained HTML page (default)
    Html,
    /// ES module Web Component
    Component,
    /// Lowered profile as JSON
    Json,
    /// Page body only, for embedding
    Markup,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,kinetic_folio=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            file,
            format,
            tag,
            o,
            strict,
        } => {
            let full_output = compile_or_exit(&file, strict);

            for w in &full_output.warnings {
                eprintln!("warning: {w}");
            }

            let (output_str, kind) = match format {
                OutputFormat::Html => (runtime::wrap_html_full(&full_output), "HTML"),
                OutputFormat::Markup => (runtime::wrap_markup(&full_output), "markup"),
                OutputFormat::Component => {
                    let tag_name = tag.unwrap_or_else(|| kinetic_folio::derive_tag_name(&file));
                    (
                        runtime::wrap_web_component(full_output.timing(), &tag_name),
                        "component",
                    )
                }
                OutputFormat::Json => match full_output.profile.to_json() {
                    Ok(json) => (json, "JSON"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                },
            };

            write_output(o.as_deref(), &output_str, kind);
        }

        Commands::Check { file, strict } => {
            let output = compile_or_exit(&file, strict);
            for w in &output.warnings {
                eprintln!("warning: {w}");
            }
            let warning_count = output.warnings.len();
            if warning_count > 0 {
                eprintln!("{}: {} warning(s)", file.display(), warning_count);
            } else {
                eprintln!(
                    "{}: ok ({} project(s), staggers {}ms / {}ms)",
                    file.display(),
                    output.card_count(),
                    output.staggers.0,
                    output.staggers.1
                );
            }
        }

        Commands::Build { dir, outdir } => {
            let report = match kinetic_folio::build_dir(&dir, &outdir) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            };

            for (path, w) in &report.warnings {
                eprintln!("  warning: {}: {w}", path.display());
            }
            for (path, e) in &report.errors {
                eprintln!("  error: {}: {e}", path.display());
            }
            for (out, bytes) in &report.pages {
                eprintln!("  -> {} ({bytes} bytes)", out.display());
            }
            if let Some(component) = &report.component {
                eprintln!("  -> {}", component.display());
            }

            eprintln!(
                "built {} page(s) ({} errors)",
                report.pages.len(),
                report.errors.len()
            );
            if !report.is_ok() {
                process::exit(1);
            }
        }

        Commands::New { o } => {
            let source = kinetic_folio::codegen::emit_folio(&Profile::builtin());
            write_output(o.as_deref(), &source, "folio source");
        }

        Commands::Inspect { text, stagger } => {
            let mut element = Element::with_text(text);
            let Some(block) = TextBlock::mount(Some(&mut element), stagger) else {
                return;
            };
            let hover = HoverAnimation::default();

            println!("  idx  char      delay   hover");
            for unit in block.units() {
                println!(
                    "  {:>3}  {:<8}  {:>5}ms  +{}ms",
                    unit.index,
                    format!("{:?}", unit.glyph),
                    unit.delay_ms,
                    hover.offset_ms(unit.index)
                );
            }
            println!(
                "{} unit(s), entrance spans {}ms, hover spans {}ms",
                block.len(),
                block.entrance_span_ms(),
                hover.total_ms(block.len())
            );
        }

        Commands::Dev { file, port } => {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("error: failed to create tokio runtime: {e}");
                    process::exit(1);
                }
            };
            rt.block_on(async {
                if let Err(e) = kinetic_folio::server::run_dev_server(file, port).await {
                    eprintln!("error: dev server failed: {e}");
                    process::exit(1);
                }
            });
        }
    }
}

/// Compile `file`, printing the error with a source snippet and exiting on
/// failure.
fn compile_or_exit(file: &Path, strict: bool) -> PageOutput {
    let result = if strict {
        kinetic_folio::compile_file_strict(file)
    } else {
        kinetic_folio::compile_file(file)
    };

    match result {
        Ok(output) => output,
        Err(e) => {
            let source = fs::read_to_string(file).unwrap_or_default();
            print_error(&e, &source);
            process::exit(1);
        }
    }
}

fn write_output(path: Option<&Path>, output: &str, kind: &str) {
    let Some(out_path) = path else {
        print!("{output}");
        return;
    };
    match fs::write(out_path, output) {
        Ok(()) => {
            eprintln!(
                "wrote {kind} to {} ({} bytes)",
                out_path.display(),
                output.len()
            );
        }
        Err(e) => {
            eprintln!("error: cannot write '{}': {e}", out_path.display());
            process::exit(1);
        }
    }
}

fn print_error(e: &FolioError, source: &str) {
    eprintln!("error: {e}");

    if let Some(span) = &e.span {
        if span.start <= source.len() && source.is_char_boundary(span.start) {
            let line_num = source[..span.start].chars().filter(|c| *c == '\n').count() + 1;
            let line_start = source[..span.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
            let line_end = source[span.start..]
                .find('\n')
                .map(|i| span.start + i)
                .unwrap_or(source.len());
            let line = &source[line_start..line_end];
            let col = source[line_start..span.start].chars().count();

            eprintln!();
            eprintln!("  {line_num} | {line}");
            eprintln!(
                "  {} | {}^",
                " ".repeat(line_num.to_string().len()),
                " ".repeat(col)
            );
        }
    }
}
