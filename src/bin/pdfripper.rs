//! CLI binary for pdf-ripper.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig`/`BatchConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_ripper::{
    config::{DEFAULT_BOOKS_DIR, DEFAULT_OUTPUT_DIR},
    extract_to_markdown, process_batch, BatchConfig, BatchSummary, ExtractionConfig,
    NoopProgressSink, PdfiumRenderer, ProgressSink, TesseractOcr,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress sink using indicatif ────────────────────────────────────────

/// Terminal progress sink: one bar tracking pages of the current document,
/// with chunk-range and per-document log lines printed above it.
struct CliProgressSink {
    bar: ProgressBar,
}

impl CliProgressSink {
    fn new() -> Self {
        let bar = ProgressBar::new(0); // length set per document
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>4}/{len} pages  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for CliProgressSink {
    fn on_document_start(&self, path: &Path, total_pages: usize) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.bar.set_length(total_pages as u64);
        self.bar.set_position(0);
        self.bar.set_prefix("Ripping");
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("{name} — {total_pages} pages"))
        ));
    }

    fn on_chunk_start(&self, first_page: usize, last_page: usize, _total_pages: usize) {
        self.bar.println(format!(
            "  {}",
            dim(&format!("Processing pages {first_page} to {last_page}…"))
        ));
    }

    fn on_page_done(&self, _page_number: usize, _total_pages: usize, _text_len: usize) {
        self.bar.inc(1);
    }

    fn on_document_complete(&self, output_path: &Path) {
        self.bar.println(format!(
            "  {} Saved to {}",
            green("✓"),
            bold(&output_path.display().to_string())
        ));
    }

    fn on_batch_start(&self, total_documents: usize) {
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Batch run over {total_documents} document(s)"))
        ));
    }

    fn on_document_skipped(&self, path: &Path) {
        self.bar
            .println(format!("  {} {}", dim("−"), dim(&format!(
                "Skipped {} (output exists)",
                path.display()
            ))));
    }

    fn on_document_failed(&self, path: &Path, reason: &str) {
        let msg = truncate_reason(reason);
        self.bar
            .println(format!("  {} {}: {}", red("✗"), path.display(), red(&msg)));
    }
}

/// Truncate very long error messages to keep output tidy.
///
/// Failure reasons embed document paths, which may contain multi-byte
/// characters; the cut point must land on a char boundary or slicing
/// panics mid-batch.
fn truncate_reason(reason: &str) -> String {
    const MAX_LEN: usize = 120;
    if reason.len() <= MAX_LEN {
        return reason.to_string();
    }
    let mut cut = MAX_LEN - 1;
    while !reason.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}\u{2026}", &reason[..cut])
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Rip one scanned PDF to output/book.md
  pdfripper book.pdf

  # Custom output path, coarser progress chunks, draft-quality DPI
  pdfripper book.pdf -o text/book.md -p 25 -d 150

  # Batch mode: every PDF under books/ to output/, resuming where it left off
  pdfripper --batch

  # Batch mode with explicit directories, reprocessing everything
  pdfripper --batch --books-dir scans -o markdown --no-skip

  # Machine-readable summary
  pdfripper --batch --json

SETUP:
  Tesseract and its language data must be installed, e.g.:
    apt install tesseract-ocr tesseract-ocr-eng
  pdfium is loaded from the system; set PDFIUM_LIB_PATH to override.
"#;

/// Rip scanned PDFs into Markdown with OCR.
#[derive(Parser, Debug)]
#[command(
    name = "pdfripper",
    version,
    about = "Rip scanned PDFs into Markdown by rasterising every page and running OCR over it",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the input PDF (required unless --batch).
    #[arg(required_unless_present = "batch")]
    pdf_path: Option<PathBuf>,

    /// Output markdown file (single mode, default output/<stem>.md) or
    /// output directory (batch mode, default output).
    #[arg(short, long, env = "PDFRIPPER_OUTPUT")]
    output: Option<PathBuf>,

    /// Number of pages per progress update.
    #[arg(short, long, env = "PDFRIPPER_PAGES_PER_CHUNK", default_value_t = 10)]
    pages_per_chunk: usize,

    /// DPI for rendering pages (higher = better quality but slower).
    #[arg(short, long, env = "PDFRIPPER_DPI", default_value_t = 300)]
    dpi: u32,

    /// Process every PDF under --books-dir instead of a single file.
    #[arg(short, long)]
    batch: bool,

    /// Directory scanned for PDFs in batch mode.
    #[arg(long, env = "PDFRIPPER_BOOKS_DIR", default_value = DEFAULT_BOOKS_DIR)]
    books_dir: PathBuf,

    /// Reprocess documents whose output already exists (batch mode).
    #[arg(long)]
    no_skip: bool,

    /// Tesseract language code(s), e.g. eng or eng+fra.
    #[arg(long, env = "PDFRIPPER_LANG", default_value = "eng")]
    lang: String,

    /// Print the final summary as JSON.
    #[arg(long, env = "PDFRIPPER_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "PDFRIPPER_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFRIPPER_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFRIPPER_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs while the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Build config and engines ─────────────────────────────────────────
    let config = ExtractionConfig::builder()
        .dpi(cli.dpi)
        .pages_per_chunk(cli.pages_per_chunk)
        .language(&cli.lang)
        .build()
        .context("Invalid configuration")?;

    let renderer = PdfiumRenderer::new().context("Failed to initialise the PDF renderer")?;
    let ocr = TesseractOcr::new(&config.language).context("Failed to initialise Tesseract")?;

    let cli_sink = show_progress.then(CliProgressSink::new);
    let noop = NoopProgressSink;
    let progress: &dyn ProgressSink = match &cli_sink {
        Some(sink) => sink,
        None => &noop,
    };

    // ── Run ──────────────────────────────────────────────────────────────
    let result = if cli.batch {
        let batch = BatchConfig {
            books_dir: cli.books_dir.clone(),
            output_dir: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            skip_existing: !cli.no_skip,
        };
        run_batch(&cli, &batch, &config, &renderer, &ocr, progress)
    } else {
        run_single(&cli, &config, &renderer, &ocr, progress)
    };

    if let Some(sink) = &cli_sink {
        sink.finish();
    }
    result
}

/// Single-document mode: one PDF in, one markdown file out.
fn run_single(
    cli: &Cli,
    config: &ExtractionConfig,
    renderer: &PdfiumRenderer,
    ocr: &TesseractOcr,
    progress: &dyn ProgressSink,
) -> Result<()> {
    // clap guarantees the positional is present when --batch is absent.
    let pdf_path = cli
        .pdf_path
        .as_deref()
        .context("A PDF path is required unless --batch is given")?;

    let output_path = cli.output.clone().unwrap_or_else(|| {
        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!("{stem}.md"))
    });

    let stats = extract_to_markdown(pdf_path, &output_path, config, renderer, ocr, progress)
        .with_context(|| format!("Failed to extract {}", pdf_path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if !cli.quiet {
        eprintln!(
            "{}  {} pages  {}ms  →  {}",
            green("✔"),
            stats.total_pages,
            stats.duration_ms,
            bold(&output_path.display().to_string()),
        );
    }
    Ok(())
}

/// Batch mode: every PDF under the books directory.
fn run_batch(
    cli: &Cli,
    batch: &BatchConfig,
    config: &ExtractionConfig,
    renderer: &PdfiumRenderer,
    ocr: &TesseractOcr,
    progress: &dyn ProgressSink,
) -> Result<()> {
    let summary = process_batch(batch, config, renderer, ocr, progress)
        .with_context(|| format!("Batch run over {} failed", batch.books_dir.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    let mark = if summary.failed == 0 {
        green("✔")
    } else {
        cyan("⚠")
    };
    eprintln!(
        "{}  {} processed  {} skipped  {}  —  {} total",
        mark,
        bold(&summary.processed.to_string()),
        summary.skipped,
        if summary.failed == 0 {
            dim("0 failed")
        } else {
            red(&format!("{} failed", summary.failed))
        },
        summary.total(),
    );
}
