//! pdfcomments
//!
//! Prints the highlight comments of one or more PDFs as a Markdown
//! checklist on stdout. Logs go to stderr; set `RUST_LOG` to see them.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pdfcomments_core::{scrape_files, PageSelection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pdfcomments")]
#[command(
    version,
    about = "Scrape highlight comments from PDFs into a Markdown checklist"
)]
struct Args {
    /// Pages to scrape, e.g. "1-", "2-5" or "1,4,9-"
    #[arg(short, long, default_value = "1-")]
    pages: PageSelection,

    /// PDF files to scrape, processed in order
    files: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // stdout carries the Markdown, so logs must go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    tracing::debug!(files = args.files.len(), pages = %args.pages, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = scrape_files(&args.files, &args.pages, &mut out)?;
    out.flush().context("Failed to flush output")?;

    tracing::info!(
        files = args.files.len(),
        comments = summary.comments,
        "done"
    );
    Ok(())
}
