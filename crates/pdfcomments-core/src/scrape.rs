//! Comment scraping driver
//!
//! Walks pages, kinds and comment ids in ascending order so output is
//! reproducible regardless of how the source stores its maps. Each
//! comment is written as soon as it is classified.

use crate::annotation::AnnotationSource;
use crate::classify::classify;
use crate::error::ScrapeError;
use crate::lopdf_source::LopdfSource;
use crate::pages::PageSelection;
use crate::render::render_comment;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, trace};

/// Counters for one scrape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Pages that carried at least one annotation
    pub pages: usize,
    /// Comments written to the output
    pub comments: usize,
    /// Annotations that produced no output
    pub skipped: usize,
}

impl ScrapeSummary {
    fn merge(&mut self, other: ScrapeSummary) {
        self.pages += other.pages;
        self.comments += other.comments;
        self.skipped += other.skipped;
    }
}

fn sorted_entries<K: Ord, V>(map: &HashMap<K, V>) -> Vec<(&K, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Render every comment from `source` into `out`
pub fn scrape_source<S, W>(
    source: &S,
    pages: &PageSelection,
    out: &mut W,
) -> Result<ScrapeSummary, ScrapeError>
where
    S: AnnotationSource + ?Sized,
    W: Write + ?Sized,
{
    let annotations = source.annotations(pages)?;
    let mut summary = ScrapeSummary::default();

    for (&page, by_kind) in sorted_entries(&annotations) {
        summary.pages += 1;
        for (kind, comments) in sorted_entries(by_kind) {
            debug!(page, %kind, count = comments.len(), "processing annotations");
            for (id, record) in sorted_entries(comments) {
                let comment = classify(record);
                if comment.is_empty() {
                    trace!(page, %kind, %id, "no comment text");
                    summary.skipped += 1;
                    continue;
                }

                out.write_all(render_comment(page, &comment.severity, &comment.body).as_bytes())
                    .map_err(ScrapeError::Output)?;
                summary.comments += 1;
            }
        }
    }

    Ok(summary)
}

/// Scrape one PDF file
///
/// The file is closed before this returns, on success or failure.
pub fn scrape_file<W>(
    path: &Path,
    pages: &PageSelection,
    out: &mut W,
) -> Result<ScrapeSummary, ScrapeError>
where
    W: Write + ?Sized,
{
    let io_error = |source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = {
        let mut file = File::open(path).map_err(io_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;
        bytes
    };
    debug!(path = %path.display(), size = bytes.len(), "loaded file");

    let source = LopdfSource::from_bytes(&bytes).map_err(|e| e.in_file(path))?;
    let summary = scrape_source(&source, pages, out).map_err(|e| e.in_file(path))?;

    info!(
        path = %path.display(),
        pages = summary.pages,
        comments = summary.comments,
        skipped = summary.skipped,
        "scraped comments"
    );
    Ok(summary)
}

/// Scrape each file in order, stopping at the first failure
///
/// Output of files processed before the failure has already been written.
pub fn scrape_files<P, W>(
    paths: &[P],
    pages: &PageSelection,
    out: &mut W,
) -> Result<ScrapeSummary, ScrapeError>
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    if paths.is_empty() {
        return Err(ScrapeError::Usage);
    }

    let mut total = ScrapeSummary::default();
    for path in paths {
        total.merge(scrape_file(path.as_ref(), pages, &mut *out)?);
    }
    Ok(total)
}
