//! PDF review comments as a Markdown checklist
//!
//! Reads highlight annotations from a PDF and renders each one as a task
//! item grouped by page, with an optional severity taken from a
//! "[TAG] " prefix in the comment text.
//!
//! PDF parsing sits behind [`AnnotationSource`]; [`LopdfSource`] is the
//! lopdf-backed implementation used for files on disk.

pub mod annotation;
pub mod classify;
pub mod error;
pub mod lopdf_source;
pub mod pages;
pub mod render;
pub mod scrape;

pub use annotation::{
    AnnotationKind, AnnotationMap, AnnotationRecord, AnnotationSource, CommentId, CommentMap,
    KindMap,
};
pub use classify::{classify, split_severity, ParsedComment};
pub use error::ScrapeError;
pub use lopdf_source::{LopdfAnnotation, LopdfSource};
pub use pages::PageSelection;
pub use render::render_comment;
pub use scrape::{scrape_file, scrape_files, scrape_source, ScrapeSummary};
