//! Annotation data model and the capability interface for PDF backends
//!
//! A backend only has to do two things: enumerate annotations as
//! page -> kind -> id -> record, and expose the kind and raw text of a
//! single record. Everything else in the crate is backend-agnostic.

use crate::error::ScrapeError;
use crate::pages::PageSelection;
use std::collections::HashMap;
use std::fmt;

/// PDF annotation subtype
///
/// Variant order is the sort order used when emitting comments, so new
/// variants must only ever be appended before `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    Text,
    Link,
    FreeText,
    Line,
    Square,
    Circle,
    Polygon,
    PolyLine,
    Highlight,
    Underline,
    Squiggly,
    StrikeOut,
    Stamp,
    Caret,
    Ink,
    Popup,
    FileAttachment,
    Sound,
    Movie,
    Widget,
    Screen,
    PrinterMark,
    TrapNet,
    Watermark,
    ThreeD,
    Redact,
    /// Any subtype not defined by ISO 32000
    Custom(String),
}

impl AnnotationKind {
    /// Map a `/Subtype` name to its kind
    pub fn from_subtype(name: &[u8]) -> Self {
        match name {
            b"Text" => AnnotationKind::Text,
            b"Link" => AnnotationKind::Link,
            b"FreeText" => AnnotationKind::FreeText,
            b"Line" => AnnotationKind::Line,
            b"Square" => AnnotationKind::Square,
            b"Circle" => AnnotationKind::Circle,
            b"Polygon" => AnnotationKind::Polygon,
            b"PolyLine" => AnnotationKind::PolyLine,
            b"Highlight" => AnnotationKind::Highlight,
            b"Underline" => AnnotationKind::Underline,
            b"Squiggly" => AnnotationKind::Squiggly,
            b"StrikeOut" => AnnotationKind::StrikeOut,
            b"Stamp" => AnnotationKind::Stamp,
            b"Caret" => AnnotationKind::Caret,
            b"Ink" => AnnotationKind::Ink,
            b"Popup" => AnnotationKind::Popup,
            b"FileAttachment" => AnnotationKind::FileAttachment,
            b"Sound" => AnnotationKind::Sound,
            b"Movie" => AnnotationKind::Movie,
            b"Widget" => AnnotationKind::Widget,
            b"Screen" => AnnotationKind::Screen,
            b"PrinterMark" => AnnotationKind::PrinterMark,
            b"TrapNet" => AnnotationKind::TrapNet,
            b"Watermark" => AnnotationKind::Watermark,
            b"3D" => AnnotationKind::ThreeD,
            b"Redact" => AnnotationKind::Redact,
            other => AnnotationKind::Custom(String::from_utf8_lossy(other).into_owned()),
        }
    }

    /// The `/Subtype` name as written in the PDF
    pub fn subtype_name(&self) -> &str {
        match self {
            AnnotationKind::Text => "Text",
            AnnotationKind::Link => "Link",
            AnnotationKind::FreeText => "FreeText",
            AnnotationKind::Line => "Line",
            AnnotationKind::Square => "Square",
            AnnotationKind::Circle => "Circle",
            AnnotationKind::Polygon => "Polygon",
            AnnotationKind::PolyLine => "PolyLine",
            AnnotationKind::Highlight => "Highlight",
            AnnotationKind::Underline => "Underline",
            AnnotationKind::Squiggly => "Squiggly",
            AnnotationKind::StrikeOut => "StrikeOut",
            AnnotationKind::Stamp => "Stamp",
            AnnotationKind::Caret => "Caret",
            AnnotationKind::Ink => "Ink",
            AnnotationKind::Popup => "Popup",
            AnnotationKind::FileAttachment => "FileAttachment",
            AnnotationKind::Sound => "Sound",
            AnnotationKind::Movie => "Movie",
            AnnotationKind::Widget => "Widget",
            AnnotationKind::Screen => "Screen",
            AnnotationKind::PrinterMark => "PrinterMark",
            AnnotationKind::TrapNet => "TrapNet",
            AnnotationKind::Watermark => "Watermark",
            AnnotationKind::ThreeD => "3D",
            AnnotationKind::Redact => "Redact",
            AnnotationKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subtype_name())
    }
}

/// Identifies one annotation within a (page, kind) bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommentId {
    /// Indirect object (number, generation)
    Object(u32, u16),
    /// Direct dictionary, by position in the page's `/Annots` array
    Inline(usize),
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentId::Object(number, generation) => write!(f, "{} {} R", number, generation),
            CommentId::Inline(index) => write!(f, "inline #{}", index),
        }
    }
}

/// Read-only view of a single annotation
pub trait AnnotationRecord {
    fn kind(&self) -> AnnotationKind;

    /// Raw `/Contents` text, empty when absent
    fn content_string(&self) -> &str;
}

pub type CommentMap<R> = HashMap<CommentId, R>;
pub type KindMap<R> = HashMap<AnnotationKind, CommentMap<R>>;
pub type AnnotationMap<R> = HashMap<u32, KindMap<R>>;

/// A PDF backend able to enumerate annotations
///
/// Iteration order of the returned maps carries no meaning.
pub trait AnnotationSource {
    type Record: AnnotationRecord;

    /// Collect annotations on the selected pages, keyed page -> kind -> id
    ///
    /// Pages without annotations may be omitted.
    fn annotations(
        &self,
        pages: &PageSelection,
    ) -> Result<AnnotationMap<Self::Record>, ScrapeError>;
}
