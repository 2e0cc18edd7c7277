//! Comment classification
//!
//! Reviewers often prefix a comment with a severity, e.g.
//! "[MINOR] Anticipated a citation here." The tag is split off when the
//! whole comment has exactly that shape; anything else is kept verbatim.

use crate::annotation::{AnnotationKind, AnnotationRecord};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[TAG] rest`, anchored at both ends. `.` stops at newlines, so a
    /// multi-line comment is never split.
    static ref SEVERITY_PREFIX: Regex = Regex::new(r"^\[([A-Za-z0-9_]+)\] (.*)$").unwrap();
}

/// Severity tag and remaining text of one comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedComment {
    /// Empty when the comment carries no tag
    pub severity: String,
    pub body: String,
}

impl ParsedComment {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Classify one annotation
///
/// Only highlight annotations count as comments; every other kind yields
/// an empty body and must be skipped by the caller.
pub fn classify<R: AnnotationRecord + ?Sized>(record: &R) -> ParsedComment {
    match record.kind() {
        AnnotationKind::Highlight => split_severity(record.content_string()),
        _ => ParsedComment::default(),
    }
}

/// Trim, normalize `\r` to `\n`, then split a leading `[TAG] ` if present
pub fn split_severity(raw: &str) -> ParsedComment {
    let normalized = raw.trim().replace('\r', "\n");

    if let Some(caps) = SEVERITY_PREFIX.captures(&normalized) {
        return ParsedComment {
            severity: caps[1].to_string(),
            body: caps[2].to_string(),
        };
    }

    ParsedComment {
        severity: String::new(),
        body: normalized,
    }
}
