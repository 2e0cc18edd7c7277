//! Annotation source backed by lopdf

use crate::annotation::{
    AnnotationKind, AnnotationMap, AnnotationRecord, AnnotationSource, CommentId, KindMap,
};
use crate::error::ScrapeError;
use crate::pages::PageSelection;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;
use tracing::{debug, trace};

/// One annotation read from a page's `/Annots` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LopdfAnnotation {
    kind: AnnotationKind,
    contents: String,
}

impl AnnotationRecord for LopdfAnnotation {
    fn kind(&self) -> AnnotationKind {
        self.kind.clone()
    }

    fn content_string(&self) -> &str {
        &self.contents
    }
}

/// A parsed PDF document
pub struct LopdfSource {
    document: Document,
}

impl LopdfSource {
    /// Parse PDF bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScrapeError> {
        let document =
            Document::load_mem(bytes).map_err(|e| ScrapeError::Parse(e.to_string()))?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    fn page_annotations(&self, page_id: ObjectId) -> Result<KindMap<LopdfAnnotation>, ScrapeError> {
        let doc = &self.document;
        let mut by_kind: KindMap<LopdfAnnotation> = HashMap::new();

        let page = doc
            .get_object(page_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| ScrapeError::Parse(format!("failed to get page dictionary: {}", e)))?;

        let annots = match page.get(b"Annots") {
            Ok(Object::Null) | Err(_) => return Ok(by_kind),
            Ok(obj) => obj,
        };

        // /Annots may itself be an indirect reference; null or dangling is the same as absent
        let annots = match resolve(doc, annots) {
            Ok(Object::Null) | Err(lopdf::Error::ObjectNotFound { .. }) => {
                debug!(?page_id, "treating null /Annots as absent");
                return Ok(by_kind);
            }
            resolved => resolved
                .and_then(|o| o.as_array())
                .map_err(|e| ScrapeError::Parse(format!("/Annots is not an array: {}", e)))?,
        };

        for (index, entry) in annots.iter().enumerate() {
            let (id, annot) = match entry {
                Object::Reference(object_id) => {
                    match doc.get_object(*object_id).and_then(|o| o.as_dict()) {
                        Ok(dict) => (CommentId::Object(object_id.0, object_id.1), dict),
                        Err(e) => {
                            debug!(?object_id, error = %e, "skipping unresolvable annotation");
                            continue;
                        }
                    }
                }
                Object::Dictionary(dict) => (CommentId::Inline(index), dict),
                _ => continue,
            };

            let kind = match annot.get(b"Subtype") {
                Ok(Object::Name(name)) => AnnotationKind::from_subtype(name),
                _ => {
                    trace!(%id, "skipping annotation without /Subtype");
                    continue;
                }
            };

            let contents = annot
                .get(b"Contents")
                .ok()
                .and_then(|obj| resolve(doc, obj).ok())
                .and_then(text_string)
                .unwrap_or_default();

            by_kind
                .entry(kind.clone())
                .or_default()
                .insert(id, LopdfAnnotation { kind, contents });
        }

        Ok(by_kind)
    }
}

impl AnnotationSource for LopdfSource {
    type Record = LopdfAnnotation;

    fn annotations(
        &self,
        pages: &PageSelection,
    ) -> Result<AnnotationMap<LopdfAnnotation>, ScrapeError> {
        let page_ids = self.document.get_pages();
        if page_ids.is_empty() {
            return Err(ScrapeError::Parse("document has no pages".into()));
        }

        let mut result = HashMap::new();
        for (page_number, page_id) in page_ids {
            if !pages.contains(page_number) {
                continue;
            }
            let by_kind = self.page_annotations(page_id)?;
            if !by_kind.is_empty() {
                debug!(page = page_number, kinds = by_kind.len(), "found annotations");
                result.insert(page_number, by_kind);
            }
        }

        Ok(result)
    }
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object, lopdf::Error> {
    match obj {
        Object::Reference(id) => doc.get_object(*id),
        other => Ok(other),
    }
}

fn text_string(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        _ => None,
    }
}

/// Decode a PDF text string
///
/// UTF-16BE and UTF-8 are recognised by their byte order marks; anything
/// else is read as UTF-8 when valid and byte-per-char Latin-1 otherwise.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        return char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    }

    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
