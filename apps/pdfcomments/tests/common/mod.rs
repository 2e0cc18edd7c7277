//! Shared fixtures: small PDFs with annotations, built with lopdf

#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object};
use std::io::Write;
use tempfile::NamedTempFile;

/// Annotation dictionary with the given subtype and `/Contents`
pub fn annotation(subtype: &str, contents: &str) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => subtype,
        "Rect" => vec![100.into(), 600.into(), 300.into(), 620.into()],
        "Contents" => Object::string_literal(contents),
    }
}

/// Serialize a document with one page per entry of `pages`
///
/// Annotations are added as indirect objects in the given order, so ids
/// ascend in insertion order.
pub fn create_test_pdf(pages: Vec<Vec<Dictionary>>) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for annotations in pages {
        let refs: Vec<Object> = annotations
            .into_iter()
            .map(|a| Object::Reference(doc.add_object(a)))
            .collect();

        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if !refs.is_empty() {
            page.set("Annots", refs);
        }
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Write PDF bytes to a temporary `.pdf` file
pub fn write_temp_pdf(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
