//! Synthetic PDF fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use lopdf::{dictionary, Document, Object, Stream};

/// Info dictionary written into fixtures that carry metadata.
pub const FIXTURE_TITLE: &str = "Cap Rock 1 Recorded Plat";
pub const FIXTURE_AUTHOR: &str = "County Clerk";

/// Build a PDF with `pages` Letter-sized pages, optionally with an Info dictionary.
pub fn build_pdf(pages: usize, with_info: bool) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for i in 0..pages {
        let text = format!("BT /F1 12 Tf 72 720 Td (Lot {}) Tj ET", i + 1);
        let content_id = doc.add_object(Stream::new(dictionary! {}, text.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(pages as i64),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if with_info {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(FIXTURE_TITLE),
            "Author" => Object::string_literal(FIXTURE_AUTHOR),
            "CreationDate" => Object::string_literal("D:20190304120000Z"),
        });
        doc.trailer.set("Info", info_id);
    }

    doc
}

/// Write a synthetic PDF to `path`.
pub fn write_pdf(path: &Path, pages: usize, with_info: bool) {
    let mut doc = build_pdf(pages, with_info);
    doc.save(path).unwrap();
}
