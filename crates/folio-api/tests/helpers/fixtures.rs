//! In-memory document fixtures for integration tests.

use std::io::{Cursor, Write};

use lopdf::{dictionary, Document, Object};
use zip::write::FileOptions;
use zip::ZipWriter;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Build a minimal valid PDF with `pages` empty pages.
pub fn pdf_with_pages(pages: usize) -> Vec<u8> {
    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            document
                .add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                })
                .into()
        })
        .collect();

    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => pages as i64,
            "Kids" => kids,
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    document.save_to(&mut buffer).expect("serialize test PDF");
    buffer
}

/// Build a minimal DOCX archive whose body is one paragraph of `count` words.
pub fn docx_with_words(count: usize) -> Vec<u8> {
    let words = (0..count)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ");
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>",
        words
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", FileOptions::default())
        .expect("start document.xml");
    writer.write_all(xml.as_bytes()).expect("write document.xml");
    writer.finish().expect("finish archive").into_inner()
}
