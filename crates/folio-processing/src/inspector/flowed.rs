//! Flowed-text extraction path (DOCX).
//!
//! DOCX has no page boundaries, so the page count is estimated: extract the
//! run text from `word/document.xml`, count whitespace-separated words, and
//! divide by the words-per-page constant.

use std::io::{Cursor, Read};

use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use folio_core::models::{DocumentFormat, InspectionResult};

use super::InspectError;

/// Average typed-page density used to turn a word count into a page
/// estimate. Fixed heuristic; the result is an estimate, not a guarantee.
pub const WORDS_PER_PAGE: u32 = 275;

pub(super) fn inspect(bytes: &[u8]) -> Result<InspectionResult, InspectError> {
    let text = extract_text(bytes).map_err(InspectError::Unreadable)?;
    let word_count = count_words(&text);

    Ok(InspectionResult {
        page_count: estimate_pages(word_count),
        word_count,
        format: DocumentFormat::Docx,
    })
}

/// Pull the main document part out of the archive and flatten it to text.
fn extract_text(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).context("opening DOCX container")?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("missing word/document.xml")?
        .read_to_string(&mut xml)
        .context("reading word/document.xml")?;

    document_xml_to_text(&xml)
}

/// Collect the character content of `w:t` runs. Paragraph ends, line breaks,
/// tabs, and carriage returns contribute whitespace so words never fuse
/// across block boundaries.
fn document_xml_to_text(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut text_run_depth = 0usize;

    loop {
        match reader.read_event().context("parsing word/document.xml")? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => text_run_depth += 1,
            Event::End(e) if e.local_name().as_ref() == b"t" => {
                text_run_depth = text_run_depth.saturating_sub(1);
            }
            Event::End(e) if e.local_name().as_ref() == b"p" => text.push(' '),
            Event::Empty(e)
                if matches!(e.local_name().as_ref(), b"br" | b"tab" | b"cr") =>
            {
                text.push(' ');
            }
            Event::Text(t) if text_run_depth > 0 => {
                text.push_str(&t.unescape().context("decoding run text")?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Whitespace-run tokenization; empty tokens are discarded by construction.
fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// `max(1, ceil(words / WORDS_PER_PAGE))`; the floor means even an empty
/// document bills as one page.
fn estimate_pages(word_count: u32) -> u32 {
    word_count.div_ceil(WORDS_PER_PAGE).max(1)
}
