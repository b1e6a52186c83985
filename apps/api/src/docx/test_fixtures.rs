//! In-memory DOCX fixtures shared by the merge and validation tests.

use std::io::{Cursor, Read, Write};

use once_cell::sync::Lazy;
use regex::Regex;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::docx::DOCUMENT_PART;

static TEXT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap());

/// A minimal document body carrying every required tag, the two optional
/// blocks, and the `{{.}}` item tag inside each block.
pub const FULL_TEMPLATE_BODY: &str = concat!(
    "<w:t>{{name}}</w:t><w:t>{{email}}</w:t><w:t>{{phone}}</w:t>",
    "<w:t>{{location}}</w:t><w:t>{{profile_summary}}</w:t>",
    "<w:t>{{#work_experience}}</w:t><w:t>{{.}}</w:t><w:t>{{/work_experience}}</w:t>",
    "<w:t>{{#education}}</w:t><w:t>{{.}}</w:t><w:t>{{/education}}</w:t>",
    "<w:t>{{#skills}}</w:t><w:t>{{.}}</w:t><w:t>{{/skills}}</w:t>",
    "<w:t>{{#certifications}}</w:t><w:t>{{.}}</w:t><w:t>{{/certifications}}</w:t>",
    "<w:t>{{#achievements}}</w:t><w:t>{{.}}</w:t><w:t>{{/achievements}}</w:t>",
);

/// Builds a DOCX archive whose `word/document.xml` wraps `body` in a minimal
/// document element.
pub fn make_docx(body: &str) -> Vec<u8> {
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><w:document><w:body>{body}</w:body></w:document>"
    );
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", FileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Extracts the concatenated `<w:t>` text of an archive's document part.
pub fn document_text(bytes: &[u8]) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    TEXT_RUN_RE
        .captures_iter(&xml)
        .map(|cap| cap[1].to_string())
        .collect()
}
