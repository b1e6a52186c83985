//! DOCX template population.
//!
//! The template is a ZIP archive; merging rewrites `word/document.xml` and
//! copies every other part through untouched. Placeholder grammar (fixed by
//! the three shipped assets): single tags `{{name}}` … `{{profile_summary}}`,
//! and repeating blocks `{{#field}} … {{.}} … {{/field}}` expanded once per
//! list element. Missing values substitute as the empty string — a literal
//! placeholder token must never survive into the output.

use std::io::{Cursor, Read, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::docx::{MergeError, DOCUMENT_PART};
use crate::parser::ResumeRecord;

/// Pre-merge validation. Returns every problem at once as human-readable
/// messages so a client can display the full list; empty means valid.
pub fn validate_merge_record(record: &ResumeRecord) -> Vec<String> {
    let mut errors = Vec::new();
    if record.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    errors
}

/// Populates a template archive with a resume record and returns the
/// re-serialized DOCX bytes (DEFLATE-compressed).
pub fn merge_template(template: &[u8], record: &ResumeRecord) -> Result<Vec<u8>, MergeError> {
    let mut archive = ZipArchive::new(Cursor::new(template))?;

    let mut document = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| MergeError::MissingPart(DOCUMENT_PART.to_string()))?
        .read_to_string(&mut document)?;

    let document = populate_document_xml(&document, record)?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    for i in 0..archive.len() {
        let mut part = archive.by_index(i)?;
        let name = part.name().to_string();
        writer.start_file(&name, options)?;
        if name == DOCUMENT_PART {
            writer.write_all(document.as_bytes())?;
        } else {
            let mut buf = Vec::new();
            part.read_to_end(&mut buf)?;
            writer.write_all(&buf)?;
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Runs the full substitution pass over the document body: block expansion
/// first (so `{{.}}` never collides with single tags), then single tags.
fn populate_document_xml(xml: &str, record: &ResumeRecord) -> Result<String, MergeError> {
    let mut document = xml.to_string();

    for (field, items) in [
        ("work_experience", &record.work_experience),
        ("education", &record.education),
        ("skills", &record.skills),
        ("certifications", &record.certifications),
        ("achievements", &record.achievements),
    ] {
        document = expand_block(&document, field, items)?;
    }

    for (tag, value) in [
        ("name", record.name.as_str()),
        ("email", record.email.as_str()),
        ("phone", record.phone.as_str()),
        ("location", record.location.as_str()),
        ("profile_summary", record.profile_summary.as_str()),
    ] {
        document = document.replace(&format!("{{{{{tag}}}}}"), &encode_value(value));
    }

    Ok(document)
}

/// Expands every `{{#field}} … {{/field}}` block pair: each delimited region
/// is repeated per list element with `{{.}}` bound to the element. A template
/// without the block is fine; an opener without its closer (or a stray
/// closer) is not. Expanded output is never rescanned, so item text cannot
/// smuggle new markers into the pass.
fn expand_block(document: &str, field: &str, items: &[String]) -> Result<String, MergeError> {
    let open = format!("{{{{#{field}}}}}");
    let close = format!("{{{{/{field}}}}}");
    let unbalanced = || MergeError::UnbalancedBlock {
        placeholder: field.to_string(),
    };

    let mut document = document.to_string();
    let mut from = 0;
    loop {
        let open_at = match document[from..].find(&open) {
            Some(o) => from + o,
            None => {
                if document[from..].contains(&close) {
                    return Err(unbalanced());
                }
                return Ok(document);
            }
        };
        if document[from..open_at].contains(&close) {
            return Err(unbalanced());
        }
        let close_at = match document[open_at + open.len()..].find(&close) {
            Some(c) => open_at + open.len() + c,
            None => return Err(unbalanced()),
        };

        let body = document[open_at + open.len()..close_at].to_string();
        let mut rendered = String::new();
        for item in items {
            rendered.push_str(&body.replace("{{.}}", &encode_value(item)));
        }

        document.replace_range(open_at..close_at + close.len(), &rendered);
        from = open_at + rendered.len();
    }
}

/// XML-escapes a substituted value; embedded newlines become `<w:br/>` run
/// breaks (the substitution site sits inside a `<w:t>` element).
fn encode_value(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "</w:t><w:br/><w:t>")
}
