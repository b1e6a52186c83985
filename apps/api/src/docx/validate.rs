//! Placeholder validation for the shipped DOCX template assets.
//!
//! Checks the raw `word/document.xml` body for the exact placeholder set the
//! merge pass depends on: five single tags, three required block pairs (each
//! with an inner `{{.}}` item tag), and two optional block pairs that are
//! reported but never fail validation. The check reads the document exactly
//! the way the merge substitutes it — a tag Word has split across formatting
//! runs is one the merge cannot resolve, so it is reported missing here
//! instead of surviving into an exported document as a literal token.

use std::io::{Cursor, Read};

use serde::Serialize;
use zip::ZipArchive;

use crate::docx::{
    MergeError, DOCUMENT_PART, OPTIONAL_BLOCK_TAGS, REQUIRED_BLOCK_TAGS, REQUIRED_SINGLE_TAGS,
};

/// Completeness check of one block placeholder pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockCheck {
    pub tag: String,
    pub has_open: bool,
    pub has_close: bool,
    /// Whether the delimited region contains the `{{.}}` item tag.
    pub has_item_tag: bool,
}

impl BlockCheck {
    pub fn complete(&self) -> bool {
        self.has_open && self.has_close && self.has_item_tag
    }
}

/// Per-template validation result.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateReport {
    pub template: String,
    pub missing_single_tags: Vec<String>,
    pub incomplete_blocks: Vec<BlockCheck>,
    /// Optional blocks found in this asset (informational only).
    pub optional_blocks_present: Vec<String>,
    pub valid: bool,
}

/// Validates one template asset. Archive-level failures (unreadable zip,
/// missing document part) are errors; placeholder problems are reported in
/// the returned [`TemplateReport`].
pub fn validate_template(template_name: &str, bytes: &[u8]) -> Result<TemplateReport, MergeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| MergeError::MissingPart(DOCUMENT_PART.to_string()))?
        .read_to_string(&mut xml)?;

    let missing_single_tags: Vec<String> = REQUIRED_SINGLE_TAGS
        .iter()
        .filter(|tag| !xml.contains(&format!("{{{{{tag}}}}}")))
        .map(|tag| tag.to_string())
        .collect();

    let incomplete_blocks: Vec<BlockCheck> = REQUIRED_BLOCK_TAGS
        .iter()
        .map(|tag| check_block(&xml, tag))
        .filter(|check| !check.complete())
        .collect();

    let optional_blocks_present: Vec<String> = OPTIONAL_BLOCK_TAGS
        .iter()
        .filter(|tag| check_block(&xml, tag).complete())
        .map(|tag| tag.to_string())
        .collect();

    let valid = missing_single_tags.is_empty() && incomplete_blocks.is_empty();

    Ok(TemplateReport {
        template: template_name.to_string(),
        missing_single_tags,
        incomplete_blocks,
        optional_blocks_present,
        valid,
    })
}

fn check_block(text: &str, tag: &str) -> BlockCheck {
    let open = format!("{{{{#{tag}}}}}");
    let close = format!("{{{{/{tag}}}}}");
    let (has_open, has_close) = (text.contains(&open), text.contains(&close));
    let has_item_tag = match (text.find(&open), text.find(&close)) {
        (Some(o), Some(c)) if c > o => text[o..c].contains("{{.}}"),
        _ => false,
    };
    BlockCheck {
        tag: tag.to_string(),
        has_open,
        has_close,
        has_item_tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::test_fixtures::{make_docx, FULL_TEMPLATE_BODY};

    #[test]
    fn test_complete_template_is_valid() {
        let bytes = make_docx(FULL_TEMPLATE_BODY);
        let report = validate_template("Modern", &bytes).unwrap();
        assert!(report.valid, "report: {report:?}");
        assert!(report.missing_single_tags.is_empty());
        assert!(report.incomplete_blocks.is_empty());
        assert_eq!(
            report.optional_blocks_present,
            vec!["certifications".to_string(), "achievements".to_string()]
        );
    }

    #[test]
    fn test_missing_single_tag_is_reported() {
        let body = FULL_TEMPLATE_BODY.replace("{{email}}", "");
        let report = validate_template("Modern", &make_docx(&body)).unwrap();
        assert!(!report.valid);
        assert_eq!(report.missing_single_tags, vec!["email".to_string()]);
    }

    #[test]
    fn test_removed_block_close_marker_flips_only_that_block() {
        let body = FULL_TEMPLATE_BODY.replace("{{/skills}}", "");
        let report = validate_template("Classic", &make_docx(&body)).unwrap();
        assert!(!report.valid);
        assert_eq!(report.incomplete_blocks.len(), 1);
        let check = &report.incomplete_blocks[0];
        assert_eq!(check.tag, "skills");
        assert!(check.has_open && !check.has_close);
    }

    #[test]
    fn test_block_without_item_tag_is_incomplete() {
        let body = FULL_TEMPLATE_BODY.replace(
            "{{#education}}</w:t><w:t>{{.}}",
            "{{#education}}</w:t><w:t>",
        );
        let report = validate_template("Executive", &make_docx(&body)).unwrap();
        assert!(!report.valid);
        assert_eq!(report.incomplete_blocks[0].tag, "education");
        assert!(!report.incomplete_blocks[0].has_item_tag);
    }

    #[test]
    fn test_corrupted_asset_does_not_affect_others() {
        let good = make_docx(FULL_TEMPLATE_BODY);
        let bad = make_docx(&FULL_TEMPLATE_BODY.replace("{{/work_experience}}", ""));

        let good_report = validate_template("Modern", &good).unwrap();
        let bad_report = validate_template("Classic", &bad).unwrap();
        assert!(good_report.valid);
        assert!(!bad_report.valid);
    }

    #[test]
    fn test_unreadable_archive_is_an_error() {
        assert!(validate_template("Modern", b"not a zip archive").is_err());
    }

    #[test]
    fn test_tag_split_across_runs_is_reported_missing() {
        // Word authoring routinely splits a token across formatting runs;
        // the merge cannot substitute such a tag, so the asset must fail here
        let body =
            FULL_TEMPLATE_BODY.replace("<w:t>{{name}}</w:t>", "<w:t>{{na</w:t><w:t>me}}</w:t>");
        let report = validate_template("Modern", &make_docx(&body)).unwrap();
        assert!(!report.valid);
        assert_eq!(report.missing_single_tags, vec!["name".to_string()]);
    }

    #[test]
    fn test_block_opener_split_across_runs_is_incomplete() {
        let body = FULL_TEMPLATE_BODY.replace(
            "<w:t>{{#skills}}</w:t>",
            "<w:t>{{#ski</w:t><w:t>lls}}</w:t>",
        );
        let report = validate_template("Classic", &make_docx(&body)).unwrap();
        assert!(!report.valid);
        let check = &report.incomplete_blocks[0];
        assert_eq!(check.tag, "skills");
        assert!(!check.has_open && check.has_close);
    }
}
