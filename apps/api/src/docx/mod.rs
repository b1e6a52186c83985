//! Document-merge path: populate a pre-authored DOCX template with a parsed
//! resume record, plus the standalone placeholder validation used by the
//! `validate_templates` checker binary.

pub mod merge;
pub mod validate;

#[cfg(test)]
pub mod test_fixtures;

use thiserror::Error;

/// The archive part holding the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// MIME type of the produced artifact.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Single-value placeholders every template must carry.
pub const REQUIRED_SINGLE_TAGS: [&str; 5] = ["name", "email", "phone", "location", "profile_summary"];

/// Block placeholder pairs every template must carry.
pub const REQUIRED_BLOCK_TAGS: [&str; 3] = ["work_experience", "education", "skills"];

/// Block placeholder pairs a template may carry.
pub const OPTIONAL_BLOCK_TAGS: [&str; 2] = ["certifications", "achievements"];

/// Template-integrity failures. Every variant names the offending part or
/// placeholder so a half-populated document is never produced silently.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("template archive could not be read: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("template is missing required part '{0}'")]
    MissingPart(String),

    #[error("unbalanced block placeholder pair for '{placeholder}'")]
    UnbalancedBlock { placeholder: String },

    #[error("failed to rewrite template archive: {0}")]
    Io(#[from] std::io::Error),
}
