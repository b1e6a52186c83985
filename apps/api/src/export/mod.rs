//! Export pipelines: populated DOCX and paginated PDF.
//!
//! Both pipelines start from a stored record's enhanced content, parse it into
//! structured fields, and only persist the artifact path after the artifact is
//! fully produced and uploaded.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::docx::{merge, DOCX_MIME};
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::parser;
use crate::render;
use crate::state::AppState;
use crate::storage;
use crate::templates::{template_info, TemplateId};

pub const PDF_MIME: &str = "application/pdf";

/// A produced artifact, ready to stream back to the client.
pub struct ExportedArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub storage_key: String,
}

/// Builds the download filename: job title with spaces dashed, or "resume",
/// suffixed with the date.
pub fn export_filename(job_title: Option<&str>, date: NaiveDate, ext: &str) -> String {
    let base = match job_title {
        Some(title) if !title.trim().is_empty() => title.trim().replace(' ', "-"),
        _ => "resume".to_string(),
    };
    format!("{base}-{}.{ext}", date.format("%Y-%m-%d"))
}

fn resolve_template(row: &ResumeRow) -> Result<TemplateId, AppError> {
    let raw = row.template_id.as_deref().unwrap_or("modern");
    TemplateId::from_str_opt(raw)
        .ok_or_else(|| AppError::Validation(format!("Unknown template '{raw}'")))
}

/// Produces the populated DOCX for a stored record, uploads it, and records
/// the artifact path.
pub async fn export_docx(state: &AppState, row: &ResumeRow) -> Result<ExportedArtifact, AppError> {
    let template_id = resolve_template(row)?;
    let record = parser::parse(&row.enhanced_content);

    let problems = merge::validate_merge_record(&record);
    if !problems.is_empty() {
        return Err(AppError::ValidationList(problems));
    }

    let asset_key = template_info(template_id).asset_key;
    let template_bytes = storage::fetch_template_asset(&state.s3, &state.config.s3_bucket, asset_key)
        .await
        .map_err(|e| AppError::S3(e.to_string()))?;

    let merged = merge::merge_template(&template_bytes, &record)?;

    let filename = export_filename(
        row.job_title.as_deref(),
        chrono::Utc::now().date_naive(),
        "docx",
    );
    let storage_key = storage::store_artifact(
        &state.s3,
        &state.config.s3_bucket,
        row.user_id,
        row.id,
        &filename,
        merged.clone(),
        DOCX_MIME,
    )
    .await
    .map_err(|e| AppError::S3(e.to_string()))?;

    storage::set_artifact_path(&state.db, row.id, false, &storage_key).await?;
    info!("Exported DOCX for resume {}", row.id);

    Ok(ExportedArtifact {
        filename,
        content_type: DOCX_MIME,
        bytes: merged,
        storage_key,
    })
}

/// Renders the paginated PDF for a stored record, uploads it, and records
/// the artifact path.
pub async fn export_pdf(state: &AppState, row: &ResumeRow) -> Result<ExportedArtifact, AppError> {
    let template_id = resolve_template(row)?;

    let pdf = render::render_document(
        &row.enhanced_content,
        template_id,
        state.rasterizer.as_ref(),
    )
    .await?
    .to_vec();

    let filename = export_filename(
        row.job_title.as_deref(),
        chrono::Utc::now().date_naive(),
        "pdf",
    );
    let storage_key = storage::store_artifact(
        &state.s3,
        &state.config.s3_bucket,
        row.user_id,
        row.id,
        &filename,
        pdf.clone(),
        PDF_MIME,
    )
    .await
    .map_err(|e| AppError::S3(e.to_string()))?;

    storage::set_artifact_path(&state.db, row.id, true, &storage_key).await?;
    info!("Exported PDF for resume {}", row.id);

    Ok(ExportedArtifact {
        filename,
        content_type: PDF_MIME,
        bytes: pdf,
        storage_key,
    })
}

/// Helper for handlers: loads the row or returns 404.
pub async fn load_resume(state: &AppState, id: Uuid) -> Result<ResumeRow, AppError> {
    storage::get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filename_from_job_title() {
        assert_eq!(
            export_filename(Some("Senior Rust Engineer"), date(2026, 8, 23), "pdf"),
            "Senior-Rust-Engineer-2026-08-23.pdf"
        );
    }

    #[test]
    fn test_filename_defaults_to_resume() {
        assert_eq!(
            export_filename(None, date(2026, 1, 5), "docx"),
            "resume-2026-01-05.docx"
        );
    }

    #[test]
    fn test_filename_blank_title_defaults() {
        assert_eq!(
            export_filename(Some("   "), date(2026, 1, 5), "pdf"),
            "resume-2026-01-05.pdf"
        );
    }
}
