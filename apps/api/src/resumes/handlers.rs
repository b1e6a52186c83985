use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{self, ExportedArtifact};
use crate::models::resume::{OptimizationMode, ResumeRow};
use crate::parser::{self, ResumeRecord};
use crate::state::AppState;
use crate::storage::{self, NewResume, ResumeUpdate};
use crate::templates::{TemplateId, TemplateInfo, RESUME_TEMPLATES};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub user_id: Uuid,
    pub content: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    #[serde(default)]
    pub template_id: Option<TemplateId>,
    #[serde(default)]
    pub mode: OptimizationMode,
}

#[derive(Deserialize)]
pub struct ParsePreviewRequest {
    pub content: String,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [TemplateInfo]> {
    Json(&RESUME_TEMPLATES[..])
}

/// POST /api/v1/parse
/// Structures raw resume text without persisting anything. The parser is
/// total, so this endpoint cannot fail on content.
pub async fn handle_parse(
    Json(req): Json<ParsePreviewRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("Content must not be empty".to_string()));
    }
    Ok(Json(parser::parse(&req.content)))
}

/// POST /api/v1/resumes
/// Rewrites the raw content in the requested mode and persists the record.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("Content must not be empty".to_string()));
    }

    let template_id = req.template_id.unwrap_or(TemplateId::Modern);
    let enhanced = state
        .rewrite
        .rewrite(
            &req.content,
            req.mode,
            template_id,
            req.job_description.as_deref(),
            req.job_title.as_deref(),
        )
        .await?;

    let row = storage::create_resume(
        &state.db,
        NewResume {
            user_id: req.user_id,
            job_title: req.job_title.as_deref(),
            original_content: &req.content,
            enhanced_content: &enhanced,
            template_id: Some(template_id.as_str()),
            mode: req.mode.as_str(),
            job_description_used: req.job_description.as_deref(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = storage::list_resumes_for_user(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = export::load_resume(&state, id).await?;
    Ok(Json(row))
}

/// PATCH /api/v1/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ResumeUpdate>,
) -> Result<Json<ResumeRow>, AppError> {
    if let Some(raw) = update.template_id.as_deref() {
        if TemplateId::from_str_opt(raw).is_none() {
            return Err(AppError::Validation(format!("Unknown template '{raw}'")));
        }
    }
    let row = storage::update_resume(&state.db, id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = storage::delete_resume(&state.db, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/export/docx
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let row = export::load_resume(&state, id).await?;
    let artifact = export::export_docx(&state, &row).await?;
    Ok(artifact_response(artifact)?)
}

/// POST /api/v1/resumes/:id/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let row = export::load_resume(&state, id).await?;
    let artifact = export::export_pdf(&state, &row).await?;
    Ok(artifact_response(artifact)?)
}

fn artifact_response(artifact: ExportedArtifact) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(artifact.content_type),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", artifact.filename))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Bad filename header: {e}")))?,
    );
    Ok((headers, artifact.bytes))
}
