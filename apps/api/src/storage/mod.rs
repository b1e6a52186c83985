//! Record store and object store access.
//!
//! Plain sqlx queries over the `resumes` table plus two S3 helpers: fetching
//! a pre-authored template asset and storing an exported artifact. Artifact
//! paths are only written back to the record after the artifact is fully
//! produced and stored — no partial persistence.

use anyhow::{anyhow, Result};
use aws_sdk_s3::primitives::ByteStream;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

/// Fields accepted when creating a resume record.
pub struct NewResume<'a> {
    pub user_id: Uuid,
    pub job_title: Option<&'a str>,
    pub original_content: &'a str,
    pub enhanced_content: &'a str,
    pub template_id: Option<&'a str>,
    pub mode: &'a str,
    pub job_description_used: Option<&'a str>,
}

/// Fields a client may change after creation. `None` leaves a column as-is.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ResumeUpdate {
    pub job_title: Option<String>,
    pub enhanced_content: Option<String>,
    pub template_id: Option<String>,
}

pub async fn create_resume(pool: &PgPool, new: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
    let row: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes
            (id, user_id, job_title, original_content, enhanced_content,
             template_id, mode, job_description_used, generated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.user_id)
    .bind(new.job_title)
    .bind(new.original_content)
    .bind(new.enhanced_content)
    .bind(new.template_id)
    .bind(new.mode)
    .bind(new.job_description_used)
    .fetch_one(pool)
    .await?;

    info!("Created resume {} for user {}", row.id, row.user_id);
    Ok(row)
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Lists a user's resumes, newest first.
pub async fn list_resumes_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY generated_at DESC")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn update_resume(
    pool: &PgPool,
    id: Uuid,
    update: &ResumeUpdate,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE resumes SET
            job_title = COALESCE($2, job_title),
            enhanced_content = COALESCE($3, enhanced_content),
            template_id = COALESCE($4, template_id)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(update.job_title.as_deref())
    .bind(update.enhanced_content.as_deref())
    .bind(update.template_id.as_deref())
    .fetch_optional(pool)
    .await
}

/// Records the stored artifact path for one export format.
pub async fn set_artifact_path(
    pool: &PgPool,
    id: Uuid,
    column_is_pdf: bool,
    path: &str,
) -> Result<(), sqlx::Error> {
    let query = if column_is_pdf {
        "UPDATE resumes SET file_path_pdf = $2 WHERE id = $1"
    } else {
        "UPDATE resumes SET file_path_docx = $2 WHERE id = $1"
    };
    sqlx::query(query).bind(id).bind(path).execute(pool).await?;
    Ok(())
}

pub async fn delete_resume(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Fetches a pre-authored DOCX template asset from object storage.
pub async fn fetch_template_asset(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>> {
    let object = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| anyhow!("S3 fetch of '{key}' failed: {e}"))?;
    let bytes = object
        .body
        .collect()
        .await
        .map_err(|e| anyhow!("S3 body read of '{key}' failed: {e}"))?;
    Ok(bytes.into_bytes().to_vec())
}

/// Stores an exported artifact and returns its object key.
pub async fn store_artifact(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    user_id: Uuid,
    resume_id: Uuid,
    filename: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<String> {
    let key = format!("artifacts/{user_id}/{resume_id}/{filename}");
    s3.put_object()
        .bucket(bucket)
        .key(&key)
        .body(ByteStream::from(bytes))
        .content_type(content_type)
        .send()
        .await
        .map_err(|e| anyhow!("S3 upload of '{key}' failed: {e}"))?;

    info!("Stored artifact s3://{bucket}/{key}");
    Ok(key)
}
