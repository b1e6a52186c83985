use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::render::Rasterizer;
use crate::rewrite::RewriteClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub rewrite: RewriteClient,
    pub config: Config,
    /// Rasterization collaborator behind a trait object so tests can inject
    /// a fake; production wires the HTTP client from `render::raster_client`.
    pub rasterizer: Arc<dyn Rasterizer>,
}
