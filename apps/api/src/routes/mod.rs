pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/parse", post(handlers::handle_parse))
        .route(
            "/api/v1/resumes",
            post(handlers::handle_generate).get(handlers::handle_list),
        )
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get)
                .patch(handlers::handle_update)
                .delete(handlers::handle_delete),
        )
        .route(
            "/api/v1/resumes/:id/export/docx",
            post(handlers::handle_export_docx),
        )
        .route(
            "/api/v1/resumes/:id/export/pdf",
            post(handlers::handle_export_pdf),
        )
        .with_state(state)
}
