//! Resume Forge API library crate.
//!
//! Shared by the `api` server binary and the `validate_templates` tool.

pub mod config;
pub mod db;
pub mod docx;
pub mod errors;
pub mod export;
pub mod models;
pub mod parser;
pub mod render;
pub mod resumes;
pub mod rewrite;
pub mod routes;
pub mod state;
pub mod storage;
pub mod templates;
