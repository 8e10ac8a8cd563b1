// src/handlers/mod.rs

pub mod generation;
pub mod results;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::config::Config;

/// Success envelope shared by every endpoint: `{"status": "success", "data": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

/// Root liveness endpoint.
pub async fn root(State(config): State<Config>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the EduCopilot API. The system is running.",
        "model": config.llm_model_name,
    }))
}
