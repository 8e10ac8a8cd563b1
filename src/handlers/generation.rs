// src/handlers/generation.rs

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    extractors::ValidJson,
    handlers::ApiResponse,
    models::{
        question::ContentRequest,
        support::{ParentNoteRequest, ParentNoteResponse, SupportRequest, SupportResponse},
    },
    services::CopilotService,
};

/// Runs the lesson plan → quiz workflow.
///
/// Slow by nature: two model calls plus the pacing pause between them.
/// An unparsable quiz comes back as an empty array, not an error.
pub async fn generate_content(
    State(service): State<Arc<CopilotService>>,
    ValidJson(req): ValidJson<ContentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = service.generate_content(&req.topic, &req.grade_level).await?;

    Ok(ApiResponse::success(content))
}

/// Generates remedial, reinforcement or enrichment material depending on the score.
pub async fn generate_support(
    State(service): State<Arc<CopilotService>>,
    ValidJson(req): ValidJson<SupportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let differentiated_output = service
        .generate_support(
            &req.topic,
            req.quiz_score,
            &req.student_name,
            &req.student_performance_summary,
            &req.wrong_answers,
        )
        .await?;

    Ok(ApiResponse::success(SupportResponse {
        differentiated_output,
    }))
}

/// Drafts a short note to the student's parent.
pub async fn generate_parent_note(
    State(service): State<Arc<CopilotService>>,
    ValidJson(req): ValidJson<ParentNoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let parent_note = service
        .generate_parent_note(
            &req.student_name,
            &req.quiz_topic,
            req.score,
            &req.support_material,
        )
        .await?;

    Ok(ApiResponse::success(ParentNoteResponse { parent_note }))
}
