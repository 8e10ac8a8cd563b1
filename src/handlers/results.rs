// src/handlers/results.rs

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    extractors::ValidJson,
    handlers::ApiResponse,
    models::quiz_result::{SaveScoreRequest, SubmitQuizRequest},
    services::CopilotService,
};

/// Stores a quiz result that was graded by the caller.
pub async fn save_score(
    State(service): State<Arc<CopilotService>>,
    ValidJson(req): ValidJson<SaveScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = service
        .save_score(
            req.student_id,
            &req.quiz_topic,
            req.score_percent,
            req.total_questions,
            req.wrong_answers,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(result)))
}

/// Grades raw answers against the quiz they were given for, then stores the result.
pub async fn submit_quiz(
    State(service): State<Arc<CopilotService>>,
    ValidJson(req): ValidJson<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = service
        .submit_quiz(req.student_id, &req.quiz_topic, &req.quiz, &req.answers)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(result)))
}

pub async fn list_quiz_results(
    State(service): State<Arc<CopilotService>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ApiResponse::success(service.list_quiz_results().await?))
}

/// Dashboard view: newest result per student and topic.
pub async fn list_latest_results(
    State(service): State<Arc<CopilotService>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ApiResponse::success(service.list_latest_results().await?))
}

pub async fn list_students(
    State(service): State<Arc<CopilotService>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ApiResponse::success(service.list_students().await?))
}
