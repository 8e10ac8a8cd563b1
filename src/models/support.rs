// src/models/support.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::quiz_result::WrongAnswer;

/// DTO for generating differentiated follow-up material.
#[derive(Debug, Deserialize, Validate)]
pub struct SupportRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,
    #[validate(range(min = 0, max = 100))]
    pub quiz_score: i64,
    #[validate(length(min = 1, max = 100))]
    pub student_name: String,
    #[serde(default)]
    pub student_performance_summary: String,
    #[serde(default)]
    pub wrong_answers: Vec<WrongAnswer>,
}

#[derive(Debug, Serialize)]
pub struct SupportResponse {
    pub differentiated_output: String,
}

/// DTO for drafting a note to a student's parent.
#[derive(Debug, Deserialize, Validate)]
pub struct ParentNoteRequest {
    #[validate(length(min = 1, max = 100))]
    pub student_name: String,
    #[validate(length(min = 1, max = 200))]
    pub quiz_topic: String,
    #[validate(range(min = 0, max = 100))]
    pub score: i64,
    #[serde(default)]
    pub support_material: String,
}

#[derive(Debug, Serialize)]
pub struct ParentNoteResponse {
    pub parent_note: String,
}
