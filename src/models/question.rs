// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A multiple-choice question as produced by the quiz generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,

    /// Expected to hold exactly four options.
    pub options: Vec<String>,

    /// Index into `options` of the right answer.
    pub correct_answer_index: usize,
}

/// Output of the lesson → quiz pipeline.
///
/// The quiz is kept as raw JSON: whatever parsed out of the model's reply is
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub lesson_plan: String,
    pub quiz: Vec<serde_json::Value>,
}

/// DTO for the content generation workflow.
#[derive(Debug, Deserialize, Validate)]
pub struct ContentRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,
    #[validate(length(min = 1, max = 50))]
    pub grade_level: String,
}
