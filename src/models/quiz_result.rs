// src/models/quiz_result.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::{question::QuizQuestion, student::Student};

/// A question the student missed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub their_answer: String,
    #[serde(default)]
    pub correct_answer: String,
}

/// Represents one entry in the `quiz_results` collection.
/// Append-only: never updated or deleted after it is saved.
///
/// Every field defaults so that older or hand-edited entries still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizResult {
    /// Sequential, assigned as `existing results + 1` at save time.
    pub result_id: i64,
    pub student_id: i64,

    /// Copied from the student record when saved; "Unknown" if there was none.
    pub student_name: String,
    pub quiz_topic: String,
    pub score_percent: i64,
    pub total_questions: i64,
    pub wrong_answers: Vec<WrongAnswer>,

    /// RFC 3339 timestamp.
    pub timestamp: String,

    /// Keys this service does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The whole on-disk document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreDocument {
    pub students: Vec<Student>,
    pub quiz_results: Vec<QuizResult>,

    /// Top-level keys other than the two collections.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DTO for saving an already graded quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveScoreRequest {
    pub student_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub quiz_topic: String,
    #[validate(range(min = 0, max = 100))]
    pub score_percent: i64,
    #[validate(range(min = 0))]
    pub total_questions: i64,
    #[serde(default)]
    pub wrong_answers: Vec<WrongAnswer>,
}

/// DTO for submitting raw answers to a generated quiz.
/// The server grades it and stores the result.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    pub student_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub quiz_topic: String,
    #[validate(length(min = 1))]
    pub quiz: Vec<QuizQuestion>,

    /// Chosen option index per question, in quiz order.
    pub answers: Vec<usize>,
}
