// src/store.rs

//! Flat-file persistence.
//!
//! The whole document is loaded on every read and rewritten on every save.
//! Saves within this process are serialized by `write_lock`; two processes
//! pointed at the same file can still lose updates (last writer wins).

use std::{
    collections::HashSet,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::sync::Mutex;

use crate::models::{
    quiz_result::{QuizResult, StoreDocument, WrongAnswer},
    student::Student,
};

const UNKNOWN_STUDENT: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize store document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Valid JSON that does not have the store's shape. Saves refuse to
    /// run against it so the file is never overwritten with less data.
    #[error("store document has an unexpected layout: {0}")]
    Layout(serde_json::Error),
}

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with an empty document if it does not exist yet.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        tracing::info!("Creating empty store at {}", self.path.display());
        self.write_all(&StoreDocument::default()).await
    }

    /// Loads the document. A missing file or one that is not valid JSON
    /// reads as empty; valid JSON of the wrong shape is an error.
    pub async fn read_all(&self) -> Result<StoreDocument, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreDocument::default()),
            Err(e) => return Err(e.into()),
        };

        let value: serde_json::Value = match serde_json::from_slice(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "Store file {} is not valid JSON, treating as empty: {}",
                    self.path.display(),
                    e
                );
                return Ok(StoreDocument::default());
            }
        };

        serde_json::from_value(value).map_err(|e| {
            tracing::error!(
                "Store file {} has an unexpected layout: {}",
                self.path.display(),
                e
            );
            StoreError::Layout(e)
        })
    }

    /// Rewrites the whole document through a temp file and a rename.
    pub async fn write_all(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(doc)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    pub async fn get_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.read_all().await?.students)
    }

    pub async fn get_quiz_results(&self) -> Result<Vec<QuizResult>, StoreError> {
        Ok(self.read_all().await?.quiz_results)
    }

    /// Newest result per (student, topic) pair, newest first.
    /// Results are append-only, so later entries are newer.
    pub async fn latest_results(&self) -> Result<Vec<QuizResult>, StoreError> {
        let results = self.get_quiz_results().await?;
        let mut seen = HashSet::new();

        Ok(results
            .into_iter()
            .rev()
            .filter(|r| seen.insert((r.student_id, r.quiz_topic.clone())))
            .collect())
    }

    /// Appends a new result and rewrites the document.
    pub async fn save_quiz_result(
        &self,
        student_id: i64,
        quiz_topic: &str,
        score: i64,
        total_questions: i64,
        wrong_answers: Vec<WrongAnswer>,
    ) -> Result<QuizResult, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_all().await?;

        let student_name = doc
            .students
            .iter()
            .find(|s| s.id == student_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| UNKNOWN_STUDENT.to_string());

        let result = QuizResult {
            result_id: doc.quiz_results.len() as i64 + 1,
            student_id,
            student_name,
            quiz_topic: quiz_topic.to_string(),
            score_percent: score,
            total_questions,
            wrong_answers,
            timestamp: chrono::Utc::now().to_rfc3339(),
            extra: Default::default(),
        };

        doc.quiz_results.push(result.clone());
        self.write_all(&doc).await?;

        tracing::info!(
            result_id = result.result_id,
            student_id,
            "Saved quiz result for '{}'",
            result.quiz_topic
        );
        Ok(result)
    }
}
