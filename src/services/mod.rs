// src/services/mod.rs

//! Orchestration between the generators, the grader and the store.
//! Handlers call into [`CopilotService`] and only ever see `AppError`.

pub mod content;
pub mod grading;
pub mod parent;
pub mod support;

use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    llm::{AgentFactory, GeminiClient, LlmClient},
    models::{
        question::{GeneratedContent, QuizQuestion},
        quiz_result::{QuizResult, WrongAnswer},
        student::Student,
    },
    store::JsonStore,
};

use self::{
    content::{ContentPipeline, Pacing},
    parent::ParentCommunicator,
    support::{SupportContext, SupportGenerator},
};

pub struct CopilotService {
    pipeline: ContentPipeline,
    support: SupportGenerator,
    parent: ParentCommunicator,
    store: JsonStore,
}

impl CopilotService {
    pub fn new(client: Arc<dyn LlmClient>, store: JsonStore, pacing: Pacing) -> Self {
        let agents = AgentFactory::new(client);
        Self {
            pipeline: ContentPipeline::new(&agents, pacing),
            support: SupportGenerator::new(&agents),
            parent: ParentCommunicator::new(&agents),
            store,
        }
    }

    /// Wires the Gemini client and the JSON store described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let client = GeminiClient::new(
            config.llm_base_url.clone(),
            config.llm_model_name.clone(),
            config.google_api_key.clone(),
        );
        Self::new(
            Arc::new(client),
            JsonStore::new(config.database_file.clone()),
            Pacing::fixed(config.stage_delay),
        )
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub async fn generate_content(
        &self,
        topic: &str,
        grade_level: &str,
    ) -> Result<GeneratedContent, AppError> {
        tracing::info!("Running content generation workflow for topic: '{}'", topic);
        let content = self.pipeline.generate(topic, grade_level).await?;
        tracing::info!(
            questions = content.quiz.len(),
            "Content generation workflow completed"
        );
        Ok(content)
    }

    pub async fn generate_support(
        &self,
        topic: &str,
        quiz_score: i64,
        student_name: &str,
        performance_summary: &str,
        wrong_answers: &[WrongAnswer],
    ) -> Result<String, AppError> {
        let ctx = SupportContext {
            topic,
            quiz_score,
            student_name,
            performance_summary,
            wrong_answers,
        };
        Ok(self.support.generate(&ctx).await?)
    }

    pub async fn generate_parent_note(
        &self,
        student_name: &str,
        quiz_topic: &str,
        score: i64,
        support_material: &str,
    ) -> Result<String, AppError> {
        Ok(self
            .parent
            .generate(student_name, quiz_topic, score, support_material)
            .await?)
    }

    pub async fn save_score(
        &self,
        student_id: i64,
        quiz_topic: &str,
        score_percent: i64,
        total_questions: i64,
        wrong_answers: Vec<WrongAnswer>,
    ) -> Result<QuizResult, AppError> {
        Ok(self
            .store
            .save_quiz_result(student_id, quiz_topic, score_percent, total_questions, wrong_answers)
            .await?)
    }

    /// Grades the submission and stores the outcome.
    pub async fn submit_quiz(
        &self,
        student_id: i64,
        quiz_topic: &str,
        quiz: &[QuizQuestion],
        answers: &[usize],
    ) -> Result<QuizResult, AppError> {
        let grade = grading::grade(quiz, answers)?;
        tracing::info!(
            student_id,
            "Graded quiz '{}': {}/{} correct",
            quiz_topic,
            grade.correct_count,
            grade.total_questions
        );

        self.save_score(
            student_id,
            quiz_topic,
            grade.score_percent,
            grade.total_questions as i64,
            grade.wrong_answers,
        )
        .await
    }

    pub async fn list_quiz_results(&self) -> Result<Vec<QuizResult>, AppError> {
        Ok(self.store.get_quiz_results().await?)
    }

    pub async fn list_latest_results(&self) -> Result<Vec<QuizResult>, AppError> {
        Ok(self.store.latest_results().await?)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.store.get_students().await?)
    }
}
