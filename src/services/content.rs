// src/services/content.rs

//! Lesson plan → quiz pipeline.

use std::time::Duration;

use crate::{
    llm::{Agent, AgentFactory, AgentRole, LlmError, Message},
    models::question::GeneratedContent,
    utils::extract::extract_json_array,
};

const LESSON_SYSTEM_PROMPT: &str = "You are an expert educational assistant. Your task is to design a clear, concise, and engaging lesson plan, including title, objective, materials, and activities.";

const QUIZ_PROMPT: &str = r#"You are a machine that STRICTLY outputs quiz data in JSON format.
Based on the provided lesson plan, generate a JSON array of 5 multiple-choice questions.

**RULES:**
1. The output MUST be a valid JSON array `[]`.
2. Each element MUST be a JSON object `{}`.
3. Each object MUST have three keys: "question", "options" (array of 4 strings), and "correct_answer_index" (integer from 0 to 3).
4. DO NOT output anything before or after the JSON array. Do not use markdown `json` tags.

**EXAMPLE OUTPUT FORMAT:**
[
  {
    "question": "What is the capital of France?",
    "options": ["London", "Berlin", "Paris", "Madrid"],
    "correct_answer_index": 2
  }
]

---
Here is the lesson plan to base the quiz on:
"#;

/// Pause between pipeline stages to stay under the provider's request rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn wait(&self) {
        let delay = self.delay();
        if delay.is_zero() {
            return;
        }
        tracing::info!("Pausing {:?} before the next stage to respect API rate limits", delay);
        tokio::time::sleep(delay).await;
    }
}

pub struct ContentPipeline {
    lesson_designer: Agent,
    quiz_generator: Agent,
    pacing: Pacing,
}

impl ContentPipeline {
    pub fn new(agents: &AgentFactory, pacing: Pacing) -> Self {
        tracing::debug!("Content pipeline pacing: {:?} between stages", pacing.delay());
        Self {
            lesson_designer: agents.agent(AgentRole::LessonDesigner),
            quiz_generator: agents.agent(AgentRole::QuizGenerator),
            pacing,
        }
    }

    /// Runs both stages. A quiz that cannot be parsed comes back empty rather
    /// than failing the run; provider errors fail it.
    pub async fn generate(&self, topic: &str, grade_level: &str) -> Result<GeneratedContent, LlmError> {
        let lesson_plan = self.lesson_plan(topic, grade_level).await?;
        self.pacing.wait().await;
        let quiz = self.quiz(&lesson_plan).await?;

        Ok(GeneratedContent { lesson_plan, quiz })
    }

    async fn lesson_plan(&self, topic: &str, grade_level: &str) -> Result<String, LlmError> {
        tracing::info!("Generating lesson plan for '{}' ({})", topic, grade_level);
        let messages = [
            Message::system(LESSON_SYSTEM_PROMPT),
            Message::user(format!(
                "Please create a lesson plan for a {} class on the topic of: '{}'.",
                grade_level, topic
            )),
        ];
        self.lesson_designer.invoke(&messages).await
    }

    async fn quiz(&self, lesson_plan: &str) -> Result<Vec<serde_json::Value>, LlmError> {
        tracing::info!("Generating quiz from lesson plan");
        let prompt = format!("{}{}", QUIZ_PROMPT, lesson_plan);
        let raw = self.quiz_generator.invoke(&[Message::user(prompt)]).await?;
        tracing::debug!("Raw quiz output: {}", raw);

        Ok(extract_json_array(&raw).unwrap_or_else(|| {
            tracing::warn!("Failed to parse quiz JSON from model output, returning empty quiz");
            Vec::new()
        }))
    }
}
