// src/services/parent.rs

use crate::llm::{Agent, AgentFactory, AgentRole, LlmError, Message};

const SYSTEM_PROMPT: &str = "You are an empathetic and professional school communicator. Your task is to draft a brief, positive, and clear note to a student's parent about their recent quiz performance, mentioning the support material the student received and how the parent can help at home.";

pub fn render_user_prompt(
    student_name: &str,
    quiz_topic: &str,
    score: i64,
    support_material: &str,
) -> String {
    format!(
        "Please draft the parent note based on this information:\n\
         - Student's Name: {student_name}\n\
         - Quiz Topic: {quiz_topic}\n\
         - Their Score: {score}%\n\
         - Support Material Provided:\n\
         ---\n\
         {support_material}\n\
         ---\n"
    )
}

pub struct ParentCommunicator {
    agent: Agent,
}

impl ParentCommunicator {
    pub fn new(agents: &AgentFactory) -> Self {
        Self {
            agent: agents.agent(AgentRole::ParentCommunicator),
        }
    }

    pub async fn generate(
        &self,
        student_name: &str,
        quiz_topic: &str,
        score: i64,
        support_material: &str,
    ) -> Result<String, LlmError> {
        tracing::info!("Drafting parent note for {} on '{}'", student_name, quiz_topic);
        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(render_user_prompt(student_name, quiz_topic, score, support_material)),
        ];
        self.agent.invoke(&messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_every_input() {
        let prompt = render_user_prompt("Ben", "Volcanoes", 72, "Worksheet: magma basics");

        assert!(prompt.contains("- Student's Name: Ben\n"));
        assert!(prompt.contains("- Quiz Topic: Volcanoes\n"));
        assert!(prompt.contains("- Their Score: 72%\n"));
        assert!(prompt.contains("---\nWorksheet: magma basics\n---\n"));
    }
}
