// src/services/support.rs

use crate::{
    llm::{Agent, AgentFactory, AgentRole, LlmError, Message},
    models::quiz_result::WrongAnswer,
};

/// Which kind of follow-up a score earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportTier {
    /// Below 70: a worksheet re-teaching what was missed.
    Remedial,
    /// 70 to 90 inclusive.
    Reinforcement,
    /// Above 90: a stretch project.
    Enrichment,
}

impl SupportTier {
    pub fn for_score(score: i64) -> Self {
        if score < 70 {
            SupportTier::Remedial
        } else if score > 90 {
            SupportTier::Enrichment
        } else {
            SupportTier::Reinforcement
        }
    }
}

/// Everything the support prompts are rendered from.
#[derive(Debug, Clone, Copy)]
pub struct SupportContext<'a> {
    pub topic: &'a str,
    pub quiz_score: i64,
    pub student_name: &'a str,
    pub performance_summary: &'a str,
    pub wrong_answers: &'a [WrongAnswer],
}

/// Bulleted rendering of the missed questions, or `None` when there are none.
pub fn format_wrong_answers(wrong_answers: &[WrongAnswer]) -> String {
    if wrong_answers.is_empty() {
        return "None".to_string();
    }

    wrong_answers
        .iter()
        .map(|wa| {
            format!(
                "- Question: {}\n  - Their Answer: {}\n  - Correct Answer: {}",
                wa.question, wa.their_answer, wa.correct_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_prompt(tier: SupportTier, ctx: &SupportContext<'_>) -> String {
    let SupportContext {
        topic,
        quiz_score,
        student_name,
        performance_summary,
        wrong_answers,
    } = *ctx;

    match tier {
        SupportTier::Remedial => format!(
            r#"You are an expert, empathetic tutor creating a personalized remedial worksheet for **{student_name}**.

**Student Context:**
- **General Performance:** {performance_summary}
- **Recent Quiz Score:** {quiz_score}%
- **Specific Mistakes on the Quiz:**
{mistakes}

**Your Task:**
Create a helpful, one-page worksheet titled "{topic}: Let's Review!". It must have these markdown sections:
1.  **A Quick Note for {student_name}:** Write a short, encouraging paragraph. Acknowledge their effort and frame this as a helpful review.
2.  **Let's Revisit the Tricky Parts:** Based *specifically* on their wrong answers, provide a simple, targeted re-explanation of the core concepts they misunderstood.
3.  **Practice Questions:** Write 2-3 new practice questions similar to the ones they got wrong.
4.  **Answer Key:** Provide a clear answer key at the bottom.
Generate only the structured worksheet content."#,
            mistakes = format_wrong_answers(wrong_answers),
        ),
        SupportTier::Enrichment => format!(
            r#"You are an expert curriculum designer for advanced students, creating an enrichment project for **{student_name}**.

**Student Context:**
- **General Performance:** {performance_summary}
- **Recent Quiz Score:** {quiz_score}%

**Your Task:**
Create an exciting "Enrichment Project Brief" titled "{topic}: Expert Challenge!". It must have these markdown sections:
1.  **Congratulations, {student_name}!:** Write a single sentence congratulating them on mastering the material.
2.  **Your Mission:** Based on their profile (e.g., "seeks new challenges"), write a creative, one-sentence project goal.
3.  **Project Outline:** List 3-4 bullet points outlining the project steps.
4.  **Submission Format:** Suggest a creative presentation format (e.g., a short video, a slide deck)."#
        ),
        SupportTier::Reinforcement => format!(
            r#"You are a motivating teacher creating a "Next Steps" activity for **{student_name}**.

**Student Context:**
- **General Performance:** {performance_summary}
- **Recent Quiz Score:** {quiz_score}%

**Your Task:**
Create a short, engaging activity sheet titled "{topic}: Great Job!". It must have these markdown sections:
1.  **Excellent Work, {student_name}!:** Write a single, personalized sentence of praise.
2.  **Challenge Question:** Write one thought-provoking, open-ended question related to the topic.
3.  **Explore Further:** Provide one high-quality link (full URL) to an online resource."#
        ),
    }
}

pub struct SupportGenerator {
    agent: Agent,
}

impl SupportGenerator {
    pub fn new(agents: &AgentFactory) -> Self {
        Self {
            agent: agents.agent(AgentRole::DifferentiatedSupport),
        }
    }

    pub async fn generate(&self, ctx: &SupportContext<'_>) -> Result<String, LlmError> {
        let tier = SupportTier::for_score(ctx.quiz_score);
        tracing::info!(
            "Generating {:?} support for {} (score {})",
            tier,
            ctx.student_name,
            ctx.quiz_score
        );

        let prompt = render_prompt(tier, ctx);
        self.agent.invoke(&[Message::user(prompt)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(score: i64, wrong_answers: &[WrongAnswer]) -> SupportContext<'_> {
        SupportContext {
            topic: "The Water Cycle",
            quiz_score: score,
            student_name: "Alice",
            performance_summary: "Works hard, struggles with vocabulary.",
            wrong_answers,
        }
    }

    #[test]
    fn tiers_follow_score_thresholds() {
        assert_eq!(SupportTier::for_score(0), SupportTier::Remedial);
        assert_eq!(SupportTier::for_score(65), SupportTier::Remedial);
        assert_eq!(SupportTier::for_score(69), SupportTier::Remedial);
        assert_eq!(SupportTier::for_score(70), SupportTier::Reinforcement);
        assert_eq!(SupportTier::for_score(80), SupportTier::Reinforcement);
        assert_eq!(SupportTier::for_score(90), SupportTier::Reinforcement);
        assert_eq!(SupportTier::for_score(91), SupportTier::Enrichment);
        assert_eq!(SupportTier::for_score(95), SupportTier::Enrichment);
    }

    #[test]
    fn each_tier_renders_its_own_template() {
        let remedial = render_prompt(SupportTier::for_score(65), &ctx(65, &[]));
        assert!(remedial.contains("The Water Cycle: Let's Review!"));
        assert!(remedial.contains("Answer Key"));

        let reinforcement = render_prompt(SupportTier::for_score(80), &ctx(80, &[]));
        assert!(reinforcement.contains("The Water Cycle: Great Job!"));
        assert!(reinforcement.contains("Explore Further"));

        let enrichment = render_prompt(SupportTier::for_score(95), &ctx(95, &[]));
        assert!(enrichment.contains("The Water Cycle: Expert Challenge!"));
        assert!(enrichment.contains("Enrichment Project Brief"));
    }

    #[test]
    fn prompts_carry_the_student_context() {
        let prompt = render_prompt(SupportTier::Reinforcement, &ctx(85, &[]));
        assert!(prompt.contains("**Alice**"));
        assert!(prompt.contains("Works hard, struggles with vocabulary."));
        assert!(prompt.contains("85%"));
    }

    #[test]
    fn only_remedial_lists_mistakes() {
        let wrong = [WrongAnswer {
            question: "Where does rain come from?".to_string(),
            their_answer: "The ground".to_string(),
            correct_answer: "Clouds".to_string(),
        }];

        let remedial = render_prompt(SupportTier::Remedial, &ctx(40, &wrong));
        assert!(remedial.contains(
            "- Question: Where does rain come from?\n  - Their Answer: The ground\n  - Correct Answer: Clouds"
        ));

        let enrichment = render_prompt(SupportTier::Enrichment, &ctx(95, &wrong));
        assert!(!enrichment.contains("Where does rain come from?"));
    }

    #[test]
    fn no_mistakes_renders_none() {
        assert_eq!(format_wrong_answers(&[]), "None");
        let remedial = render_prompt(SupportTier::Remedial, &ctx(20, &[]));
        assert!(remedial.contains("**Specific Mistakes on the Quiz:**\nNone\n"));
    }

    #[test]
    fn multiple_mistakes_are_one_per_block() {
        let wrong = vec![
            WrongAnswer {
                question: "Q1".to_string(),
                their_answer: "A".to_string(),
                correct_answer: "B".to_string(),
            },
            WrongAnswer {
                question: "Q2".to_string(),
                their_answer: "C".to_string(),
                correct_answer: "D".to_string(),
            },
        ];
        let block = format_wrong_answers(&wrong);
        assert_eq!(
            block,
            "- Question: Q1\n  - Their Answer: A\n  - Correct Answer: B\n- Question: Q2\n  - Their Answer: C\n  - Correct Answer: D"
        );
    }
}
