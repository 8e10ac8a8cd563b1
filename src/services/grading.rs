// src/services/grading.rs

use crate::{
    error::AppError,
    models::{question::QuizQuestion, quiz_result::WrongAnswer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub correct_count: usize,
    pub total_questions: usize,
    /// Rounded down.
    pub score_percent: i64,
    pub wrong_answers: Vec<WrongAnswer>,
}

fn option_at<'a>(question: &'a QuizQuestion, index: usize, what: &str) -> Result<&'a str, AppError> {
    question.options.get(index).map(String::as_str).ok_or_else(|| {
        AppError::BadRequest(format!(
            "{} index {} is out of range for question '{}'",
            what, index, question.question
        ))
    })
}

/// Grades chosen option indices against a quiz, one answer per question.
pub fn grade(quiz: &[QuizQuestion], answers: &[usize]) -> Result<Grade, AppError> {
    if quiz.is_empty() {
        return Err(AppError::BadRequest("Quiz has no questions".to_string()));
    }
    if answers.len() != quiz.len() {
        return Err(AppError::BadRequest(format!(
            "Expected {} answers, got {}",
            quiz.len(),
            answers.len()
        )));
    }

    let mut correct_count = 0;
    let mut wrong_answers = Vec::new();

    for (question, &chosen) in quiz.iter().zip(answers) {
        let correct = option_at(question, question.correct_answer_index, "Correct answer")?;
        let selected = option_at(question, chosen, "Answer")?;

        // Compared by text, so duplicate options count as the same answer.
        if selected == correct {
            correct_count += 1;
        } else {
            wrong_answers.push(WrongAnswer {
                question: question.question.clone(),
                their_answer: selected.to_string(),
                correct_answer: correct.to_string(),
            });
        }
    }

    Ok(Grade {
        correct_count,
        total_questions: quiz.len(),
        score_percent: (correct_count * 100 / quiz.len()) as i64,
        wrong_answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: usize) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec![
                "Evaporation".to_string(),
                "Condensation".to_string(),
                "Precipitation".to_string(),
                "Collection".to_string(),
            ],
            correct_answer_index: correct,
        }
    }

    fn water_cycle_quiz() -> Vec<QuizQuestion> {
        vec![
            question("Water turning into vapor is called?", 0),
            question("Clouds form through?", 1),
            question("Rain is a form of?", 2),
            question("Water gathering in oceans is?", 3),
            question("Vapor cooling into droplets is?", 1),
        ]
    }

    #[test]
    fn three_of_five_scores_sixty() {
        let grade = grade(&water_cycle_quiz(), &[0, 1, 2, 0, 2]).unwrap();

        assert_eq!(grade.correct_count, 3);
        assert_eq!(grade.total_questions, 5);
        assert_eq!(grade.score_percent, 60);
        assert_eq!(
            grade.wrong_answers,
            vec![
                WrongAnswer {
                    question: "Water gathering in oceans is?".to_string(),
                    their_answer: "Evaporation".to_string(),
                    correct_answer: "Collection".to_string(),
                },
                WrongAnswer {
                    question: "Vapor cooling into droplets is?".to_string(),
                    their_answer: "Precipitation".to_string(),
                    correct_answer: "Condensation".to_string(),
                },
            ]
        );
    }

    #[test]
    fn score_rounds_down() {
        let quiz = &water_cycle_quiz()[..3];
        let grade = grade(quiz, &[0, 1, 3]).unwrap();
        assert_eq!(grade.score_percent, 66);
    }

    #[test]
    fn perfect_score_has_no_wrong_answers() {
        let grade = grade(&water_cycle_quiz(), &[0, 1, 2, 3, 1]).unwrap();
        assert_eq!(grade.score_percent, 100);
        assert!(grade.wrong_answers.is_empty());
    }

    #[test]
    fn rejects_bad_submissions() {
        assert!(matches!(grade(&[], &[]), Err(AppError::BadRequest(_))));
        assert!(matches!(
            grade(&water_cycle_quiz(), &[0, 1]),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            grade(&water_cycle_quiz(), &[0, 1, 2, 3, 7]),
            Err(AppError::BadRequest(_))
        ));

        let broken = vec![question("Broken?", 9)];
        assert!(matches!(grade(&broken, &[0]), Err(AppError::BadRequest(_))));
    }
}
