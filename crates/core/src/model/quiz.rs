use std::collections::BTreeMap;

use thiserror::Error;

/// Minimum score, in percent, needed to pass a quiz.
pub const PASS_THRESHOLD_PERCENT: u32 = 70;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz must contain at least one question")]
    Empty,

    #[error("question {index} has no options")]
    NoOptions { index: usize },

    #[error("question {index} marks option {correct} correct but has {options} options")]
    CorrectOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    #[must_use]
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }
}

/// A multiple-choice quiz. Answers are option indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Builds a quiz after checking every question has a valid correct option.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` for an empty quiz or a malformed question.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(QuizError::NoOptions { index });
            }
            if question.correct >= question.options.len() {
                return Err(QuizError::CorrectOutOfRange {
                    index,
                    correct: question.correct,
                    options: question.options.len(),
                });
            }
        }
        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Scores `answers` against the expected options. Unanswered questions count as wrong.
    #[must_use]
    pub fn score(&self, answers: &QuizAnswers) -> QuizOutcome {
        let correct = self
            .questions
            .iter()
            .enumerate()
            .filter(|(index, question)| answers.get(*index) == Some(question.correct))
            .count();
        QuizOutcome::new(correct, self.questions.len())
    }
}

/// Chosen option per question index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers(BTreeMap<usize, usize>);

impl QuizAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer for `question`.
    pub fn set(&mut self, question: usize, option: usize) {
        self.0.insert(question, option);
    }

    #[must_use]
    pub fn get(&self, question: usize) -> Option<usize> {
        self.0.get(&question).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, usize)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    correct: usize,
    total: usize,
    percentage: u32,
    passed: bool,
}

impl QuizOutcome {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        let (percentage, passed) = if total == 0 {
            (0, false)
        } else {
            let pct = (correct * 200 + total) / (total * 2);
            let passed = correct * 100 >= PASS_THRESHOLD_PERCENT as usize * total;
            (u32::try_from(pct).unwrap_or(u32::MAX), passed)
        };
        Self {
            correct,
            total,
            percentage,
            passed,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Score rounded to the nearest whole percent.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_question_quiz() -> Quiz {
        let questions = (0..10)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    vec!["a".into(), "b".into(), "c".into()],
                    i % 3,
                )
            })
            .collect();
        Quiz::new("Week 1 check", questions).unwrap()
    }

    fn answers_with_correct(quiz: &Quiz, correct: usize) -> QuizAnswers {
        quiz.questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let choice = if i < correct {
                    q.correct()
                } else {
                    (q.correct() + 1) % q.options().len()
                };
                (i, choice)
            })
            .collect()
    }

    #[test]
    fn seven_of_ten_passes() {
        let quiz = ten_question_quiz();
        let outcome = quiz.score(&answers_with_correct(&quiz, 7));
        assert_eq!(outcome.correct(), 7);
        assert_eq!(outcome.percentage(), 70);
        assert!(outcome.passed());
    }

    #[test]
    fn six_of_ten_fails() {
        let quiz = ten_question_quiz();
        let outcome = quiz.score(&answers_with_correct(&quiz, 6));
        assert_eq!(outcome.percentage(), 60);
        assert!(!outcome.passed());
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let quiz = ten_question_quiz();
        let outcome = quiz.score(&QuizAnswers::new());
        assert_eq!(outcome.correct(), 0);
        assert_eq!(outcome.total(), 10);
        assert!(!outcome.passed());
    }

    #[test]
    fn threshold_uses_exact_ratio() {
        // 69.2% would round to 69 and 2/3 to 67; both fail. 7/10 is exactly on the line.
        assert!(!QuizOutcome::new(9, 13).passed());
        assert!(!QuizOutcome::new(2, 3).passed());
        assert!(QuizOutcome::new(7, 10).passed());
        assert!(!QuizOutcome::new(0, 0).passed());
    }

    #[test]
    fn rejects_malformed_quizzes() {
        assert_eq!(Quiz::new("empty", Vec::new()).unwrap_err(), QuizError::Empty);

        let err = Quiz::new("bad", vec![Question::new("Q", Vec::new(), 0)]).unwrap_err();
        assert_eq!(err, QuizError::NoOptions { index: 0 });

        let err = Quiz::new("bad", vec![Question::new("Q", vec!["a".into()], 3)]).unwrap_err();
        assert_eq!(
            err,
            QuizError::CorrectOutOfRange {
                index: 0,
                correct: 3,
                options: 1
            }
        );
    }
}
