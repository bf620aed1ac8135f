use course_core::model::{Quiz, QuizAnswers, QuizOutcome};

use crate::progress::{EventBus, Notification, ProgressEvent};

/// Score `answers` against `quiz`; true when the learner reached the pass threshold.
#[must_use]
pub fn submit_quiz(quiz: &Quiz, answers: &QuizAnswers) -> bool {
    quiz.score(answers).passed()
}

/// The quiz currently being taken and the answers picked so far.
///
/// Loading a quiz starts with no answers.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    answers: QuizAnswers,
}

impl QuizSession {
    #[must_use]
    pub fn load(quiz: Quiz) -> Self {
        Self {
            quiz,
            answers: QuizAnswers::new(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// Pick `option` for `question`, replacing an earlier pick.
    pub fn answer(&mut self, question: usize, option: usize) {
        self.answers.set(question, option);
    }

    /// Score the session and announce the result on `events`.
    pub fn submit(&self, events: &EventBus) -> QuizOutcome {
        let outcome = self.quiz.score(&self.answers);
        tracing::debug!(
            quiz = self.quiz.title(),
            correct = outcome.correct(),
            total = outcome.total(),
            passed = outcome.passed(),
            "quiz submitted"
        );
        events.emit(&ProgressEvent::Notification(Notification::quiz(&outcome)));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use course_core::model::Question;

    use crate::progress::ProgressListener;

    #[derive(Default)]
    struct Inbox(Mutex<Vec<Notification>>);

    impl ProgressListener for Inbox {
        fn on_event(&self, event: &ProgressEvent) {
            if let ProgressEvent::Notification(note) = event {
                self.0.lock().unwrap().push(note.clone());
            }
        }
    }

    fn quiz(questions: usize) -> Quiz {
        let questions = (0..questions)
            .map(|i| Question::new(format!("Q{i}"), vec!["yes".into(), "no".into()], 0))
            .collect();
        Quiz::new("Face detection basics", questions).unwrap()
    }

    #[test]
    fn submit_quiz_applies_threshold() {
        let quiz = quiz(10);
        let seven: QuizAnswers = (0..10).map(|i| (i, usize::from(i >= 7))).collect();
        let six: QuizAnswers = (0..10).map(|i| (i, usize::from(i >= 6))).collect();
        assert!(submit_quiz(&quiz, &seven));
        assert!(!submit_quiz(&quiz, &six));
    }

    #[test]
    fn session_announces_result() {
        let inbox = Arc::new(Inbox::default());
        let mut events = EventBus::new();
        events.subscribe(inbox.clone());

        let mut session = QuizSession::load(quiz(4));
        session.answer(0, 0);
        session.answer(1, 0);
        session.answer(2, 1);
        session.answer(2, 0);
        let outcome = session.submit(&events);
        assert_eq!(outcome.correct(), 3);
        assert!(outcome.passed());

        let notes = inbox.0.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Quiz Passed!");
        assert_eq!(notes[0].message, "You scored 75%");
    }

    #[test]
    fn failed_session_invites_retry() {
        let inbox = Arc::new(Inbox::default());
        let mut events = EventBus::new();
        events.subscribe(inbox.clone());

        let session = QuizSession::load(quiz(3));
        let outcome = session.submit(&events);
        assert!(!outcome.passed());
        assert_eq!(
            inbox.0.lock().unwrap()[0].message,
            "You scored 0%. Try again!"
        );
    }
}
