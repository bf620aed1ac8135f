use std::fmt;
use std::sync::Arc;

use course_core::curriculum::BadgeInfo;
use course_core::model::QuizOutcome;

use super::snapshot::ProgressSnapshot;

/// One-shot message for the learner (badge earned, quiz result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub icon: String,
    pub title: String,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn badge(info: &BadgeInfo) -> Self {
        Self {
            icon: info.icon.to_owned(),
            title: info.title.to_owned(),
            message: info.description.to_owned(),
        }
    }

    #[must_use]
    pub fn quiz(outcome: &QuizOutcome) -> Self {
        let pct = outcome.percentage();
        if outcome.passed() {
            Self {
                icon: "✅".into(),
                title: "Quiz Passed!".into(),
                message: format!("You scored {pct}%"),
            }
        } else {
            Self {
                icon: "❌".into(),
                title: "Quiz Failed".into(),
                message: format!("You scored {pct}%. Try again!"),
            }
        }
    }
}

/// State-change notifications pushed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Refreshed(ProgressSnapshot),
    Notification(Notification),
}

/// Presentation adapter hook. Implementations must not call back into the tracker.
pub trait ProgressListener: Send + Sync {
    fn on_event(&self, event: &ProgressEvent);
}

/// Fan-out of events to every subscribed listener, in subscription order.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &ProgressEvent) {
        for listener in &self.listeners {
            listener.on_event(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
