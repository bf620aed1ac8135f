#![forbid(unsafe_code)]

pub mod error;
pub mod lesson_search;
pub mod progress;
pub mod quiz_session;
pub mod week_detail;

pub use course_core::Clock;

pub use error::TrackerError;
pub use lesson_search::{LessonHit, search_lessons};
pub use progress::{
    EventBus, LessonCompletion, Notification, PersistenceState, ProgressEvent, ProgressListener,
    ProgressSnapshot, ProgressTracker, WeekSnapshot,
};
pub use quiz_session::{QuizSession, submit_quiz};
pub use week_detail::{
    DetailCard, PanelSection, SectionBody, SectionKind, WeekDetailPanel, render_week_detail,
};
