mod content;
mod ids;
mod progress;
mod quiz;

pub use content::{GuiWindow, ProjectModule, Topic, WeekContent};
pub use ids::{BadgeId, LessonNumber, WeekNumber};
pub use progress::{LessonMark, LessonRecord, ProgressError, ProgressRecord, WeekProgress};
pub use quiz::{PASS_THRESHOLD_PERCENT, Question, Quiz, QuizAnswers, QuizError, QuizOutcome};
