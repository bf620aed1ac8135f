mod events;
mod snapshot;
mod tracker;

// Public API of the progress subsystem.
pub use crate::error::TrackerError;
pub use events::{EventBus, Notification, ProgressEvent, ProgressListener};
pub use snapshot::{ProgressSnapshot, WeekSnapshot};
pub use tracker::{LessonCompletion, PersistenceState, ProgressTracker};
