use std::sync::Arc;

use course_core::Clock;
use course_core::curriculum::badge_info;
use course_core::model::{BadgeId, LessonMark, LessonNumber, ProgressRecord, WeekNumber};
use storage::repository::{ProgressRepository, StorageError};

use super::events::{EventBus, Notification, ProgressEvent, ProgressListener};
use super::snapshot::ProgressSnapshot;
use crate::error::TrackerError;

/// Health of the durable copy as seen by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceState {
    /// Last read or write succeeded.
    Healthy,
    /// The last write failed; later mutations keep retrying.
    WriteFailing,
    /// The durable copy could not be read. Mutations stay in memory so the
    /// unread copy is not overwritten; an explicit `save` still writes.
    InMemoryOnly,
}

/// Result of `ProgressTracker::mark_lesson_completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonCompletion {
    AlreadyCompleted,
    Recorded { badge_awarded: Option<BadgeId> },
}

/// Owns the learner's progress record and keeps the durable copy in sync.
///
/// Every mutation persists the full record immediately. Persistence failures
/// are logged and never fail the mutation itself.
pub struct ProgressTracker {
    clock: Clock,
    repo: Arc<dyn ProgressRepository>,
    record: ProgressRecord,
    events: EventBus,
    persistence: PersistenceState,
}

impl ProgressTracker {
    /// Load the persisted record, or start from the default curriculum record.
    ///
    /// Never fails: unreadable or invalid stored data is logged and replaced
    /// by the default record in memory.
    pub async fn load(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        let (record, persistence) = match repo.load_progress().await {
            Ok(Some(record)) => {
                tracing::debug!(
                    completed = record.completed_lessons(),
                    badges = record.badges().len(),
                    "loaded progress"
                );
                (record, PersistenceState::Healthy)
            }
            Ok(None) => {
                tracing::debug!("no stored progress, starting fresh");
                (ProgressRecord::new(), PersistenceState::Healthy)
            }
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%reason, "discarding unreadable progress record");
                (ProgressRecord::new(), PersistenceState::Healthy)
            }
            Err(err) => {
                tracing::warn!(error = %err, "progress storage unavailable, continuing in memory");
                (ProgressRecord::new(), PersistenceState::InMemoryOnly)
            }
        };

        Self {
            clock,
            repo,
            record,
            events: EventBus::new(),
            persistence,
        }
    }

    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    #[must_use]
    pub fn persistence_state(&self) -> PersistenceState {
        self.persistence
    }

    pub fn subscribe(&mut self, listener: Arc<dyn ProgressListener>) {
        self.events.subscribe(listener);
    }

    /// Refresh the display and stamp the session start.
    pub async fn start_session(&mut self) {
        self.refresh_display();
        self.record.touch(self.clock.now());
        self.persist().await;
    }

    /// Mark a lesson as completed and award the week badge when it was the last one.
    ///
    /// Completing an already-completed lesson changes nothing. Weeks may be
    /// completed in any order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidArgument` for an unknown week or a lesson
    /// number outside the week. State is left untouched in that case.
    pub async fn mark_lesson_completed(
        &mut self,
        week: WeekNumber,
        lesson: LessonNumber,
    ) -> Result<LessonCompletion, TrackerError> {
        let mark = self.record.complete_lesson(week, lesson, self.clock.now())?;
        let LessonMark::Recorded { week_finished } = mark else {
            tracing::debug!(%week, %lesson, "lesson already completed");
            return Ok(LessonCompletion::AlreadyCompleted);
        };

        tracing::debug!(
            %week,
            %lesson,
            completed = self.record.completed_lessons(),
            "lesson completed"
        );
        self.persist().await;
        self.refresh_display();

        let mut badge_awarded = None;
        if week_finished {
            let badge = BadgeId::week_complete(week);
            if self.award_badge(badge.clone()).await {
                badge_awarded = Some(badge);
            }
        }
        Ok(LessonCompletion::Recorded { badge_awarded })
    }

    /// Unknown weeks and lessons read as not completed.
    #[must_use]
    pub fn is_lesson_completed(&self, week: WeekNumber, lesson: LessonNumber) -> bool {
        self.record.is_lesson_completed(week, lesson)
    }

    /// Grant `badge` once. Returns true when it was newly granted.
    pub async fn award_badge(&mut self, badge: BadgeId) -> bool {
        if !self.record.award_badge(badge.clone()) {
            return false;
        }
        tracing::info!(%badge, "badge awarded");
        self.persist().await;

        if let Some(info) = badge_info(&badge) {
            self.events
                .emit(&ProgressEvent::Notification(Notification::badge(info)));
        }
        true
    }

    /// Project the current record and push it to listeners. Stored data is untouched.
    pub fn refresh_display(&self) -> ProgressSnapshot {
        let snapshot = ProgressSnapshot::from_record(&self.record);
        self.events.emit(&ProgressEvent::Refreshed(snapshot.clone()));
        snapshot
    }

    /// Overwrite the durable copy with the in-memory record.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PersistenceUnavailable` if the write fails.
    pub async fn save(&mut self) -> Result<(), TrackerError> {
        match self.repo.save_progress(&self.record).await {
            Ok(()) => {
                self.persistence = PersistenceState::Healthy;
                Ok(())
            }
            Err(err) => {
                self.persistence = PersistenceState::WriteFailing;
                Err(TrackerError::PersistenceUnavailable(err))
            }
        }
    }

    async fn persist(&mut self) {
        if self.persistence == PersistenceState::InMemoryOnly {
            tracing::debug!("skipping write, progress is held in memory only");
            return;
        }
        if let Err(err) = self.save().await {
            tracing::warn!(error = %err, "failed to persist progress, keeping in-memory state");
        }
    }
}
