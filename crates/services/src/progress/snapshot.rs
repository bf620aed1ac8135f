use serde::Serialize;

use course_core::model::{ProgressRecord, WeekNumber};

/// Derived view of one week, ready for a progress card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSnapshot {
    pub week: WeekNumber,
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
    pub unlocked: bool,
}

/// Aggregated view of learner progress, useful for UI.
///
/// Pure projection of a `ProgressRecord`; building one never touches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub overall_percentage: u32,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub week_count: usize,
    pub badge_count: usize,
    pub weeks: Vec<WeekSnapshot>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn from_record(record: &ProgressRecord) -> Self {
        let weeks = record
            .weeks()
            .map(|(week, progress)| WeekSnapshot {
                week,
                completed: progress.completed(),
                total: progress.total(),
                percentage: progress.percentage(),
                unlocked: record.is_week_unlocked(week),
            })
            .collect();

        Self {
            overall_percentage: record.overall_percentage(),
            completed_lessons: record.completed_lessons(),
            total_lessons: record.total_lessons(),
            week_count: record.week_count(),
            badge_count: record.badges().len(),
            weeks,
        }
    }

    #[must_use]
    pub fn week(&self, week: WeekNumber) -> Option<&WeekSnapshot> {
        self.weeks.iter().find(|item| item.week == week)
    }
}
