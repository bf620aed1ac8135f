use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curriculum;
use crate::model::ids::{BadgeId, LessonNumber, WeekNumber};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("week {0} is not part of the curriculum")]
    UnknownWeek(WeekNumber),

    #[error("lesson {lesson} does not exist in week {week}")]
    UnknownLesson {
        week: WeekNumber,
        lesson: LessonNumber,
    },

    #[error("inconsistent progress record: {0}")]
    Inconsistent(String),
}

//
// ─── LESSONS & WEEKS ───────────────────────────────────────────────────────────
//

/// Completion marker for a single lesson. Its presence is the completion signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    completed: bool,
    completed_at: DateTime<Utc>,
}

impl LessonRecord {
    #[must_use]
    pub fn new(completed_at: DateTime<Utc>) -> Self {
        Self {
            completed: true,
            completed_at,
        }
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekProgress {
    completed: u32,
    total: u32,
    #[serde(default)]
    lessons: BTreeMap<LessonNumber, LessonRecord>,
}

impl WeekProgress {
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self {
            completed: 0,
            total,
            lessons: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn lessons(&self) -> &BTreeMap<LessonNumber, LessonRecord> {
        &self.lessons
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    /// Completion percentage rounded to the nearest integer.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        rounded_percentage(self.completed, self.total)
    }

    fn contains_lesson(&self, lesson: LessonNumber) -> bool {
        (1..=self.total).contains(&u32::from(lesson.value()))
    }
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Outcome of marking a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonMark {
    /// The lesson was already recorded; nothing changed.
    AlreadyCompleted,
    /// The lesson was recorded. `week_finished` is set when it was the week's last lesson.
    Recorded { week_finished: bool },
}

/// Full persisted learner progress across all weeks.
///
/// Counters are kept alongside the lesson map so the serialized form stays
/// readable on its own; `validate` checks they agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    weeks: BTreeMap<WeekNumber, WeekProgress>,
    total_lessons: u32,
    completed_lessons: u32,
    #[serde(default)]
    badges: Vec<BadgeId>,
    #[serde(default)]
    last_accessed: Option<DateTime<Utc>>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        let weeks: BTreeMap<WeekNumber, WeekProgress> = curriculum::lesson_totals()
            .map(|(week, total)| (week, WeekProgress::new(total)))
            .collect();
        let total_lessons = weeks.values().map(WeekProgress::total).sum();
        Self {
            weeks,
            total_lessons,
            completed_lessons: 0,
            badges: Vec::new(),
            last_accessed: None,
        }
    }
}

impl ProgressRecord {
    /// Fresh record for the built-in curriculum with nothing completed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn week(&self, week: WeekNumber) -> Option<&WeekProgress> {
        self.weeks.get(&week)
    }

    pub fn weeks(&self) -> impl Iterator<Item = (WeekNumber, &WeekProgress)> {
        self.weeks.iter().map(|(week, progress)| (*week, progress))
    }

    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    #[must_use]
    pub fn completed_lessons(&self) -> u32 {
        self.completed_lessons
    }

    #[must_use]
    pub fn badges(&self) -> &[BadgeId] {
        &self.badges
    }

    #[must_use]
    pub fn has_badge(&self, badge: &BadgeId) -> bool {
        self.badges.contains(badge)
    }

    #[must_use]
    pub fn last_accessed(&self) -> Option<DateTime<Utc>> {
        self.last_accessed
    }

    /// Overall completion percentage rounded to the nearest integer.
    #[must_use]
    pub fn overall_percentage(&self) -> u32 {
        rounded_percentage(self.completed_lessons, self.total_lessons)
    }

    /// Unknown weeks and lessons read as not completed.
    #[must_use]
    pub fn is_lesson_completed(&self, week: WeekNumber, lesson: LessonNumber) -> bool {
        self.weeks
            .get(&week)
            .and_then(|progress| progress.lessons.get(&lesson))
            .is_some_and(LessonRecord::completed)
    }

    /// Week 1 is always open; later weeks open once the previous week is complete.
    #[must_use]
    pub fn is_week_unlocked(&self, week: WeekNumber) -> bool {
        match week.previous() {
            None => true,
            Some(prev) => self.weeks.get(&prev).is_some_and(WeekProgress::is_complete),
        }
    }

    /// Records a lesson as completed at `at`.
    ///
    /// Repeated calls for the same lesson leave the record untouched.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownWeek` if the week is not tracked, or
    /// `ProgressError::UnknownLesson` if the lesson number is outside `1..=total`.
    pub fn complete_lesson(
        &mut self,
        week: WeekNumber,
        lesson: LessonNumber,
        at: DateTime<Utc>,
    ) -> Result<LessonMark, ProgressError> {
        let progress = self
            .weeks
            .get_mut(&week)
            .ok_or(ProgressError::UnknownWeek(week))?;
        if !progress.contains_lesson(lesson) {
            return Err(ProgressError::UnknownLesson { week, lesson });
        }
        if progress.lessons.contains_key(&lesson) {
            return Ok(LessonMark::AlreadyCompleted);
        }

        progress.lessons.insert(lesson, LessonRecord::new(at));
        progress.completed += 1;
        self.completed_lessons += 1;

        Ok(LessonMark::Recorded {
            week_finished: progress.is_complete(),
        })
    }

    /// Adds `badge` unless already held. Returns true when it was newly added.
    pub fn award_badge(&mut self, badge: BadgeId) -> bool {
        if self.badges.contains(&badge) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    /// Stamps the start of a session.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_accessed = Some(at);
    }

    /// Checks a rehydrated record against the curriculum and its own counters.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Inconsistent` describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ProgressError> {
        if self.weeks.len() != curriculum::LESSON_TOTALS.len() {
            return Err(ProgressError::Inconsistent(format!(
                "expected {} weeks, found {}",
                curriculum::LESSON_TOTALS.len(),
                self.weeks.len()
            )));
        }
        if self.total_lessons != curriculum::TOTAL_LESSONS {
            return Err(ProgressError::Inconsistent(format!(
                "total lessons {} does not match curriculum total {}",
                self.total_lessons,
                curriculum::TOTAL_LESSONS
            )));
        }

        // Totals are bounded by the curriculum before anything is summed.
        let mut completed_sum = 0_u32;
        for (week, expected_total) in curriculum::lesson_totals() {
            let progress = self.weeks.get(&week).ok_or_else(|| {
                ProgressError::Inconsistent(format!("week {week} is missing"))
            })?;
            if progress.total != expected_total {
                return Err(ProgressError::Inconsistent(format!(
                    "week {week} total {} does not match curriculum total {expected_total}",
                    progress.total
                )));
            }
            if let Some(lesson) = progress
                .lessons
                .keys()
                .find(|lesson| !progress.contains_lesson(**lesson))
            {
                return Err(ProgressError::Inconsistent(format!(
                    "week {week} holds out-of-range lesson {lesson}"
                )));
            }
            if let Some((lesson, _)) = progress.lessons.iter().find(|(_, r)| !r.completed) {
                return Err(ProgressError::Inconsistent(format!(
                    "week {week} lesson {lesson} is stored as not completed"
                )));
            }
            let recorded = u32::try_from(progress.lessons.len()).unwrap_or(u32::MAX);
            if progress.completed != recorded {
                return Err(ProgressError::Inconsistent(format!(
                    "week {week} counts {} completed but holds {recorded} lessons",
                    progress.completed
                )));
            }
            completed_sum += progress.completed;
        }

        if self.completed_lessons != completed_sum {
            return Err(ProgressError::Inconsistent(format!(
                "completed lessons {} does not match week sum {completed_sum}",
                self.completed_lessons
            )));
        }
        Ok(())
    }
}

fn rounded_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (completed, total) = (u64::from(completed), u64::from(total));
    u32::try_from((completed * 200 + total) / (total * 2)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn week(n: u8) -> WeekNumber {
        WeekNumber::new(n)
    }

    fn lesson(n: u8) -> LessonNumber {
        LessonNumber::new(n)
    }

    fn assert_counters_consistent(record: &ProgressRecord) {
        let sum: u32 = record.weeks().map(|(_, p)| p.completed()).sum();
        assert_eq!(record.completed_lessons(), sum);
        for (_, progress) in record.weeks() {
            assert_eq!(progress.completed() as usize, progress.lessons().len());
            assert!(progress.completed() <= progress.total());
        }
    }

    #[test]
    fn default_record_matches_curriculum_shape() {
        let record = ProgressRecord::new();
        assert_eq!(record.total_lessons(), 25);
        assert_eq!(record.completed_lessons(), 0);
        assert_eq!(record.week_count(), 8);
        let totals: Vec<u32> = record.weeks().map(|(_, p)| p.total()).collect();
        assert_eq!(totals, vec![5, 4, 3, 3, 2, 3, 2, 3]);
        assert!(record.badges().is_empty());
        assert!(record.last_accessed().is_none());
        record.validate().unwrap();
    }

    #[test]
    fn complete_lesson_is_idempotent() {
        let mut record = ProgressRecord::new();
        let first = record.complete_lesson(week(2), lesson(1), fixed_now()).unwrap();
        assert_eq!(first, LessonMark::Recorded { week_finished: false });
        let once = record.clone();

        let second = record.complete_lesson(week(2), lesson(1), fixed_now()).unwrap();
        assert_eq!(second, LessonMark::AlreadyCompleted);
        assert_eq!(record, once);
        assert_eq!(record.completed_lessons(), 1);
    }

    #[test]
    fn last_lesson_reports_week_finished() {
        let mut record = ProgressRecord::new();
        record.complete_lesson(week(5), lesson(2), fixed_now()).unwrap();
        let mark = record.complete_lesson(week(5), lesson(1), fixed_now()).unwrap();
        assert_eq!(mark, LessonMark::Recorded { week_finished: true });
        assert_eq!(record.week(week(5)).unwrap().percentage(), 100);
    }

    #[test]
    fn rejects_unknown_week_and_lesson() {
        let mut record = ProgressRecord::new();
        let err = record.complete_lesson(week(99), lesson(1), fixed_now()).unwrap_err();
        assert_eq!(err, ProgressError::UnknownWeek(week(99)));

        let err = record.complete_lesson(week(1), lesson(6), fixed_now()).unwrap_err();
        assert_eq!(
            err,
            ProgressError::UnknownLesson {
                week: week(1),
                lesson: lesson(6)
            }
        );
        let err = record.complete_lesson(week(1), lesson(0), fixed_now()).unwrap_err();
        assert!(matches!(err, ProgressError::UnknownLesson { .. }));
        assert_eq!(record, ProgressRecord::new());
    }

    #[test]
    fn unknown_pairs_read_as_incomplete() {
        let record = ProgressRecord::new();
        assert!(!record.is_lesson_completed(week(99), lesson(1)));
        assert!(!record.is_lesson_completed(week(1), lesson(42)));
    }

    #[test]
    fn interleaved_completion_keeps_counters_consistent() {
        let mut record = ProgressRecord::new();
        let steps = [(3, 2), (1, 5), (8, 1), (3, 2), (1, 1), (6, 3), (1, 5), (7, 2)];
        for (w, l) in steps {
            record.complete_lesson(week(w), lesson(l), fixed_now()).unwrap();
            assert_counters_consistent(&record);
        }
        assert_eq!(record.completed_lessons(), 6);
        record.validate().unwrap();
    }

    #[test]
    fn unlock_follows_previous_week() {
        let mut record = ProgressRecord::new();
        assert!(record.is_week_unlocked(week(1)));
        assert!(!record.is_week_unlocked(week(2)));

        for l in 1..=5 {
            record.complete_lesson(week(1), lesson(l), fixed_now()).unwrap();
        }
        assert!(record.is_week_unlocked(week(2)));
        assert!(!record.is_week_unlocked(week(3)));
    }

    #[test]
    fn award_badge_only_once() {
        let mut record = ProgressRecord::new();
        let badge = BadgeId::week_complete(week(1));
        assert!(record.award_badge(badge.clone()));
        assert!(!record.award_badge(badge.clone()));
        assert_eq!(record.badges(), &[badge]);
    }

    #[test]
    fn percentages_round_to_nearest() {
        let mut record = ProgressRecord::new();
        record.complete_lesson(week(2), lesson(1), fixed_now()).unwrap();
        // 1/25 = 4%, 1/4 = 25%
        assert_eq!(record.overall_percentage(), 4);
        assert_eq!(record.week(week(2)).unwrap().percentage(), 25);

        record.complete_lesson(week(3), lesson(1), fixed_now()).unwrap();
        // 1/3 = 33.3%
        assert_eq!(record.week(week(3)).unwrap().percentage(), 33);
        record.complete_lesson(week(3), lesson(2), fixed_now()).unwrap();
        // 2/3 = 66.7%
        assert_eq!(record.week(week(3)).unwrap().percentage(), 67);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut record = ProgressRecord::new();
        record.complete_lesson(week(1), lesson(2), fixed_now()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["totalLessons"], 25);
        assert_eq!(json["completedLessons"], 1);
        assert!(json["lastAccessed"].is_null());
        assert_eq!(json["weeks"]["1"]["completed"], 1);
        assert_eq!(json["weeks"]["1"]["lessons"]["2"]["completed"], true);
        assert!(json["weeks"]["1"]["lessons"]["2"]["completedAt"].is_string());
    }

    fn rehydrate(edit: impl FnOnce(&mut serde_json::Value)) -> ProgressRecord {
        let mut record = ProgressRecord::new();
        record.complete_lesson(week(1), lesson(2), fixed_now()).unwrap();
        let mut json = serde_json::to_value(&record).unwrap();
        edit(&mut json);
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn validate_accepts_saved_record() {
        rehydrate(|_| {}).validate().unwrap();
    }

    #[test]
    fn validate_flags_counter_drift() {
        let record = rehydrate(|json| json["completedLessons"] = 3.into());
        assert!(matches!(
            record.validate(),
            Err(ProgressError::Inconsistent(_))
        ));

        let record = rehydrate(|json| json["weeks"]["1"]["completed"] = 2.into());
        assert!(matches!(
            record.validate(),
            Err(ProgressError::Inconsistent(_))
        ));
    }

    #[test]
    fn validate_rejects_shape_outside_curriculum() {
        let json = r#"{
            "weeks": { "1": { "completed": 0, "total": 1, "lessons": {} } },
            "totalLessons": 1,
            "completedLessons": 0,
            "badges": [],
            "lastAccessed": null
        }"#;
        let record: ProgressRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(
            record.validate(),
            Err(ProgressError::Inconsistent(_))
        ));

        let record = rehydrate(|json| {
            json["weeks"]["3"]["total"] = 4.into();
            json["totalLessons"] = 26.into();
        });
        assert!(record.validate().is_err());

        let record = rehydrate(|json| {
            json["weeks"]["9"] = serde_json::json!({ "completed": 0, "total": 1, "lessons": {} });
        });
        assert!(record.validate().is_err());
    }

    #[test]
    fn validate_rejects_huge_totals_without_overflow() {
        let json = r#"{
            "weeks": {
                "1": { "completed": 0, "total": 3000000000, "lessons": {} },
                "2": { "completed": 0, "total": 3000000000, "lessons": {} }
            },
            "totalLessons": 6000000000,
            "completedLessons": 0
        }"#;
        // totalLessons does not fit a u32, so decoding itself fails.
        assert!(serde_json::from_str::<ProgressRecord>(json).is_err());

        let record = rehydrate(|json| {
            for w in 1..=8 {
                json["weeks"][w.to_string()]["total"] = 3_000_000_000_u32.into();
            }
        });
        assert!(matches!(
            record.validate(),
            Err(ProgressError::Inconsistent(_))
        ));
        assert_eq!(rounded_percentage(3_000_000_000, 3_000_000_000), 100);
    }

    #[test]
    fn validate_rejects_lesson_stored_as_incomplete() {
        let record =
            rehydrate(|json| json["weeks"]["1"]["lessons"]["2"]["completed"] = false.into());
        assert!(matches!(
            record.validate(),
            Err(ProgressError::Inconsistent(_))
        ));
    }
}
