//! Built-in course content: the eight-week face recognition attendance path.

mod badges;
mod weeks;

use crate::model::{LessonNumber, WeekContent, WeekNumber};

pub use badges::{BadgeInfo, badge_info};

/// Lessons per week, in week order.
pub const LESSON_TOTALS: [u32; 8] = [5, 4, 3, 3, 2, 3, 2, 3];

/// Sum of `LESSON_TOTALS`.
pub const TOTAL_LESSONS: u32 = 25;

/// Storage key the learner's progress record lives under.
pub const PROGRESS_KEY: &str = "face_recognition_lms_progress";

/// `(week, lesson total)` pairs for every week of the course.
pub fn lesson_totals() -> impl Iterator<Item = (WeekNumber, u32)> {
    (1_u8..).map(WeekNumber::new).zip(LESSON_TOTALS)
}

#[must_use]
pub fn weeks() -> &'static [WeekContent] {
    &weeks::WEEKS
}

#[must_use]
pub fn week_content(week: WeekNumber) -> Option<&'static WeekContent> {
    weeks::WEEKS.iter().find(|content| content.week == week)
}

/// Relative page path for a lesson.
#[must_use]
pub fn lesson_path(week: WeekNumber, lesson: LessonNumber) -> String {
    format!("lessons/week{week}-lesson{lesson}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_to_total_lessons() {
        assert_eq!(LESSON_TOTALS.iter().sum::<u32>(), TOTAL_LESSONS);
        assert_eq!(lesson_totals().count(), 8);
    }

    #[test]
    fn topics_line_up_with_lesson_totals() {
        for (week, total) in lesson_totals() {
            let content = week_content(week).unwrap();
            assert_eq!(content.lesson_count(), total, "week {week}");
        }
    }

    #[test]
    fn unknown_week_has_no_content() {
        assert!(week_content(WeekNumber::new(0)).is_none());
        assert!(week_content(WeekNumber::new(9)).is_none());
    }

    #[test]
    fn lesson_path_format() {
        assert_eq!(
            lesson_path(WeekNumber::new(3), LessonNumber::new(2)),
            "lessons/week3-lesson2.html"
        );
    }

    #[test]
    fn topic_lookup_is_one_based() {
        let content = week_content(WeekNumber::new(1)).unwrap();
        assert_eq!(
            content.topic(LessonNumber::new(1)).unwrap().title,
            "01. Hello OpenCV"
        );
        assert!(content.topic(LessonNumber::new(0)).is_none());
        assert!(content.topic(LessonNumber::new(6)).is_none());
    }
}
