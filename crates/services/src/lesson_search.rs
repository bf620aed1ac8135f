use course_core::curriculum::{lesson_path, weeks};
use course_core::model::{LessonNumber, WeekNumber};

/// A lesson whose topic matched a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonHit {
    pub week: WeekNumber,
    pub lesson: LessonNumber,
    pub title: &'static str,
    pub path: String,
}

/// Case-insensitive search over lesson titles and descriptions, in curriculum order.
#[must_use]
pub fn search_lessons(query: &str) -> Vec<LessonHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for content in weeks() {
        for (lesson, topic) in (1_u8..).map(LessonNumber::new).zip(content.topics) {
            let matches = topic.title.to_lowercase().contains(&needle)
                || topic.description.to_lowercase().contains(&needle);
            if matches {
                hits.push(LessonHit {
                    week: content.week,
                    lesson,
                    title: topic.title,
                    path: lesson_path(content.week, lesson),
                });
            }
        }
    }
    tracing::debug!(query, hits = hits.len(), "lesson search");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_finds_nothing() {
        assert!(search_lessons("").is_empty());
        assert!(search_lessons("   ").is_empty());
    }

    #[test]
    fn matches_titles_case_insensitively() {
        let hits = search_lessons("WEBCAM");
        let pairs: Vec<(u8, u8)> = hits
            .iter()
            .map(|hit| (hit.week.value(), hit.lesson.value()))
            .collect();
        assert!(pairs.contains(&(1, 4)));
        assert!(pairs.contains(&(2, 2)));
        assert!(pairs.contains(&(3, 3)));
        assert!(pairs.contains(&(7, 2)));
    }

    #[test]
    fn hit_carries_lesson_path() {
        let hits = search_lessons("haar cascade");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "01. Face Detection dari Image");
        assert_eq!(hits[0].path, "lessons/week2-lesson1.html");
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(search_lessons("kubernetes").is_empty());
    }
}
