use crate::model::BadgeId;

/// Display data for an earned badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

static CATALOG: [(&str, BadgeInfo); 8] = [
    (
        "week1_complete",
        BadgeInfo {
            icon: "🎉",
            title: "Week 1 Complete!",
            description: "Python & OpenCV mastered",
        },
    ),
    (
        "week2_complete",
        BadgeInfo {
            icon: "🔍",
            title: "Week 2 Complete!",
            description: "Face Detection expert",
        },
    ),
    (
        "week3_complete",
        BadgeInfo {
            icon: "👤",
            title: "Week 3 Complete!",
            description: "Face Recognition unlocked",
        },
    ),
    (
        "week4_complete",
        BadgeInfo {
            icon: "📊",
            title: "Week 4 Complete!",
            description: "Dataset Master",
        },
    ),
    (
        "week5_complete",
        BadgeInfo {
            icon: "⚙️",
            title: "Week 5 Complete!",
            description: "System Integration Pro",
        },
    ),
    (
        "week6_complete",
        BadgeInfo {
            icon: "🗄️",
            title: "Week 6 Complete!",
            description: "Database Expert",
        },
    ),
    (
        "week7_complete",
        BadgeInfo {
            icon: "🖥️",
            title: "Week 7 Complete!",
            description: "GUI Developer",
        },
    ),
    (
        "week8_complete",
        BadgeInfo {
            icon: "🏆",
            title: "Course Complete!",
            description: "All modules mastered!",
        },
    ),
];

/// Looks up display data for `badge`. Badges outside the catalog have none.
#[must_use]
pub fn badge_info(badge: &BadgeId) -> Option<&'static BadgeInfo> {
    CATALOG
        .iter()
        .find(|(id, _)| *id == badge.as_str())
        .map(|(_, info)| info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeekNumber;

    #[test]
    fn every_week_has_a_badge() {
        for week in 1..=8 {
            let badge = BadgeId::week_complete(WeekNumber::new(week));
            assert!(badge_info(&badge).is_some(), "{badge}");
        }
    }

    #[test]
    fn final_week_badge_marks_course_complete() {
        let info = badge_info(&BadgeId::new("week8_complete")).unwrap();
        assert_eq!(info.title, "Course Complete!");
    }

    #[test]
    fn unknown_badge_has_no_info() {
        assert!(badge_info(&BadgeId::new("streak_7")).is_none());
    }
}
