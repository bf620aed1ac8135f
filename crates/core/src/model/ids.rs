use serde::{Deserialize, Serialize};
use std::fmt;

/// Curriculum week number (1-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekNumber(u8);

impl WeekNumber {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The week before this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self.0 {
            0 | 1 => None,
            n => Some(Self(n - 1)),
        }
    }
}

/// Lesson number within a week (1-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonNumber(u8);

impl LessonNumber {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Achievement identifier, e.g. `week3_complete`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Badge granted once every lesson of `week` is completed.
    #[must_use]
    pub fn week_complete(week: WeekNumber) -> Self {
        Self(format!("week{}_complete", week.value()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekNumber({})", self.0)
    }
}

impl fmt::Debug for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonNumber({})", self.0)
    }
}

impl fmt::Debug for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BadgeId({})", self.0)
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u8> for WeekNumber {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<u8> for LessonNumber {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_complete_badge_uses_week_number() {
        assert_eq!(
            BadgeId::week_complete(WeekNumber::new(4)).as_str(),
            "week4_complete"
        );
    }

    #[test]
    fn previous_week_stops_at_first() {
        assert_eq!(WeekNumber::new(3).previous(), Some(WeekNumber::new(2)));
        assert_eq!(WeekNumber::new(1).previous(), None);
    }

    #[test]
    fn debug_and_display_formats() {
        let week = WeekNumber::new(2);
        assert_eq!(format!("{week:?}"), "WeekNumber(2)");
        assert_eq!(week.to_string(), "2");
        assert_eq!(LessonNumber::new(5).to_string(), "5");
    }
}
