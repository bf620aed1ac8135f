use crate::model::ids::{LessonNumber, WeekNumber};

/// One tutorial in a week. Topic `n` (1-based) is lesson `n` of that week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub description: &'static str,
}

/// The single project module built during a week and its public functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectModule {
    pub file: &'static str,
    pub functions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiWindow {
    pub name: &'static str,
    pub features: &'static str,
}

/// Static description of a curriculum week.
///
/// Required fields appear in every detail panel; each `Option` field adds its
/// own panel section only when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekContent {
    pub week: WeekNumber,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub tutorials: &'static str,
    pub objectives: &'static [&'static str],
    pub topics: &'static [Topic],
    pub module: Option<ProjectModule>,
    pub modules: Option<&'static [&'static str]>,
    pub gui_windows: Option<&'static [GuiWindow]>,
    pub key_technologies: Option<&'static [&'static str]>,
    pub testing_modules: Option<&'static [&'static str]>,
    pub distribution: Option<&'static [&'static str]>,
    pub database_schema: Option<&'static str>,
    pub architecture: Option<&'static str>,
    pub key_concepts: Option<&'static [&'static str]>,
    pub packaging_commands: Option<&'static str>,
    pub deliverables: Option<&'static [&'static str]>,
    pub commands: &'static str,
}

impl WeekContent {
    #[must_use]
    pub fn lesson_count(&self) -> u32 {
        u32::try_from(self.topics.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn topic(&self, lesson: LessonNumber) -> Option<&'static Topic> {
        let index = usize::from(lesson.value()).checked_sub(1)?;
        self.topics.get(index)
    }
}
