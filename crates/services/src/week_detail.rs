//! Detail panel for a curriculum week.
//!
//! Required fields of `WeekContent` always produce a section; each optional
//! field adds its own section only when present. Section order is fixed.

use std::fmt;

use course_core::curriculum::week_content;
use course_core::model::{WeekContent, WeekNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Objectives,
    Topics,
    ProjectModule,
    ProjectModules,
    GuiWindows,
    KeyTechnologies,
    TestingModules,
    Distribution,
    DatabaseSchema,
    Architecture,
    KeyConcepts,
    PackagingCommands,
    Deliverables,
    Commands,
}

/// Titled block inside a section, e.g. a topic or a GUI window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Bullets(Vec<String>),
    Cards(Vec<DetailCard>),
    Code(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    pub kind: SectionKind,
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDetailPanel {
    pub week: WeekNumber,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub tutorials: &'static str,
    pub duration: &'static str,
    pub sections: Vec<PanelSection>,
}

impl WeekDetailPanel {
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&PanelSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    #[must_use]
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }
}

/// Build the detail panel for `week`, or `None` if the week is not in the curriculum.
#[must_use]
pub fn render_week_detail(week: WeekNumber) -> Option<WeekDetailPanel> {
    week_content(week).map(build_panel)
}

fn bullets(items: &[&str]) -> SectionBody {
    SectionBody::Bullets(items.iter().map(|item| (*item).to_owned()).collect())
}

fn section(kind: SectionKind, heading: impl Into<String>, body: SectionBody) -> PanelSection {
    PanelSection {
        kind,
        heading: heading.into(),
        body,
    }
}

fn build_panel(content: &WeekContent) -> WeekDetailPanel {
    let mut sections = vec![
        section(
            SectionKind::Objectives,
            "🎯 Objectives",
            SectionBody::Bullets(
                content
                    .objectives
                    .iter()
                    .map(|objective| format!("✅ {objective}"))
                    .collect(),
            ),
        ),
        section(
            SectionKind::Topics,
            "📚 Topics & Tutorials",
            SectionBody::Cards(
                content
                    .topics
                    .iter()
                    .map(|topic| DetailCard {
                        title: topic.title,
                        text: topic.description,
                    })
                    .collect(),
            ),
        ),
    ];

    if let Some(module) = content.module {
        sections.push(section(
            SectionKind::ProjectModule,
            format!("📦 Project Module: {}", module.file),
            bullets(module.functions),
        ));
    }
    if let Some(modules) = content.modules {
        sections.push(section(
            SectionKind::ProjectModules,
            "📦 Project Modules",
            bullets(modules),
        ));
    }
    if let Some(windows) = content.gui_windows {
        sections.push(section(
            SectionKind::GuiWindows,
            "🖥️ GUI Windows",
            SectionBody::Cards(
                windows
                    .iter()
                    .map(|window| DetailCard {
                        title: window.name,
                        text: window.features,
                    })
                    .collect(),
            ),
        ));
    }
    if let Some(items) = content.key_technologies {
        sections.push(section(
            SectionKind::KeyTechnologies,
            "⚡ Key Technologies",
            bullets(items),
        ));
    }
    if let Some(items) = content.testing_modules {
        sections.push(section(
            SectionKind::TestingModules,
            "🧪 Testing Modules",
            bullets(items),
        ));
    }
    if let Some(items) = content.distribution {
        sections.push(section(
            SectionKind::Distribution,
            "📦 Distribution Options",
            bullets(items),
        ));
    }
    if let Some(schema) = content.database_schema {
        sections.push(section(
            SectionKind::DatabaseSchema,
            "🗄️ Database Schema",
            SectionBody::Code(schema),
        ));
    }
    if let Some(architecture) = content.architecture {
        sections.push(section(
            SectionKind::Architecture,
            "🏗️ Architecture",
            SectionBody::Code(architecture),
        ));
    }
    if let Some(items) = content.key_concepts {
        sections.push(section(
            SectionKind::KeyConcepts,
            "💡 Key Concepts",
            bullets(items),
        ));
    }
    if let Some(commands) = content.packaging_commands {
        sections.push(section(
            SectionKind::PackagingCommands,
            "📦 PyInstaller Commands",
            SectionBody::Code(commands),
        ));
    }
    if let Some(items) = content.deliverables {
        sections.push(section(
            SectionKind::Deliverables,
            "✅ Deliverables",
            bullets(items),
        ));
    }
    sections.push(section(
        SectionKind::Commands,
        "🚀 Cara Menjalankan",
        SectionBody::Code(content.commands),
    ));

    WeekDetailPanel {
        week: content.week,
        title: content.title,
        difficulty: content.difficulty,
        tutorials: content.tutorials,
        duration: content.duration,
        sections,
    }
}

impl fmt::Display for WeekDetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(
            f,
            "{}  |  📝 {}  |  ⏱️ {}",
            self.difficulty, self.tutorials, self.duration
        )?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            match &section.body {
                SectionBody::Bullets(items) => {
                    for item in items {
                        writeln!(f, "  - {item}")?;
                    }
                }
                SectionBody::Cards(cards) => {
                    for card in cards {
                        writeln!(f, "  {}", card.title)?;
                        writeln!(f, "    {}", card.text)?;
                    }
                }
                SectionBody::Code(code) => {
                    for line in code.lines() {
                        writeln!(f, "    {line}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
