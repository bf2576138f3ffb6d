//! Project and resume data models
//!
//! Immutable records served by the mock catalog and displayed by the
//! project list and resume preview screens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A detected project inside the uploaded archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier referenced by skills
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary language
    pub language: String,
    /// One-paragraph description
    pub description: String,
    /// Technologies in display order
    pub technologies: Vec<String>,
    /// Number of commits
    pub commits: u32,
    /// Number of files
    pub files: u32,
    /// Date of the latest commit
    pub last_updated: NaiveDate,
}

impl Project {
    /// Short list line, e.g. `Go • 24 commits`
    pub fn list_summary(&self) -> String {
        format!("{} • {} commits", self.language, self.commits)
    }
}

/// Skill proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// All levels from strongest to weakest
    pub fn descending() -> [SkillLevel; 4] {
        [
            SkillLevel::Expert,
            SkillLevel::Advanced,
            SkillLevel::Intermediate,
            SkillLevel::Beginner,
        ]
    }

    /// Section label on the resume
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

/// A skill inferred from one or more projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Proficiency
    pub level: SkillLevel,
    /// Projects that exercise the skill
    #[serde(rename = "projects")]
    pub project_ids: BTreeSet<String>,
}

/// Everything the resume preview renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    /// Extracted skills
    pub skills: Vec<Skill>,
    /// Projects in catalog order
    pub projects: Vec<Project>,
    /// Generated professional summary
    pub summary: String,
}

impl ResumeData {
    /// Skills at a given level, in catalog order
    pub fn skills_at(&self, level: SkillLevel) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.level == level).collect()
    }

    /// Sum of commits across all projects
    pub fn total_commits(&self) -> u64 {
        self.projects.iter().map(|p| p.commits as u64).sum()
    }

    /// Number of distinct primary languages
    pub fn language_count(&self) -> usize {
        self.projects
            .iter()
            .map(|p| p.language.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// The first `limit` projects shown under "Notable Projects"
    pub fn notable_projects(&self, limit: usize) -> &[Project] {
        &self.projects[..self.projects.len().min(limit)]
    }
}

/// One simulated analysis stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStep {
    /// Stable identifier
    pub id: String,
    /// Label shown in the checklist and log
    pub label: String,
}
