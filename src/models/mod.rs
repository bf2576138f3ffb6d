//! Data models module
//!
//! Contains the project, skill and resume records plus the mock catalog
//! that supplies them.

pub mod catalog;
pub mod project;

// Re-export commonly used types
pub use catalog::{ArchiveContents, Catalog, FileNode, NodeKind};
pub use project::{AnalysisStep, Project, ResumeData, Skill, SkillLevel};
