//! Mock data provider
//!
//! A read-only snapshot of everything the demo pretends to discover:
//! projects, skills, the resume summary, analysis stages, landing subtitles
//! and a small fake file tree for the picker. Parsed once at startup from an
//! embedded JSON document.

use super::project::{AnalysisStep, Project, ResumeData, Skill};
use crate::util::path::is_archive_path;
use crate::{MinerError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Entry kind in the mock file tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Dir,
    File,
}

/// What the picker claims an archive contains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveContents {
    pub repositories: u32,
    pub commits: u32,
    pub languages: Vec<String>,
}

/// Node of the mock file tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub kind: NodeKind,
    /// Size in bytes, files only
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub contents: Option<ArchiveContents>,
    #[serde(default)]
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Whether the node is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }

    /// Resolve an absolute `/`-separated path from this (root) node
    pub fn lookup(&self, path: &str) -> Option<&FileNode> {
        let mut node = self;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            node = node.children.iter().find(|c| c.name == part)?;
        }
        Some(node)
    }

    /// Full paths of every archive below this node, depth first
    pub fn archive_paths(&self, extensions: &[String]) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_archives("", extensions, &mut found);
        found
    }

    fn collect_archives(&self, prefix: &str, extensions: &[String], found: &mut Vec<String>) {
        for child in &self.children {
            let path = format!("{}/{}", prefix, child.name);
            if child.is_dir() {
                child.collect_archives(&path, extensions, found);
            } else if is_archive_path(&path, extensions) {
                found.push(path);
            }
        }
    }
}

/// Static catalog backing every screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    summary: String,
    analysis_steps: Vec<AnalysisStep>,
    subtitles: Vec<String>,
    file_tree: FileNode,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and sanity-check a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(MinerError::Catalog("catalog has no projects".to_string()));
        }
        if self.analysis_steps.is_empty() {
            return Err(MinerError::Catalog(
                "catalog has no analysis steps".to_string(),
            ));
        }
        for skill in &self.skills {
            if let Some(missing) = skill
                .project_ids
                .iter()
                .find(|id| !self.projects.iter().any(|p| &p.id == *id))
            {
                return Err(MinerError::Catalog(format!(
                    "skill '{}' references unknown project '{}'",
                    skill.name, missing
                )));
            }
        }
        Ok(())
    }

    /// Projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Extracted skills
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Simulated analysis stages
    pub fn analysis_steps(&self) -> &[AnalysisStep] {
        &self.analysis_steps
    }

    /// Root of the mock file tree
    pub fn file_tree(&self) -> &FileNode {
        &self.file_tree
    }

    /// Assemble the generated resume
    pub fn resume(&self) -> ResumeData {
        ResumeData {
            skills: self.skills.clone(),
            projects: self.projects.clone(),
            summary: self.summary.clone(),
        }
    }

    /// Pick one landing subtitle at random
    pub fn random_subtitle<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.subtitles
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.projects().len(), 8);
        assert_eq!(catalog.skills().len(), 10);
        assert_eq!(catalog.analysis_steps().len(), 7);
        assert_eq!(catalog.analysis_steps()[0].id, "unzip");
        assert_eq!(catalog.resume().total_commits(), 633);
    }

    #[test]
    fn test_file_tree_lookup() {
        let catalog = Catalog::embedded().unwrap();
        let tree = catalog.file_tree();

        let projects = tree.lookup("/Users/demo/projects").unwrap();
        assert!(projects.is_dir());
        assert_eq!(projects.children.len(), 3);

        let archive = tree.lookup("/Users/demo/projects/capstone-project.zip").unwrap();
        assert_eq!(archive.size, Some(12_000_000));
        assert_eq!(archive.contents.as_ref().unwrap().repositories, 4);

        assert!(tree.lookup("/Users/nobody").is_none());
        assert_eq!(tree.lookup("/").unwrap().name, "");
    }

    #[test]
    fn test_archive_paths() {
        let catalog = Catalog::embedded().unwrap();
        let paths = catalog.file_tree().archive_paths(&["zip".to_string()]);
        assert_eq!(
            paths,
            vec![
                "/Users/demo/projects/capstone-project.zip",
                "/Users/demo/projects/personal-site.zip",
                "/Users/demo/Downloads/resume-data.zip",
                "/Users/demo/Downloads/images.zip",
            ]
        );
    }

    #[test]
    fn test_random_subtitle_comes_from_catalog() {
        let catalog = Catalog::embedded().unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            let subtitle = catalog.random_subtitle(&mut rng);
            assert!(catalog.subtitles.iter().any(|s| s == subtitle));
        }
    }

    #[test]
    fn test_dangling_skill_reference_is_rejected() {
        let json = r#"{
            "projects": [{"id":"a","name":"A","language":"Go","description":"","technologies":[],"commits":1,"files":1,"lastUpdated":"2025-01-01"}],
            "skills": [{"name":"Rust","level":"expert","projects":["b"]}],
            "summary": "",
            "analysisSteps": [{"id":"unzip","label":"Extracting archive..."}],
            "subtitles": [],
            "fileTree": {"name":"","kind":"dir"}
        }"#;
        match Catalog::from_json(json) {
            Err(MinerError::Catalog(msg)) => assert!(msg.contains("unknown project 'b'")),
            other => panic!("expected catalog error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_catalog_error() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(MinerError::Catalog(_))
        ));
    }
}
