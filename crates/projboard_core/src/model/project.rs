//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record owned by `ProjectState`.
//! - Provide the stable wire form of `ProjectStatus`.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - `title`, `description` and `people` are fixed at creation.
//! - `status` changes only through `ProjectState::move_project`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project.
///
/// Carried as plain text in the drag transfer payload.
pub type ProjectId = Uuid;

/// Status bucket a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly created, still being worked on.
    Active,
    /// Dropped onto the finished list.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase string used in element ids and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses one status from its wire string.
    pub fn parse(value: &str) -> Result<Self, ProjectStatusError> {
        match value.trim() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ProjectStatusError::Unsupported(other.to_string())),
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatusError {
    Unsupported(String),
}

impl Display for ProjectStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(value) => write!(
                f,
                "project status is unsupported: `{value}`; expected active|finished"
            ),
        }
    }
}

impl Error for ProjectStatusError {}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of participants, at least one for form-created projects.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated v4 id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }
}

/// Parses a project id from its transfer/wire string.
///
/// Only the exact form ids are written in (lowercase hyphenated) matches.
/// Anything else returns `None`; callers treat that as an unknown id.
pub fn parse_project_id(value: &str) -> Option<ProjectId> {
    let id = Uuid::parse_str(value).ok()?;
    (id.hyphenated().to_string() == value).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::{parse_project_id, Project, ProjectStatus, ProjectStatusError};

    #[test]
    fn new_project_starts_active_with_non_nil_id() {
        let project = Project::new("Build API", "Backend work", 3);
        assert!(!project.id.is_nil());
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 3);
    }

    #[test]
    fn status_parse_accepts_wire_values_only() {
        assert_eq!(
            ProjectStatus::parse(" finished ").expect("finished should parse"),
            ProjectStatus::Finished
        );
        let err = ProjectStatus::parse("Done").expect_err("unknown status must fail");
        assert_eq!(err, ProjectStatusError::Unsupported("Done".to_string()));
    }

    #[test]
    fn parse_project_id_rejects_garbage() {
        let project = Project::new("a", "b", 1);
        assert_eq!(parse_project_id(&project.id.to_string()), Some(project.id));
        assert_eq!(parse_project_id("0.123456"), None);
    }

    #[test]
    fn parse_project_id_accepts_only_the_written_form() {
        let id = Project::new("a", "b", 1).id;
        let written = id.to_string();
        for variant in [
            written.to_uppercase(),
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
            format!(" {written} "),
        ] {
            assert_eq!(parse_project_id(&variant), None, "`{variant}` must not match");
        }
    }
}
