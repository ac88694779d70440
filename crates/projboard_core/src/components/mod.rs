//! Board presentation components.
//!
//! # Responsibility
//! - Turn store snapshots into per-status view models.
//! - Play the drag source and drop target roles.
//! - Collect and validate form input before creating projects.
//!
//! # Invariants
//! - Components never mutate projects directly; every change goes through
//!   the injected `StateHandle`.
//! - Views are rebuilt from scratch on each notification.

pub mod project_input;
pub mod project_item;
pub mod project_list;

use crate::model::project::ProjectId;

/// Rendered form of one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Element id; equal to the project id string.
    pub element_id: String,
    pub project_id: ProjectId,
    pub title: String,
    pub participants: String,
    pub description: String,
}

/// Rendered form of one status list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// `{status}-projects`
    pub element_id: String,
    /// `{status}-projects-list`
    pub list_id: String,
    /// `{STATUS} PROJECTS`
    pub heading: String,
    /// Hover affordance shown while an acceptable drag is over the list.
    pub droppable: bool,
    pub items: Vec<ItemView>,
}
