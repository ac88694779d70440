//! Board composition.
//!
//! # Responsibility
//! - Build one input form and the active/finished lists around one store.
//! - Drive a full drag lifecycle for hosts that report a drag as one action.
//!
//! # Invariants
//! - All components share the board's single `StateHandle`.
//! - Board methods never hold the store lock while calling a component.

use crate::components::project_input::{InputError, ProjectInput};
use crate::components::project_list::ProjectList;
use crate::components::ListView;
use crate::config::InputRules;
use crate::drag::{DragEvent, DragTarget, Draggable};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::{lock_or_recover, new_state_handle, StateHandle};
use log::debug;
use std::sync::{Mutex, MutexGuard};

/// Outcome of one drag lifecycle driven by `Board::drag_project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// The target accepted the drag during drag-over.
    pub accepted: bool,
    /// The project's status changed as a result of the drop.
    pub moved: bool,
}

/// One project board: a store, its input form and both status lists.
pub struct Board {
    state: StateHandle,
    input: Mutex<ProjectInput>,
    active: ProjectList,
    finished: ProjectList,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_rules(InputRules::default())
    }

    pub fn with_rules(rules: InputRules) -> Self {
        Self::with_state(new_state_handle(), rules)
    }

    /// Builds a board around an existing store.
    pub fn with_state(state: StateHandle, rules: InputRules) -> Self {
        Self {
            input: Mutex::new(ProjectInput::with_rules(state.clone(), rules)),
            active: ProjectList::new(ProjectStatus::Active, state.clone()),
            finished: ProjectList::new(ProjectStatus::Finished, state.clone()),
            state,
        }
    }

    /// Locks the input form.
    pub fn input(&self) -> MutexGuard<'_, ProjectInput> {
        lock_or_recover(&self.input)
    }

    /// Fills the form and submits it.
    pub fn submit(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Result<ProjectId, InputError> {
        let mut input = self.input();
        input.fill(title, description, people);
        input.submit_handler()
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Both lists in display order.
    pub fn lists(&self) -> [&ProjectList; 2] {
        [&self.active, &self.finished]
    }

    pub fn render(&self) -> Vec<ListView> {
        self.lists().iter().map(|list| list.view()).collect()
    }

    pub fn projects(&self) -> Vec<Project> {
        lock_or_recover(&self.state).snapshot()
    }

    /// Moves a project without the drag protocol. See `ProjectState::move_project`.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) -> bool {
        lock_or_recover(&self.state).move_project(id, status)
    }

    /// Drags the card for `id` onto the `target` list: start, over, drop,
    /// leave, end.
    ///
    /// Returns `None` when no list currently shows a card for `id`.
    pub fn drag_project(&self, id: ProjectId, target: ProjectStatus) -> Option<DragOutcome> {
        let item = self.lists().iter().find_map(|list| list.item(id))?;
        let target_list = self.list(target);

        let mut event = DragEvent::new();
        item.drag_start_handler(&mut event);
        target_list.drag_over_handler(&mut event);
        let accepted = event.default_prevented();
        let moved = if accepted {
            target_list.drop_handler(&event)
        } else {
            target_list.drag_leave_handler(&event);
            false
        };
        item.drag_end_handler(&event);

        debug!(
            "event=drag module=board status=ok id={id} target={target} accepted={accepted} moved={moved}"
        );
        Some(DragOutcome { accepted, moved })
    }
}
