//! Status list component and drop target.
//!
//! # Responsibility
//! - Subscribe to the store and keep the projects matching one status.
//! - Accept dropped project ids and request moves into its status.
//!
//! # Invariants
//! - The list view is rebuilt from the latest snapshot only.
//! - Drops without a `text/plain` payload never reach the store.
//! - The store listener is removed when the list is dropped.

use crate::components::project_item::ProjectItem;
use crate::components::{ItemView, ListView};
use crate::drag::{DragEvent, DragTarget, TEXT_PLAIN};
use crate::model::project::{parse_project_id, Project, ProjectId, ProjectStatus};
use crate::state::{lock_or_recover, ListenerId, StateHandle};
use log::debug;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ListModel {
    assigned_projects: Vec<Project>,
    items: Vec<ProjectItem>,
    droppable: bool,
}

impl ListModel {
    fn assign(&mut self, status: ProjectStatus, projects: Vec<Project>) {
        self.assigned_projects = projects
            .into_iter()
            .filter(|project| project.status == status)
            .collect();
        self.render_projects();
    }

    fn render_projects(&mut self) {
        self.items = self
            .assigned_projects
            .iter()
            .cloned()
            .map(ProjectItem::new)
            .collect();
    }
}

/// One status-bucketed project list.
pub struct ProjectList {
    status: ProjectStatus,
    state: StateHandle,
    model: Arc<Mutex<ListModel>>,
    listener_id: ListenerId,
}

impl ProjectList {
    /// Creates the list and subscribes it to `state`.
    ///
    /// Must not be called while `state` is locked by the caller.
    pub fn new(status: ProjectStatus, state: StateHandle) -> Self {
        let model = Arc::new(Mutex::new(ListModel::default()));
        let listener_id = {
            let mut guard = lock_or_recover(&state);
            lock_or_recover(&model).assign(status, guard.snapshot());

            let listener_model = Arc::clone(&model);
            guard.add_listener(move |projects| {
                lock_or_recover(&listener_model).assign(status, projects);
            })
        };

        Self {
            status,
            state,
            model,
            listener_id,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Projects from the latest snapshot matching this list's status.
    pub fn assigned_projects(&self) -> Vec<Project> {
        lock_or_recover(&self.model).assigned_projects.clone()
    }

    /// Rendered card for `id`, when it is listed here.
    pub fn item(&self, id: ProjectId) -> Option<ProjectItem> {
        lock_or_recover(&self.model)
            .items
            .iter()
            .find(|item| item.project().id == id)
            .cloned()
    }

    pub fn is_droppable(&self) -> bool {
        lock_or_recover(&self.model).droppable
    }

    pub fn view(&self) -> ListView {
        let model = lock_or_recover(&self.model);
        ListView {
            element_id: self.element_id(),
            list_id: self.list_id(),
            heading: self.heading(),
            droppable: model.droppable,
            items: model.items.iter().map(ProjectItem::view).collect::<Vec<ItemView>>(),
        }
    }

    fn set_droppable(&self, droppable: bool) {
        lock_or_recover(&self.model).droppable = droppable;
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, event: &mut DragEvent) {
        if !event.first_type_is(TEXT_PLAIN) {
            return;
        }
        event.prevent_default();
        self.set_droppable(true);
    }

    fn drop_handler(&self, event: &DragEvent) -> bool {
        // The host delivers no leave event after a drop.
        self.set_droppable(false);

        let Some(raw_id) = event
            .data_transfer
            .as_ref()
            .and_then(|transfer| transfer.get_data(TEXT_PLAIN))
        else {
            debug!(
                "event=drop module=components status=skip reason=no_plain_text target={}",
                self.status
            );
            return false;
        };
        let Some(id) = parse_project_id(raw_id) else {
            debug!(
                "event=drop module=components status=skip reason=unparsable_id target={}",
                self.status
            );
            return false;
        };

        let moved = lock_or_recover(&self.state).move_project(id, self.status);
        debug!(
            "event=drop module=components status=ok id={id} target={} moved={moved}",
            self.status
        );
        moved
    }

    fn drag_leave_handler(&self, _event: &DragEvent) {
        self.set_droppable(false);
    }
}

impl Drop for ProjectList {
    fn drop(&mut self) {
        lock_or_recover(&self.state).remove_listener(self.listener_id);
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectList;
    use crate::drag::{DataTransfer, DragEvent, DragTarget, TEXT_PLAIN};
    use crate::model::project::ProjectStatus;
    use crate::state::{lock_or_recover, new_state_handle};
    use std::sync::Arc;

    #[test]
    fn renders_static_ids_and_heading() {
        let list = ProjectList::new(ProjectStatus::Finished, new_state_handle());
        let view = list.view();
        assert_eq!(view.element_id, "finished-projects");
        assert_eq!(view.list_id, "finished-projects-list");
        assert_eq!(view.heading, "FINISHED PROJECTS");
        assert!(view.items.is_empty());
        assert!(!view.droppable);
    }

    #[test]
    fn construction_picks_up_existing_projects() {
        let state = new_state_handle();
        lock_or_recover(&state).add_project("Build API", "Backend work", 3);
        let list = ProjectList::new(ProjectStatus::Active, Arc::clone(&state));
        assert_eq!(list.assigned_projects().len(), 1);
    }

    #[test]
    fn drag_over_accepts_only_plain_text_first() {
        let list = ProjectList::new(ProjectStatus::Active, new_state_handle());

        let mut html = DataTransfer::new();
        html.set_data("text/html", "<li/>");
        let mut rejected = DragEvent::with_transfer(html);
        list.drag_over_handler(&mut rejected);
        assert!(!rejected.default_prevented());
        assert!(!list.is_droppable());

        let mut plain = DataTransfer::new();
        plain.set_data(TEXT_PLAIN, "anything");
        let mut accepted = DragEvent::with_transfer(plain);
        list.drag_over_handler(&mut accepted);
        assert!(accepted.default_prevented());
        assert!(list.is_droppable());

        list.drag_leave_handler(&accepted);
        assert!(!list.is_droppable());
    }

    #[test]
    fn dropping_list_unsubscribes_from_state() {
        let state = new_state_handle();
        let list = ProjectList::new(ProjectStatus::Active, Arc::clone(&state));
        assert_eq!(lock_or_recover(&state).listener_count(), 1);
        drop(list);
        assert_eq!(lock_or_recover(&state).listener_count(), 0);
    }
}
