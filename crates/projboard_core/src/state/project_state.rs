//! Project store with synchronous snapshot notification.
//!
//! # Responsibility
//! - Append projects and change their status.
//! - Notify listeners, in registration order, with an owned copy of the full
//!   collection after each effective mutation.
//!
//! # Invariants
//! - Ids are unique within the store.
//! - No-op moves (unknown id or unchanged status) never notify.
//! - Listeners never see the live collection, only clones.
//! - Listeners must not call back into the store they are registered on.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};
use uuid::Uuid;

/// Subscriber callback receiving a full snapshot.
pub type Listener = Box<dyn FnMut(Vec<Project>) + Send>;

/// Handle returned by `add_listener`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Single source of truth for board projects.
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectState {
    pub fn new() -> Self {
        info!("event=state_init module=state status=ok");
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// Inputs are expected to be validated by the caller; this never fails.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let mut project = Project::new(title, description, people);
        // Ids stay unique within one store.
        while self.get(project.id).is_some() {
            project.id = Uuid::new_v4();
        }
        let id = project.id;
        self.projects.push(project);
        debug!(
            "event=project_add module=state status=ok id={} total={} listeners={}",
            id,
            self.projects.len(),
            self.listeners.len()
        );
        self.update_listeners();
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Returns `true` when the status changed and listeners were notified.
    /// Unknown ids and unchanged statuses are silent no-ops returning `false`.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=project_move module=state status=skip reason=unknown_id id={id}");
            return false;
        };
        if project.status == new_status {
            debug!(
                "event=project_move module=state status=skip reason=unchanged id={id} to={new_status}"
            );
            return false;
        }

        let from = project.status;
        project.status = new_status;
        debug!("event=project_move module=state status=ok id={id} from={from} to={new_status}");
        self.update_listeners();
        true
    }

    /// Registers a listener for all subsequent mutations.
    ///
    /// The listener is not called with the current state on registration.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(Vec<Project>) + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(
            "event=listener_add module=state status=ok listener={} listeners={}",
            id.0,
            self.listeners.len()
        );
        id
    }

    /// Removes a listener. Returns `false` when the id is not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        debug!(
            "event=listener_remove module=state status={} listener={}",
            if removed { "ok" } else { "skip" },
            id.0
        );
        removed
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns an owned copy of the current collection.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update_listeners(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}
