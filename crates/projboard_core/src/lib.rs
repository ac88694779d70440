//! Core logic for the projboard project board.
//! This crate owns the project store, the drag-and-drop protocol and the
//! headless board components that render store snapshots.

pub mod board;
pub mod components;
pub mod config;
pub mod drag;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;

pub use board::{Board, DragOutcome};
pub use components::project_input::{InputError, ProjectDraft, ProjectInput};
pub use components::project_item::ProjectItem;
pub use components::project_list::ProjectList;
pub use components::{ItemView, ListView};
pub use config::{BoardConfig, InputRules};
pub use drag::{
    DataTransfer, DragEvent, DragTarget, Draggable, EffectAllowed, EffectAllowedError, TEXT_PLAIN,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{
    parse_project_id, Project, ProjectId, ProjectStatus, ProjectStatusError,
};
pub use state::{new_state_handle, Listener, ListenerId, ProjectState, StateHandle};
pub use validation::{validate, FieldValue, Validatable};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
