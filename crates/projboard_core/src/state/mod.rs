//! Observable board state.
//!
//! # Responsibility
//! - Own the authoritative project collection.
//! - Fan out full snapshots to subscribers after every mutation.
//!
//! # Invariants
//! - Exactly one `ProjectState` backs a board; components reach it only
//!   through the `StateHandle` they were constructed with.
//! - Mutation and notification run under one lock.

pub mod project_state;

use std::sync::{Arc, Mutex, MutexGuard};

pub use project_state::{Listener, ListenerId, ProjectState};

/// Shared handle injected into every board component.
pub type StateHandle = Arc<Mutex<ProjectState>>;

/// Creates a handle around a fresh, empty state.
pub fn new_state_handle() -> StateHandle {
    Arc::new(Mutex::new(ProjectState::new()))
}

/// Locks a mutex, recovering the guard if a previous holder panicked.
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
