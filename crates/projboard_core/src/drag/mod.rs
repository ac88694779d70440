//! Drag-and-drop transfer protocol.
//!
//! # Responsibility
//! - Model the transfer payload carried from a drag source to a drop target.
//! - Define the two capability traits board components implement.
//!
//! # Invariants
//! - A project id travels as plain text under `TEXT_PLAIN`.
//! - Sources advertise `EffectAllowed::Move`.

pub mod transfer;

pub use transfer::{DataTransfer, DragEvent, EffectAllowed, EffectAllowedError, TEXT_PLAIN};

/// Drag source role.
pub trait Draggable {
    /// Writes this source's payload into the event.
    fn drag_start_handler(&self, event: &mut DragEvent);
    /// Called once the drag finished, dropped or not.
    fn drag_end_handler(&self, event: &DragEvent);
}

/// Drop target role.
pub trait DragTarget {
    /// Accepts the drag (via `prevent_default`) when the payload type fits.
    fn drag_over_handler(&self, event: &mut DragEvent);
    /// Consumes the payload and requests the state change.
    ///
    /// Returns whether the state changed.
    fn drop_handler(&self, event: &DragEvent) -> bool;
    /// Clears any hover affordance.
    fn drag_leave_handler(&self, event: &DragEvent);
}
