//! Custom actions for the User actor.
//!
//! Operations on a [`User`](crate::model::User) that are not plain field updates.
//! Handled by `handle_action` in [`entity`](super::entity).

/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Marks the user inactive. The record stays in the registry.
    ///
    /// Succeeds on an already inactive user without changing anything.
    Deactivate,
}
