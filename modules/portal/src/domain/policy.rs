//! Single authorization policy consumed by every feature service.
//!
//! Checks are evaluated per action at call time from the current user's
//! role and flags; nothing is cached.

use crate::contract::model::{User, UserRole};

/// An action a user may attempt against the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    PublishNews,
    DeleteNews,
    CreateListing,
    /// Deleting a listing owned by the recorded `seller` name.
    DeleteListing { seller: &'a str },
    BlockUser,
    DeleteUser,
    AnnotateUser,
    ChangeOwnAvatar,
}

pub fn can_perform(user: &User, action: Action<'_>) -> bool {
    match action {
        // Publication rights belong to access-code holders, not to a role.
        Action::PublishNews | Action::DeleteNews => user.holds_access_code(),
        Action::CreateListing | Action::AnnotateUser | Action::ChangeOwnAvatar => true,
        Action::DeleteListing { seller } => is_staff(user) || user.name == seller,
        Action::BlockUser | Action::DeleteUser => is_staff(user),
    }
}

fn is_staff(user: &User) -> bool {
    matches!(user.role, UserRole::Admin | UserRole::Executive)
}
