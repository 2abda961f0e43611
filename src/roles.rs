//! Role resolution against the admin allow-list.

use anyhow::Result;
use teloxide::types::UserId;

use crate::catalog::Catalog;

/// What a user is offered at the `/start` entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Customer,
}

/// Admin iff the decimal form of the user id is in the admins collection.
///
/// Re-reads the collection on every call, so allow-list changes apply to the
/// very next command.
pub fn resolve_role(catalog: &Catalog, user_id: UserId) -> Result<UserRole> {
    let id = user_id.0.to_string();
    let admins = catalog.admins()?;
    if admins.iter().any(|a| *a == id) {
        Ok(UserRole::Admin)
    } else {
        Ok(UserRole::Customer)
    }
}
