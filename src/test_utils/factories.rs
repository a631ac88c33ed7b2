//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use crate::domain::entities::{
    identity::{Role, UserIdentity},
    roster::RosterRow,
};

/// Create a roster row for a regular employee.
pub fn create_test_roster_row(overrides: impl FnOnce(&mut RosterRow)) -> RosterRow {
    let mut row = RosterRow {
        email: "employee@example.com".to_string(),
        user_id: "u100".to_string(),
        name: "Test Employee".to_string(),
    };
    overrides(&mut row);
    row
}

/// Create a logged-in identity with the user role.
pub fn create_test_identity(overrides: impl FnOnce(&mut UserIdentity)) -> UserIdentity {
    let mut identity = UserIdentity {
        email: "employee@example.com".to_string(),
        display_name: "Test Employee".to_string(),
        role: Role::User,
    };
    overrides(&mut identity);
    identity
}
