//! Test utilities for use case and HTTP-level testing.
//!
//! This module provides:
//! - In-memory implementations of the booking store and roster source
//! - Test data factories
//! - `TestAppStateBuilder` for constructing an `AppState` over those mocks

mod app_state_builder;
mod booking_mocks;
mod factories;
mod roster_mocks;

pub use app_state_builder::*;
pub use booking_mocks::*;
pub use factories::*;
pub use roster_mocks::*;
