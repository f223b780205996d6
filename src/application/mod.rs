//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing configuration, application state, and user-triggered actions.

pub mod config;
pub mod state;

pub use config::*;
pub use state::*;
