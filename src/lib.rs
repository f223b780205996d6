//! Smart Life Hub - Personal Dashboard Library
//!
//! A terminal-based personal dashboard with reminders, expense tracking,
//! weather and news lookups, and restaurant search, backed by flat files.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
