//! Infrastructure layer providing external service integrations.
//!
//! This module contains the flat-file stores and the HTTP clients for the
//! weather and news providers.

pub mod news;
pub mod persistence;
pub mod weather;

pub use news::*;
pub use persistence::*;
pub use weather::*;
