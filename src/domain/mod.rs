//! Core retrieval types and selection logic.

pub mod artifact;
pub mod error;
pub mod locate;
pub mod query;
pub mod retrieval;
