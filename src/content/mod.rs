//! Content producers
//!
//! The collaborators case handlers delegate to: whole-file reads, directory
//! listings, and script execution.

pub mod file;
pub mod listing;
pub mod script;
