//! Configuration module for kakeibo
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KakeiboPaths;
pub use settings::{DefaultEntryKind, Settings};
