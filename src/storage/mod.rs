//! Storage layer for kakeibo
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use ledger::{LedgerData, LedgerMutation, LedgerRepository};

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

/// Main storage coordinator
pub struct Storage {
    paths: KakeiboPaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KakeiboPaths) -> Result<Self, KakeiboError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &KakeiboPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), KakeiboError> {
        self.ledger.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), KakeiboError> {
        self.ledger.save()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
