//! Storage initialization
//!
//! Handles first-run setup: directories and an empty ledger document.

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

use super::file_io::write_json_atomic;
use super::ledger::LedgerData;

/// Initialize storage for a fresh installation
///
/// An existing ledger document is left untouched.
pub fn initialize_storage(paths: &KakeiboPaths) -> Result<(), KakeiboError> {
    paths.ensure_directories()?;

    if !paths.ledger_file().exists() {
        write_json_atomic(paths.ledger_file(), &LedgerData::default())?;
        tracing::info!(path = %paths.ledger_file().display(), "created empty ledger");
    }

    Ok(())
}
