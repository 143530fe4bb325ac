//! kakeibo - Terminal household ledger
//!
//! This library provides the core functionality for the kakeibo ledger. It
//! records income and expense entries plus recurring fixed expenses, and
//! aggregates them by Japanese fiscal year (April to March) and month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, recurring expenses, categories, fiscal calendar)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic and aggregation
//! - `reports`: Fiscal year and monthly reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
//! use kakeibo::services::SummaryService;
//! use kakeibo::storage::Storage;
//!
//! let paths = KakeiboPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let summary = SummaryService::new(&storage).year(2024)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::KakeiboError;
