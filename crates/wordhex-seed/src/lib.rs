//! Database setup and seeding tools for WordHex.
//!
//! The hosted backend exposes its tables as REST collection endpoints, so
//! everything here speaks plain HTTP: probe requests to check that the
//! expected tables exist, POSTs to seed the sample word list, and a bounded
//! read to spot-check what landed. Schema creation itself cannot be automated
//! with the anonymous key; the [`schema`] module prints the manual dashboard
//! walkthrough instead.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wordhex_seed::{BackendConfig, DataApiClient, RecordShape};
//! use wordhex_seed::{seed, words};
//!
//! let config = BackendConfig::from_env();
//! let client = DataApiClient::new(&config)?;
//! let report = seed::seed_words(&client, words::SAMPLE_WORDS, RecordShape::Extended).await;
//! assert!(report.any_added());
//! ```

pub mod api;
pub mod config;
pub mod schema;
pub mod seed;
pub mod words;

pub use api::{DataApiClient, InsertOutcome, TableStatus};
pub use config::{BackendConfig, RecordShape};
pub use seed::SeedReport;
pub use words::{Difficulty, WordRecord};
