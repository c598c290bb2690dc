//! vendas-core - Core library for Vendas
//!
//! This crate contains the preference store, sales models, currency
//! formatting and environment diagnostics shared by the Vendas CLI and API.

pub mod currency;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod preferences;
pub mod storage;
pub mod util;

pub use error::{Error, Result};
pub use models::{DisplayPreferences, Layout, Sale, SalesSummary, Theme, UiSettings};
pub use preferences::{LoadOutcome, Preference, PreferenceStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
