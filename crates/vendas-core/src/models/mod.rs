//! Data models for Vendas

mod sale;
mod settings;

pub use sale::{sort_recent_first, summarize, Sale, SalesSummary};
pub use settings::{DisplayPreferences, Layout, Theme, UiSettings};
