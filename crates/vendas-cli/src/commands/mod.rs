pub mod common;
pub mod completions;
pub mod display;
pub mod env_check;
pub mod format;
pub mod prefs;
pub mod sales;
