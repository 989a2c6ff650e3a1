//! Speech practice toolkit: pronunciation scoring, phrase translation with an
//! offline fallback, and capped practice/translation history.

pub mod config;
pub mod history;
pub mod pronunciation;
pub mod translation;
pub mod types;
