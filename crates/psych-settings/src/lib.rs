//! psych-settings
//!
//! The one persisted preference (light/dark theme) and the key/value stores
//! it is kept in.

pub mod error;
pub mod store;
pub mod theme;

pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{THEME_KEY, Theme, ThemeStore};
