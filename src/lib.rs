//! A hierarchical catalog of media items.
//!
//! Items are either playable leaves or groups of other items. The tree is
//! owned top-down; each item holds a weak link to its parent.

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{MediaItem, Row};
pub use config::{DisplayField, DisplaySettings, Settings};
pub use error::{Error, Result};
