//! The media catalog tree.
//!
//! A catalog is a tree of [`MediaItem`]s: groups own their children, and
//! every item keeps a weak link back to its parent for upward navigation.

mod display;
mod model;
mod walk;

pub use display::{Row, format_duration, label_from_fields, rows};
pub use model::MediaItem;
pub use walk::{Ancestors, Descendants};
