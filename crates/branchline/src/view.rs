//! Views that sit around the graph layout.
//!
//! - [`visibility`] trims a full node collection down to what the collapse
//!   state leaves on screen.
//! - [`chronology`] orders nodes for the plain timeline list, which bypasses
//!   the graph layout entirely.

pub mod chronology;
pub mod visibility;

pub use chronology::chronological;
pub use visibility::{collapsible_ids, hidden_descendants, visible_nodes};
