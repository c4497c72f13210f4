//! Node identifiers backed by a process-wide string interner.
//!
//! Timeline nodes reference each other through their parent lists, so ids are
//! compared and hashed far more often than they are printed. [`NodeId`] stores
//! a small interned symbol and resolves the text only on display.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Opaque identifier of a timeline node.
///
/// Two ids created from the same string are equal and hash identically.
///
/// # Examples
///
/// ```
/// use branchline_core::identifier::NodeId;
///
/// let root = NodeId::new("kickoff");
/// let again: NodeId = "kickoff".into();
///
/// assert_eq!(root, again);
/// assert_eq!(root, "kickoff");
/// assert_eq!(root.to_string(), "kickoff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(DefaultSymbol);

impl NodeId {
    /// Creates a `NodeId` from its textual form, interning it if needed.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let text = interner.resolve(self.0).unwrap_or_default();
        f.write_str(text)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::new(&text))
    }
}
