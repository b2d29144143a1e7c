/// The snapshot type stored in history.
use std::sync::Arc;

/// An immutable capture of the full serialized editor content at one
/// point in time.
///
/// Backed by a shared string so that recording, undoing, and redoing
/// clone a pointer rather than the content itself. The history never
/// inspects the content; it is an opaque serialized string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<str>);

impl Snapshot {
    pub fn new(content: impl Into<Arc<str>>) -> Self {
        Self(content.into())
    }

    /// An empty snapshot, the seed of a fresh session.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl From<&str> for Snapshot {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for Snapshot {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl AsRef<str> for Snapshot {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
