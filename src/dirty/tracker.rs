use super::snapshot::{DocumentSnapshot, Snapshot};

/// Decides whether a document differs from its last-saved snapshot.
///
/// Before the first save a document only counts as dirty once it has a
/// non-blank title, so an untouched new document never blocks navigation.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    saved: Option<DocumentSnapshot>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a copy of `doc` as the new baseline.
    pub fn set_saved_state(&mut self, doc: &impl Snapshot) {
        self.saved = Some(DocumentSnapshot::capture(doc));
    }

    pub fn is_dirty(&self, current: &impl Snapshot) -> bool {
        match &self.saved {
            None => !current.title().trim().is_empty(),
            Some(saved) => !saved.matches(current),
        }
    }

    pub fn reset(&mut self) {
        self.saved = None;
    }

    pub fn saved(&self) -> Option<&DocumentSnapshot> {
        self.saved.as_ref()
    }
}
