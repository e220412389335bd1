//! Session-scoped store of committed annotations.

use terranote_core::types::{Annotation, AnnotationId};
use tracing::debug;

/// Append-only, insertion-ordered collection of annotations.
///
/// The store lives for one session and is mutated only through
/// [`AnnotationStore::append`]; there is no removal. All mutation happens on
/// the single session thread, so a caller iterating [`list`](Self::list)
/// can never observe a partial append.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    entries: Vec<Annotation>,
}

impl AnnotationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed annotation, preserving insertion order.
    pub fn append(&mut self, annotation: Annotation) {
        debug!(id = %annotation.id, total = self.entries.len() + 1, "annotation stored");
        self.entries.push(annotation);
    }

    /// Returns the full ordered sequence.
    pub fn list(&self) -> &[Annotation] {
        &self.entries
    }

    /// Looks up an annotation by id.
    pub fn get(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.entries.iter().find(|a| &a.id == id)
    }

    /// Returns the number of stored annotations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terranote_core::types::{LngLat, Region};

    fn annotation(id: &str, text: &str) -> Annotation {
        let region = Region::from_vertices(vec![
            LngLat::new(-106.5, 39.5),
            LngLat::new(-106.4, 39.5),
            LngLat::new(-106.4, 39.4),
        ])
        .unwrap();
        Annotation::new(AnnotationId::new(id), text, region)
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = AnnotationStore::new();
        store.append(annotation("a", "first"));
        store.append(annotation("b", "second"));
        store.append(annotation("c", "third"));

        let texts: Vec<_> = store.list().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_list_is_idempotent() {
        let mut store = AnnotationStore::new();
        store.append(annotation("a", "first"));

        assert_eq!(store.list(), store.list());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = AnnotationStore::new();
        store.append(annotation("a", "first"));

        assert!(store.get(&AnnotationId::new("a")).is_some());
        assert!(store.get(&AnnotationId::new("missing")).is_none());
    }
}
