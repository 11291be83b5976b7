//! Row selection
//!
//! Provides [`Selection`], the set of checked record ids of a list view.
//!
//! Selection is membership, not sequence: two selections are equal when they
//! hold the same ids. Insertion order is kept only so rendering and bulk
//! operations are deterministic.

use clinic_record::RecordId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Set of selected record ids
///
/// Ids of records that were filtered out may stay latent in the set; they are
/// never reported as selected against a view that does not contain them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: IndexSet<RecordId>,
}

impl Selection {
    /// Create empty selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Header checkbox handler
    ///
    /// Checked selects every id of the current filtered view, unchecked
    /// selects nothing.
    #[must_use]
    pub fn toggle_all<'a, I>(all_ids: I, checked: bool) -> Self
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        if checked {
            all_ids.into_iter().cloned().collect()
        } else {
            Self::new()
        }
    }

    /// Row checkbox handler: new selection with `id` flipped
    #[must_use]
    pub fn toggle_one(&self, id: &RecordId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Flip `id` in place
    ///
    /// Returns `true` if the id is selected afterwards.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Number of ids of `all_ids` that are selected
    #[must_use]
    pub fn selected_in(&self, all_ids: &[RecordId]) -> usize {
        all_ids.iter().filter(|id| self.ids.contains(*id)).count()
    }

    /// Header checkbox tri-state: some but not all of `all_ids` selected
    #[must_use]
    pub fn indeterminate(&self, all_ids: &[RecordId]) -> bool {
        let selected = self.selected_in(all_ids);
        selected > 0 && selected < all_ids.len()
    }

    /// Header checkbox checked: `all_ids` is non-empty and fully selected
    #[must_use]
    pub fn all_selected(&self, all_ids: &[RecordId]) -> bool {
        !all_ids.is_empty() && self.selected_in(all_ids) == all_ids.len()
    }

    /// Drop `id`, returning whether it was selected
    #[inline]
    pub fn remove(&mut self, id: &RecordId) -> bool {
        self.ids.shift_remove(id)
    }

    /// Keep only ids passing `keep`
    #[inline]
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&RecordId) -> bool,
    {
        self.ids.retain(|id| keep(id));
    }

    /// Deselect everything
    #[inline]
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected ids (including latent ones)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate in selection order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }
}

impl FromIterator<RecordId> for Selection {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a RecordId;
    type IntoIter = indexmap::set::Iter<'a, RecordId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_test_utils::ids;

    #[test]
    fn toggle_all_checked_selects_view() {
        let view = ids(&["a", "b", "c"]);
        let s = Selection::toggle_all(&view, true);
        assert_eq!(s.len(), 3);
        assert!(view.iter().all(|id| s.is_selected(id)));
    }

    #[test]
    fn toggle_all_unchecked_clears() {
        let view = ids(&["a", "b"]);
        assert!(Selection::toggle_all(&view, false).is_empty());
    }

    #[test]
    fn toggle_one_adds_then_removes() {
        let a = RecordId::new("a");
        let s = Selection::new().toggle_one(&a);
        assert!(s.is_selected(&a));
        assert!(!s.toggle_one(&a).is_selected(&a));
    }

    #[test]
    fn toggle_from_middle_keeps_others() {
        let mut s: Selection = ids(&["a", "b", "c"]).into_iter().collect();
        assert!(!s.toggle(&RecordId::new("b")));
        let left: Vec<_> = s.iter().map(RecordId::as_str).collect();
        assert_eq!(left, vec!["a", "c"]);
    }

    #[test]
    fn equality_ignores_order() {
        let one: Selection = ids(&["a", "b"]).into_iter().collect();
        let two: Selection = ids(&["b", "a"]).into_iter().collect();
        assert_eq!(one, two);
    }

    #[test]
    fn indeterminate_boundaries() {
        let view = ids(&["a", "b", "c"]);
        assert!(!Selection::new().indeterminate(&view));
        assert!(Selection::new().toggle_one(&view[1]).indeterminate(&view));
        assert!(!Selection::toggle_all(&view, true).indeterminate(&view));
    }

    #[test]
    fn latent_ids_do_not_count_against_view() {
        let view = ids(&["a", "b"]);
        let s: Selection = ids(&["a", "b", "gone"]).into_iter().collect();
        assert!(s.all_selected(&view));
        assert!(!s.indeterminate(&view));
        assert_eq!(s.selected_in(&view), 2);
    }

    #[test]
    fn all_selected_is_false_for_empty_view() {
        let s: Selection = ids(&["a"]).into_iter().collect();
        assert!(!s.all_selected(&[]));
        assert!(!s.indeterminate(&[]));
    }

    #[test]
    fn retain_and_remove() {
        let mut s: Selection = ids(&["a", "b", "c"]).into_iter().collect();
        assert!(s.remove(&RecordId::new("a")));
        assert!(!s.remove(&RecordId::new("a")));
        s.retain(|id| id.as_str() != "c");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![&RecordId::new("b")]);
        s.clear();
        assert!(s.is_empty());
    }
}
