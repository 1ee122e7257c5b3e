//! Packing numbers picked by the operator on the current history page.

/// Insertion-ordered set of packing numbers.
///
/// Order is the order of selection; it is the print order of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add if absent, remove if present
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Replace the selection with `ids` (duplicates collapse)
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.clear();
        for id in ids {
            let id = id.into();
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// "Select all" checkbox: clears when everything visible is already
    /// selected, otherwise selects everything visible in list order.
    pub fn toggle_all(&mut self, visible: &[String]) {
        if self.is_all_of(visible) {
            self.clear();
        } else {
            self.select_all(visible.iter().cloned());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// True when the selection is exactly the visible set
    pub fn is_all_of(&self, visible: &[String]) -> bool {
        !visible.is_empty()
            && self.ids.len() == visible.len()
            && visible.iter().all(|id| self.contains(id))
    }

    /// Selected ids in selection order
    pub fn ordered(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible() -> Vec<String> {
        vec!["PK-1".into(), "PK-2".into(), "PK-3".into()]
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut sel = SelectionSet::new();
        sel.toggle("PK-3");
        sel.toggle("PK-1");
        sel.toggle("PK-2");
        assert_eq!(sel.ordered(), ["PK-3", "PK-1", "PK-2"]);

        sel.toggle("PK-1");
        assert!(!sel.contains("PK-1"));
        assert_eq!(sel.ordered(), ["PK-3", "PK-2"]);
    }

    #[test]
    fn test_select_all_twice_clears() {
        let mut sel = SelectionSet::new();
        sel.toggle_all(&visible());
        assert_eq!(sel.ordered(), visible().as_slice());

        sel.toggle_all(&visible());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_from_partial_selects_everything() {
        let mut sel = SelectionSet::new();
        sel.toggle("PK-2");
        sel.toggle_all(&visible());
        assert_eq!(sel.len(), 3);
        assert!(sel.is_all_of(&visible()));
    }

    #[test]
    fn test_select_all_on_empty_list_is_not_all() {
        let mut sel = SelectionSet::new();
        sel.toggle_all(&[]);
        assert!(sel.is_empty());
        assert!(!sel.is_all_of(&[]));
    }

    #[test]
    fn test_select_all_dedups() {
        let mut sel = SelectionSet::new();
        sel.select_all(["A", "B", "A"]);
        assert_eq!(sel.ordered(), ["A", "B"]);
    }
}
