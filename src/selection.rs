use log::debug;

use crate::id::ObjectId;

/// Tracks the one object (if any) that is selected on a surface.
///
/// Selecting a different object replaces the current one; there is no
/// multi-select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Option<ObjectId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn current(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    /// Returns true if the selection changed
    pub fn select(&mut self, id: ObjectId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        debug!("Selected {id}");
        self.selected = Some(id);
        true
    }

    /// Returns true if something was selected before
    pub fn deselect(&mut self) -> bool {
        match self.selected.take() {
            Some(previous) => {
                debug!("Deselected {previous}");
                true
            }
            None => false,
        }
    }

    /// Deselects `id` if it was selected, otherwise selects it.
    pub fn toggle(&mut self, id: ObjectId) {
        if self.is_selected(id) {
            self.deselect();
        } else {
            self.select(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces() {
        let mut selection = SelectionManager::new();
        let (a, b) = (ObjectId::new(), ObjectId::new());
        assert!(selection.select(a));
        assert!(!selection.select(a));
        assert!(selection.select(b));
        assert_eq!(selection.current(), Some(b));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionManager::new();
        let a = ObjectId::new();
        selection.toggle(a);
        assert!(selection.is_selected(a));
        selection.toggle(a);
        assert_eq!(selection.current(), None);
        assert!(!selection.deselect());
    }
}
