//! Two-state edit/view machine shared by the Profile and Task Detail pages.
//!
//! ```text
//! Viewing --begin_edit--> Editing { snapshot }
//! Editing --save--------> Viewing   (keeps the edited value)
//! Editing --cancel------> Viewing   (restores the snapshot)
//! ```

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current mode of an [`Editable`] record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum EditMode<T> {
    Viewing,
    /// Holds the value as it was when editing began.
    Editing { snapshot: T },
}

impl<T> Default for EditMode<T> {
    fn default() -> Self {
        EditMode::Viewing
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditError {
    #[error("Record is not being edited")]
    NotEditing,
}

/// A record together with its edit/view mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Editable<T> {
    current: T,
    mode: EditMode<T>,
}

impl<T: Clone> Editable<T> {
    /// Wraps a record in the Viewing state.
    pub fn new(value: T) -> Self {
        Editable {
            current: value,
            mode: EditMode::Viewing,
        }
    }

    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    /// Enters Editing, remembering the current value. No-op when already editing.
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.mode = EditMode::Editing {
                snapshot: self.current.clone(),
            };
        }
    }

    /// Flips between the two states; leaving Editing this way saves.
    /// Returns true when the flip was a save.
    pub fn toggle_edit(&mut self) -> bool {
        if self.is_editing() {
            self.save()
        } else {
            self.begin_edit();
            false
        }
    }

    /// Applies `change` to the current value. Only allowed while editing.
    pub fn edit(&mut self, change: impl FnOnce(&mut T)) -> Result<(), EditError> {
        if !self.is_editing() {
            return Err(EditError::NotEditing);
        }
        change(&mut self.current);
        Ok(())
    }

    /// Leaves Editing and keeps the edited value. Returns false when not editing.
    pub fn save(&mut self) -> bool {
        match std::mem::take(&mut self.mode) {
            EditMode::Editing { .. } => true,
            EditMode::Viewing => false,
        }
    }

    /// Leaves Editing and restores the value captured by [`Editable::begin_edit`].
    /// Returns false when not editing.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.mode) {
            EditMode::Editing { snapshot } => {
                self.current = snapshot;
                true
            }
            EditMode::Viewing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_viewing() {
        let record = Editable::new("a".to_string());

        assert!(!record.is_editing());
        assert_eq!(record.mode, EditMode::Viewing);
    }

    #[test]
    fn cannot_edit_while_viewing() {
        let mut record = Editable::new("a".to_string());

        let result = record.edit(|v| v.push('b'));

        assert_eq!(result, Err(EditError::NotEditing));
        assert_eq!(record.value(), "a");
    }

    #[test]
    fn save_keeps_edited_value() {
        let mut record = Editable::new("a".to_string());

        record.begin_edit();
        record.edit(|v| v.push('b')).unwrap();
        let saved = record.save();

        assert!(saved);
        assert!(!record.is_editing());
        assert_eq!(record.value(), "ab");
    }

    #[test]
    fn cancel_restores_snapshot() {
        let mut record = Editable::new("a".to_string());

        record.begin_edit();
        record.edit(|v| v.push_str("bc")).unwrap();
        let cancelled = record.cancel();

        assert!(cancelled);
        assert!(!record.is_editing());
        assert_eq!(record.value(), "a");
    }

    #[test]
    fn begin_edit_twice_keeps_first_snapshot() {
        let mut record = Editable::new("a".to_string());

        record.begin_edit();
        record.edit(|v| v.push('b')).unwrap();
        record.begin_edit();
        record.cancel();

        assert_eq!(record.value(), "a");
    }

    #[test]
    fn toggle_alternates_and_saves() {
        let mut record = Editable::new(1);

        assert!(!record.toggle_edit());
        assert!(record.is_editing());
        record.edit(|v| *v = 2).unwrap();

        assert!(record.toggle_edit());
        assert!(!record.is_editing());
        assert_eq!(*record.value(), 2);
    }

    #[test]
    fn save_and_cancel_while_viewing_do_nothing() {
        let mut record = Editable::new(1);

        assert!(!record.save());
        assert!(!record.cancel());
        assert_eq!(*record.value(), 1);
    }
}
