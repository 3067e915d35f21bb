//! Single-selection state for the diagram list.

/// Tracks which list row is selected, independent of the UI framework.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Keep the selection valid after the list shrinks or empties.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if len == 0 {
                self.selected = None;
            } else if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}
