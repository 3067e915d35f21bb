//! Drag-based reordering of the diagram list.
//!
//! A three-state gesture machine (idle, dragging, idle) driven by generic
//! pointer rows and row geometry. While dragging it only tracks an advisory
//! candidate target; the actual reorder happens in the app when the gesture
//! ends, by delegating to the collection.

use fenbook_domain::DiagramId;

/// Vertical extent of one rendered list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub id: DiagramId,
    pub top: u16,
    pub height: u16,
}

impl RowBounds {
    fn center(&self) -> f64 {
        f64::from(self.top) + f64::from(self.height) / 2.0
    }

    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        source: DiagramId,
        candidate: Option<DiagramId>,
    },
}

#[derive(Debug, Default)]
pub struct DragReorderController {
    state: DragState,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn source(&self) -> Option<DiagramId> {
        match self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    pub fn candidate(&self) -> Option<DiagramId> {
        match self.state {
            DragState::Dragging { candidate, .. } => candidate,
            DragState::Idle => None,
        }
    }

    /// Begin a gesture on the record under the pointer.
    pub fn drag_start(&mut self, id: DiagramId) {
        self.state = DragState::Dragging {
            source: id,
            candidate: None,
        };
    }

    /// Track the nearest row by geometric center as the current candidate.
    /// Advisory only; nothing is mutated here.
    pub fn update(&mut self, pointer_row: u16, rows: &[RowBounds]) {
        if let DragState::Dragging { source, .. } = self.state {
            self.state = DragState::Dragging {
                source,
                candidate: closest_center(pointer_row, rows),
            };
        }
    }

    /// End the gesture. Returns `Some((dragged, target))` only when a
    /// candidate exists and differs from the dragged record; any other
    /// release aborts with no effect. Always returns to idle.
    pub fn drag_end(&mut self) -> Option<(DiagramId, DiagramId)> {
        let result = match self.state {
            DragState::Dragging {
                source,
                candidate: Some(target),
            } if target != source => Some((source, target)),
            _ => None,
        };
        self.state = DragState::Idle;
        result
    }

    pub fn abort(&mut self) {
        self.state = DragState::Idle;
    }
}

fn closest_center(pointer_row: u16, rows: &[RowBounds]) -> Option<DiagramId> {
    rows.iter()
        .min_by(|a, b| {
            let da = (a.center() - f64::from(pointer_row)).abs();
            let db = (b.center() - f64::from(pointer_row)).abs();
            da.total_cmp(&db)
        })
        .map(|row| row.id)
}
