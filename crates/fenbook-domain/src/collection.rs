use crate::import::ParsedEntry;
use crate::record::{DiagramId, DiagramRecord, STARTING_POSITION};

/// Ordered sequence of diagram records. Sequence order is exactly the
/// display/print order. All mutations are synchronous and keyed on record
/// ids, never on positional indices.
#[derive(Debug, Clone)]
pub struct DiagramCollection {
    records: Vec<DiagramRecord>,
}

impl DiagramCollection {
    /// The editor starts with a single record holding the initial position.
    pub fn new() -> Self {
        Self {
            records: vec![DiagramRecord::new(
                STARTING_POSITION.to_string(),
                String::new(),
            )],
        }
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record with a freshly minted id. Never fails.
    pub fn add(&mut self, fen: String, description: String) -> DiagramId {
        let record = DiagramRecord::new(fen, description);
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Delete the record with the given id. Absent ids are a no-op,
    /// reported as `false`. Remaining records keep their order and ids.
    pub fn remove(&mut self, id: DiagramId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Move the record with the given id to `target_index`, shifting the
    /// records in between. The target is clamped to the valid range rather
    /// than rejected. Ids are never touched.
    pub fn reorder(&mut self, id: DiagramId, target_index: usize) -> bool {
        let Some(current) = self.index_of(id) else {
            return false;
        };
        let target = target_index.min(self.records.len() - 1);
        let record = self.records.remove(current);
        self.records.insert(target, record);
        true
    }

    /// Bulk import: discard the current sequence entirely and install the
    /// parsed entries with fresh ids in input order. Old ids are never
    /// reused, so stale drag handles can never resolve to a new record.
    pub fn replace_all(&mut self, entries: Vec<ParsedEntry>) {
        self.records = entries
            .into_iter()
            .map(|entry| DiagramRecord::new(entry.fen, entry.description))
            .collect();
    }

    pub fn records(&self) -> &[DiagramRecord] {
        &self.records
    }

    pub fn get(&self, id: DiagramId) -> Option<&DiagramRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: DiagramId) -> Option<&mut DiagramRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub fn index_of(&self, id: DiagramId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DiagramCollection {
    fn default() -> Self {
        Self::new()
    }
}
