use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type DiagramId = Uuid;

/// Standard initial position; the collection starts with one record holding it.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// One board encoding plus an optional caption. The id is minted once at
/// creation and never reassigned; reorder and removal key on it instead of
/// the positional index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagramRecord {
    pub id: DiagramId,
    pub fen: String,
    pub description: String,
}

impl DiagramRecord {
    pub fn new(fen: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            fen,
            description,
        }
    }

    pub fn update_fen(&mut self, fen: String) {
        self.fen = fen;
    }

    pub fn update_description(&mut self, description: String) {
        self.description = description;
    }
}
