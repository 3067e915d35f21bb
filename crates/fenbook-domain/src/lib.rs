pub mod collection;
pub mod fen;
pub mod import;
pub mod options;
pub mod payload;
pub mod record;

pub use collection::DiagramCollection;
pub use fen::{validate_fen, FenError};
pub use import::{parse_import, ParsedEntry};
pub use options::{ColorValue, RenderOptions, RichColor};
pub use payload::{build_payload, BoardColorSpec, ColumnThresholds, FenEntry, GenerateRequest, PaddingSpec};
pub use record::{DiagramId, DiagramRecord, STARTING_POSITION};
