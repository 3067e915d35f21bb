//! Canonical request payload for the generate endpoint.
//!
//! Built fresh on every submission from a snapshot of the editable state,
//! and discarded once the request completes. Deterministic, no I/O.

use fenbook_core::{FenbookError, FenbookResult};
use serde::{Deserialize, Serialize};

use crate::collection::DiagramCollection;
use crate::options::{ColorValue, RenderOptions};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FenEntry {
    pub fen: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaddingSpec {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardColorSpec {
    pub light_squares: String,
    pub dark_squares: String,
    pub border_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnThresholds {
    pub single_column: u32,
    pub two_column_max: u32,
}

/// Wire structure the rendering service accepts. Field names are the
/// service contract; do not rename without a service change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub fens: Vec<FenEntry>,
    pub diagrams_per_page: u32,
    pub padding: PaddingSpec,
    pub board_colors: BoardColorSpec,
    pub inner_border_color: String,
    pub columns_for_diagrams_per_page: ColumnThresholds,
    pub title: String,
    pub show_turn_indicator: bool,
    pub show_page_numbers: bool,
    pub show_coordinates: bool,
}

fn resolve_color(color: &ColorValue) -> String {
    match color {
        ColorValue::Raw(value) => value.clone(),
        ColorValue::Rich(rich) => rich.to_hex(),
    }
}

/// Snapshot the collection and options into the canonical payload.
///
/// Records with a blank (trimmed) FEN are silently dropped; this is the
/// only place incomplete rows are filtered. An empty filtered set is the
/// only validation failure at this layer; FEN syntax is not re-checked.
pub fn build_payload(
    collection: &DiagramCollection,
    options: &RenderOptions,
) -> FenbookResult<GenerateRequest> {
    let fens: Vec<FenEntry> = collection
        .records()
        .iter()
        .filter(|record| !record.fen.trim().is_empty())
        .map(|record| FenEntry {
            fen: record.fen.clone(),
            description: record.description.clone(),
        })
        .collect();

    if fens.is_empty() {
        return Err(FenbookError::Validation(
            "at least one diagram with a FEN is required".to_string(),
        ));
    }

    Ok(GenerateRequest {
        fens,
        diagrams_per_page: options.diagrams_per_page,
        padding: PaddingSpec {
            top: options.padding,
            bottom: options.padding,
            left: options.padding,
            right: options.padding,
        },
        board_colors: BoardColorSpec {
            light_squares: resolve_color(&options.light_squares),
            dark_squares: resolve_color(&options.dark_squares),
            border_color: resolve_color(&options.border_color),
        },
        inner_border_color: resolve_color(&options.inner_border_color),
        columns_for_diagrams_per_page: ColumnThresholds {
            single_column: options.single_column_max,
            two_column_max: options.two_column_max,
        },
        title: options.title.clone(),
        show_turn_indicator: options.show_turn_indicator,
        show_page_numbers: options.show_page_numbers,
        show_coordinates: options.show_coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RichColor;
    use crate::record::STARTING_POSITION;

    fn one_diagram() -> DiagramCollection {
        let mut collection = DiagramCollection::empty();
        collection.add(STARTING_POSITION.to_string(), "Start".to_string());
        collection
    }

    #[test]
    fn test_padding_scalar_duplicated_four_ways() {
        let options = RenderOptions {
            padding: 2.5,
            ..Default::default()
        };
        let payload = build_payload(&one_diagram(), &options).unwrap();
        assert_eq!(payload.padding.top, 2.5);
        assert_eq!(payload.padding.bottom, 2.5);
        assert_eq!(payload.padding.left, 2.5);
        assert_eq!(payload.padding.right, 2.5);
    }

    #[test]
    fn test_raw_color_passes_through_unchanged() {
        let options = RenderOptions {
            light_squares: ColorValue::raw("#abcdef"),
            ..Default::default()
        };
        let payload = build_payload(&one_diagram(), &options).unwrap();
        assert_eq!(payload.board_colors.light_squares, "#abcdef");
    }

    #[test]
    fn test_rich_color_resolves_through_hex_accessor() {
        let options = RenderOptions {
            dark_squares: ColorValue::Rich(RichColor::new(0x11, 0x22, 0x33)),
            ..Default::default()
        };
        let payload = build_payload(&one_diagram(), &options).unwrap();
        assert_eq!(payload.board_colors.dark_squares, "#112233");
    }

    #[test]
    fn test_blank_fen_rows_are_dropped() {
        let mut collection = one_diagram();
        collection.add("   ".to_string(), "blank".to_string());
        collection.add(String::new(), String::new());

        let payload = build_payload(&collection, &RenderOptions::default()).unwrap();
        assert_eq!(payload.fens.len(), 1);
        assert_eq!(payload.fens[0].fen, STARTING_POSITION);
    }

    #[test]
    fn test_all_blank_collection_fails_validation() {
        let mut collection = DiagramCollection::empty();
        collection.add("  ".to_string(), String::new());

        let result = build_payload(&collection, &RenderOptions::default());
        assert!(matches!(result, Err(fenbook_core::FenbookError::Validation(_))));
    }

    #[test]
    fn test_descriptions_default_to_empty_string() {
        let mut collection = DiagramCollection::empty();
        collection.add(STARTING_POSITION.to_string(), String::new());
        let payload = build_payload(&collection, &RenderOptions::default()).unwrap();
        assert_eq!(payload.fens[0].description, "");
    }

    #[test]
    fn test_wire_field_names_match_service_contract() {
        let payload = build_payload(&one_diagram(), &RenderOptions::default()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("fens").is_some());
        assert!(json.get("diagrams_per_page").is_some());
        assert!(json.get("columns_for_diagrams_per_page").is_some());
        assert_eq!(
            json["board_colors"]["light_squares"],
            serde_json::json!("#f0d9b5")
        );
        assert_eq!(json["padding"]["top"], serde_json::json!(5.0));
        assert_eq!(json["show_coordinates"], serde_json::json!(true));
    }

    #[test]
    fn test_build_is_deterministic() {
        let collection = one_diagram();
        let options = RenderOptions::default();
        let a = build_payload(&collection, &options).unwrap();
        let b = build_payload(&collection, &options).unwrap();
        assert_eq!(a, b);
    }
}
