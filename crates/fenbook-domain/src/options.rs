use serde::{Deserialize, Serialize};

/// A color as the editor holds it. Plain hex strings come from text entry;
/// rich values come from the color picker and resolve through `to_hex`.
/// The payload builder matches on this exhaustively rather than probing
/// the value's shape at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColorValue {
    Raw(String),
    Rich(RichColor),
}

impl ColorValue {
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RichColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RichColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Option fields accompanying the diagram set. Defaults follow the
/// rendering service's documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOptions {
    pub diagrams_per_page: u32,
    /// Single scalar; duplicated to all four sides at payload build time.
    pub padding: f64,
    pub light_squares: ColorValue,
    pub dark_squares: ColorValue,
    pub border_color: ColorValue,
    pub inner_border_color: ColorValue,
    /// Up to this many diagrams per page, lay out a single column.
    pub single_column_max: u32,
    /// Up to this many, two columns; beyond both, three.
    pub two_column_max: u32,
    pub title: String,
    pub show_turn_indicator: bool,
    pub show_page_numbers: bool,
    pub show_coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            diagrams_per_page: 6,
            padding: 5.0,
            light_squares: ColorValue::raw("#f0d9b5"),
            dark_squares: ColorValue::raw("#b58863"),
            border_color: ColorValue::raw("#000000"),
            inner_border_color: ColorValue::raw("#000000"),
            single_column_max: 1,
            two_column_max: 8,
            title: String::new(),
            show_turn_indicator: false,
            show_page_numbers: false,
            show_coordinates: true,
        }
    }
}
