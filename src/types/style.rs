use serde::{Deserialize, Serialize};

/// A cell style: an aggregate of optional font, fill, alignment, and number
/// format settings.
///
/// Styles may be built ad hoc (no id) or created through
/// [`Workbook::create_share_cell_style`](super::Workbook::create_share_cell_style),
/// which assigns a workbook-unique id so encoders can emit the style once
/// and reference it from every cell that uses it. Fields left `None` fall
/// back to the encoder's defaults for that aspect.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    /// Share id; `None` for ad-hoc styles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<CellFont>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<CellFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<CellAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
}

/// Font settings for cell text.
///
/// Defaults to a non-bold, non-italic, non-underlined font with no explicit
/// name, size, or color.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellFont {
    /// Share id; `None` for ad-hoc fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FontColor>,
}

/// Font color: either an RRGGBB code or a theme palette slot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FontColor {
    Rgb(String),
    Theme(u32),
}

/// Fill settings for a cell.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellFill {
    /// Share id; `None` for ad-hoc fills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Background color as an RRGGBB code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Text alignment within a cell. A plain value with no identity of its own;
/// always embedded in the style that uses it.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellAlignment {
    pub wrap_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VAlign>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// A number format resource: a format code plus its workbook-unique id.
///
/// Created through
/// [`Workbook::create_share_number_format`](super::Workbook::create_share_number_format);
/// ids start above the built-in format range of the target file format.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    pub id: u32,
    /// Format code, e.g. `"0.00%"` or `"yyyy-mm-dd"`. Not validated here.
    pub code: String,
}
