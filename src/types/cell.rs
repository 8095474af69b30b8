use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::CellStyle;

/// An interned text resource.
///
/// Text written into cells is always stored as a `ShareString` so that a
/// string occurring in many cells is emitted once by the encoder and
/// referenced by id everywhere else. Created through
/// [`Workbook::create_share_string`](super::Workbook::create_share_string)
/// or implicitly by [`SheetMut::add_text`](super::SheetMut::add_text).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShareString {
    /// Workbook-unique id, assigned at creation and never reused.
    pub id: u32,
    pub text: String,
}

/// Content stored in a cell.
///
/// Literal scalars are stored inline so they round-trip with their native
/// type; text is always held by shared reference. This is the stored shape —
/// callers pass a [`CellValue`] and `add_text` performs the conversion.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CellContent {
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
    Shared(ShareString),
}

impl CellContent {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Text of the shared string, if this cell holds one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Shared(s) => Some(&s.text),
            _ => None,
        }
    }
}

/// Input value accepted by [`SheetMut::add_text`](super::SheetMut::add_text).
///
/// Replaces runtime type inspection with an explicit conversion step: plain
/// text is promoted to an interned [`ShareString`] on insertion, numeric,
/// date, and boolean input never is. A pre-interned `ShareString` is stored
/// as-is.
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
    Shared(ShareString),
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v.and_time(NaiveTime::MIN))
    }
}

impl From<ShareString> for CellValue {
    fn from(v: ShareString) -> Self {
        Self::Shared(v)
    }
}

/// A single cell: one content value plus optional style and hyperlink.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub content: CellContent,
    /// `None` means "use the workbook default style at encode time".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
}

impl Cell {
    pub(crate) fn new(content: CellContent, style: Option<CellStyle>) -> Self {
        Self {
            content,
            style,
            hyperlink: None,
        }
    }

    /// Attach a hyperlink. Independent of the content value.
    pub fn set_hyperlink(&mut self, link: Hyperlink) -> &mut Self {
        self.hyperlink = Some(link);
        self
    }
}

/// A hyperlink resource.
///
/// The optional style overrides the cell's own style where the link is
/// rendered. Created through
/// [`Workbook::create_hyperlink`](super::Workbook::create_hyperlink).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hyperlink {
    /// Workbook-unique id, assigned at creation and never reused.
    pub id: u32,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    #[test]
    fn scalar_conversions_keep_their_type() {
        assert!(matches!(CellValue::from(1.5), CellValue::Number(_)));
        assert!(matches!(CellValue::from(7), CellValue::Number(_)));
        assert!(matches!(CellValue::from(true), CellValue::Bool(true)));
        assert!(matches!(CellValue::from("x"), CellValue::Text(_)));
    }

    #[test]
    fn date_without_time_lands_on_midnight() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let CellValue::Date(dt) = CellValue::from(day) else {
            panic!("expected a date");
        };
        assert_eq!(dt.time(), NaiveTime::MIN);
    }

    #[test]
    fn preinterned_string_is_not_reboxed() {
        let s = ShareString {
            id: 3,
            text: "shared".to_string(),
        };
        let CellValue::Shared(stored) = CellValue::from(s.clone()) else {
            panic!("expected a shared string");
        };
        assert_eq!(stored, s);
    }
}
