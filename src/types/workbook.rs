use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::{Result, XlbookError};
use crate::export::BookEncoder;

use super::{
    Cell, CellContent, CellFill, CellFont, CellStyle, CellValue, Hyperlink, Image, ImageData,
    ImageFormat, ImagePlacement, NumberFormat, ShareString,
};

/// Per-category monotonic id counters, owned by the workbook instance.
///
/// Once assigned an id is never reused or reassigned for the lifetime of
/// the workbook. Share strings, styles, fonts, and fills number from 0;
/// sheets, images, and hyperlinks from 1; number formats continue above the
/// target format's built-in range.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct IdAllocators {
    sheet: u32,
    cell_style: u32,
    share_string: u32,
    number_format: u32,
    image: u32,
    hyperlink: u32,
    cell_font: u32,
    cell_fill: u32,
}

/// First custom number format id is 177; 1..=176 belong to the format's
/// built-in table.
const NUMBER_FORMAT_BASE: u32 = 176;

impl Default for IdAllocators {
    fn default() -> Self {
        Self {
            sheet: 0,
            cell_style: 0,
            share_string: 0,
            number_format: NUMBER_FORMAT_BASE,
            image: 0,
            hyperlink: 0,
            cell_font: 0,
            cell_fill: 0,
        }
    }
}

impl IdAllocators {
    fn next_sheet(&mut self) -> u32 {
        self.sheet += 1;
        self.sheet
    }

    fn next_cell_style(&mut self) -> u32 {
        let id = self.cell_style;
        self.cell_style += 1;
        id
    }

    fn next_share_string(&mut self) -> u32 {
        let id = self.share_string;
        self.share_string += 1;
        id
    }

    fn next_number_format(&mut self) -> u32 {
        self.number_format += 1;
        self.number_format
    }

    fn next_image(&mut self) -> u32 {
        self.image += 1;
        self.image
    }

    fn next_hyperlink(&mut self) -> u32 {
        self.hyperlink += 1;
        self.hyperlink
    }

    fn next_cell_font(&mut self) -> u32 {
        let id = self.cell_font;
        self.cell_font += 1;
        id
    }

    fn next_cell_fill(&mut self) -> u32 {
        let id = self.cell_fill;
        self.cell_fill += 1;
        id
    }
}

/// A rectangle of cells recorded as logically combined for display.
///
/// Coordinates are stored verbatim; degenerate or overlapping rectangles
/// are not rejected here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

/// A single worksheet: a sparse cell grid plus sizing overrides, merge
/// records, and image placements.
///
/// Rows and columns are 0-based and the grid is row-major (row key first,
/// column key inside the row map). A row or column absent from the override
/// maps uses the sheet default.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    name: String,
    id: u32,
    rows: BTreeMap<u32, BTreeMap<u32, Cell>>,
    pub default_col_width: f64,
    pub default_row_height: f64,
    col_widths: BTreeMap<u32, f64>,
    row_heights: BTreeMap<u32, f64>,
    merges: Vec<MergeRange>,
    images: Vec<ImagePlacement>,
}

impl Sheet {
    fn new(name: &str, id: u32) -> Self {
        Self {
            name: name.to_string(),
            id,
            rows: BTreeMap::new(),
            default_col_width: 10.0,
            default_row_height: 16.0,
            col_widths: BTreeMap::new(),
            row_heights: BTreeMap::new(),
            merges: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Caller-supplied display name, unique within the workbook.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Structural id allocated at creation (1-based, workbook-unique).
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.rows.get(&row)?.get(&col)
    }

    pub fn cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
        self.rows.get_mut(&row)?.get_mut(&col)
    }

    /// Populated rows in ascending order, each with its column→cell map.
    /// A row materialized by [`set_row_height`](Self::set_row_height) may
    /// have an empty map.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u32, Cell>)> {
        self.rows.iter().map(|(row, cells)| (*row, cells))
    }

    /// Whether the row key exists in the grid, cells or not.
    pub fn has_row(&self, row: u32) -> bool {
        self.rows.contains_key(&row)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(BTreeMap::is_empty)
    }

    /// Set a sparse width override for one column.
    pub fn set_col_width(&mut self, col: u32, width: f64) {
        self.col_widths.insert(col, width);
    }

    /// Set a sparse height override for one row.
    ///
    /// Also materializes the row in the grid, so the height renders even if
    /// the row never receives a cell.
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
        self.rows.entry(row).or_default();
    }

    /// Effective width for a column: the override, or the sheet default.
    pub fn col_width(&self, col: u32) -> f64 {
        self.col_widths
            .get(&col)
            .copied()
            .unwrap_or(self.default_col_width)
    }

    /// Effective height for a row: the override, or the sheet default.
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.default_row_height)
    }

    /// Record a merge rectangle.
    ///
    /// Rectangles are kept in insertion order with their coordinates
    /// verbatim. Degenerate or overlapping rectangles are accepted; geometry
    /// is the encoder's (or the caller's) concern.
    pub fn merge_cells(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) {
        self.merges.push(MergeRange {
            start_row,
            start_col,
            end_row,
            end_col,
        });
    }

    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    /// Anchor an image at (row, col) with a rendered size in pixels.
    ///
    /// Placements never touch the cell grid and no collision check is made;
    /// several placements may share an anchor.
    pub fn add_image(&mut self, image: &Image, row: u32, col: u32, width: u32, height: u32) {
        self.images.push(ImagePlacement {
            image: image.clone(),
            row,
            col,
            width,
            height,
        });
    }

    pub fn images(&self) -> &[ImagePlacement] {
        &self.images
    }
}

/// Mutable handle to a sheet that can also reach the owning workbook's id
/// allocators, which text interning needs.
///
/// Derefs to [`Sheet`], so every plain grid operation is available through
/// it as well.
pub struct SheetMut<'a> {
    sheet: &'a mut Sheet,
    ids: &'a mut IdAllocators,
}

impl Deref for SheetMut<'_> {
    type Target = Sheet;

    fn deref(&self) -> &Self::Target {
        self.sheet
    }
}

impl DerefMut for SheetMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sheet
    }
}

impl SheetMut<'_> {
    /// Insert content at (row, col), overwriting any prior cell there.
    ///
    /// Text input is interned through the workbook's share-string allocator
    /// before storage; numeric, date, and boolean input is stored inline.
    /// `style: None` means "use the workbook default at encode time".
    /// Returns the stored cell so a hyperlink can be attached.
    pub fn add_text(
        &mut self,
        value: impl Into<CellValue>,
        row: u32,
        col: u32,
        style: Option<CellStyle>,
    ) -> &mut Cell {
        let content = match value.into() {
            CellValue::Text(text) => CellContent::Shared(ShareString {
                id: self.ids.next_share_string(),
                text,
            }),
            CellValue::Shared(shared) => CellContent::Shared(shared),
            CellValue::Number(n) => CellContent::Number(n),
            CellValue::Date(d) => CellContent::Date(d),
            CellValue::Bool(b) => CellContent::Bool(b),
        };
        let cell = Cell::new(content, style);
        match self.sheet.rows.entry(row).or_default().entry(col) {
            btree_map::Entry::Occupied(mut slot) => {
                slot.insert(cell);
                slot.into_mut()
            }
            btree_map::Entry::Vacant(slot) => slot.insert(cell),
        }
    }
}

/// The root aggregate: owns every sheet, the shared-resource id allocators,
/// the default cell style, and the (optional) encoder strategy.
///
/// Intended for single-writer, synchronous construction. All mutation takes
/// `&mut self`; export takes `&self`, so the borrow checker rules out
/// mutating the graph while an encoder is reading it.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    sheets: Vec<Sheet>,
    /// Applied by encoders when a cell carries no style of its own.
    pub default_cell_style: CellStyle,
    ids: IdAllocators,
    #[serde(skip)]
    pub(crate) encoder: Option<Box<dyn BookEncoder>>,
}

impl fmt::Debug for Workbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbook")
            .field("sheets", &self.sheets)
            .field("default_cell_style", &self.default_cell_style)
            .field("ids", &self.ids)
            .field("encoder_configured", &self.encoder.is_some())
            .finish()
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook {
    /// An empty workbook with the stock default style (Calibri 11) and no
    /// encoder configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            default_cell_style: CellStyle {
                font: Some(CellFont {
                    name: Some("Calibri".to_string()),
                    size: Some(11.0),
                    ..CellFont::default()
                }),
                ..CellStyle::default()
            },
            ids: IdAllocators::default(),
            encoder: None,
        }
    }

    /// Create a sheet with the given display name.
    ///
    /// # Errors
    /// [`XlbookError::DuplicateSheetName`] if the name is already taken.
    pub fn create_sheet(&mut self, name: &str) -> Result<SheetMut<'_>> {
        if self.sheets.iter().any(|s| s.name == name) {
            return Err(XlbookError::DuplicateSheetName(name.to_string()));
        }
        let Self { sheets, ids, .. } = self;
        let id = ids.next_sheet();
        sheets.push(Sheet::new(name, id));
        // Just pushed; the lookup cannot miss.
        sheets
            .last_mut()
            .map(|sheet| SheetMut { sheet, ids })
            .ok_or_else(|| XlbookError::DuplicateSheetName(name.to_string()))
    }

    /// Look up a sheet by name. Absence is a normal outcome, not an error.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Mutable lookup by name, with interning capability.
    pub fn sheet_mut(&mut self, name: &str) -> Option<SheetMut<'_>> {
        let Self { sheets, ids, .. } = self;
        sheets
            .iter_mut()
            .find(|s| s.name == name)
            .map(|sheet| SheetMut { sheet, ids })
    }

    /// All sheets in creation order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Create a shared cell style: the given fields overlaid on the type's
    /// defaults, with the next style id assigned. Sharing one style across
    /// many cells keeps the encoded file small.
    pub fn create_share_cell_style(&mut self, fields: CellStyle) -> CellStyle {
        CellStyle {
            id: Some(self.ids.next_cell_style()),
            ..fields
        }
    }

    /// Create a shared font, overlaying the given fields on the defaults.
    pub fn create_share_cell_font(&mut self, fields: CellFont) -> CellFont {
        CellFont {
            id: Some(self.ids.next_cell_font()),
            ..fields
        }
    }

    /// Create a shared fill, overlaying the given fields on the defaults.
    pub fn create_share_cell_fill(&mut self, fields: CellFill) -> CellFill {
        CellFill {
            id: Some(self.ids.next_cell_fill()),
            ..fields
        }
    }

    /// Create a shared number format from a format code.
    pub fn create_share_number_format(&mut self, code: &str) -> NumberFormat {
        NumberFormat {
            id: self.ids.next_number_format(),
            code: code.to_string(),
        }
    }

    /// Intern a text value for reuse across many cells. Numeric content
    /// should stay inline instead; see
    /// [`SheetMut::add_text`](SheetMut::add_text).
    pub fn create_share_string(&mut self, text: &str) -> ShareString {
        ShareString {
            id: self.ids.next_share_string(),
            text: text.to_string(),
        }
    }

    /// Register an image payload for placement on sheets.
    pub fn create_image(&mut self, data: ImageData, format: ImageFormat) -> Image {
        Image {
            id: self.ids.next_image(),
            data,
            format,
        }
    }

    /// Create a hyperlink; its optional style overrides the cell's style
    /// where the link is rendered.
    pub fn create_hyperlink(&mut self, url: &str, style: Option<CellStyle>) -> Hyperlink {
        Hyperlink {
            id: self.ids.next_hyperlink(),
            url: url.to_string(),
            style,
        }
    }
}
