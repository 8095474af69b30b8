//! xlbook - XLSX workbook builder
//!
//! In-memory document model for spreadsheet files: build up sheets, cells,
//! styles, and embedded resources programmatically, then hand the finished
//! object graph to a pluggable encoder that materializes it as a packaged
//! binary file:
//! - Sparse row-major cell grid per sheet, 0-based coordinates
//! - Automatic text interning (shared strings), inline numeric/date/boolean
//!   literals
//! - Shared styles, fonts, fills, number formats, images, and hyperlinks
//!   with workbook-unique ids
//! - Merge records, per-row/per-column size overrides, anchored images
//! - Encoder injected as a trait object or plain closure; byte-buffer and
//!   browser-`Blob` export variants
//!
//! The model performs almost no validation on purpose: merge geometry,
//! coordinate ranges, and dangling resource references are the encoder's
//! (or the caller's) concern. It is also strictly single-writer — every
//! mutation takes `&mut self` and there is no internal locking.
//!
//! # Example
//!
//! ```
//! use xlbook::Workbook;
//!
//! # fn main() -> xlbook::Result<()> {
//! let mut book = Workbook::new();
//!
//! let mut sheet = book.create_sheet("Data")?;
//! sheet.add_text("Hello", 0, 0, None);
//! sheet.add_text(42.0, 0, 1, None);
//! sheet.merge_cells(0, 0, 0, 1);
//!
//! // Any `Fn(&Workbook) -> Result<Vec<u8>>` is an encoder.
//! book.set_encoder(|_book: &Workbook| Ok(Vec::new()));
//! let bytes = book.save_to_buffer()?;
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod types;

pub use error::{Result, XlbookError};
pub use export::BookEncoder;
pub use types::*;
