//! Structured error types for xlbook.
//!
//! The model validates very little on purpose: only sheet-name uniqueness
//! and encoder wiring can fail. Everything else (merge geometry, coordinate
//! ranges, dangling resource references) is left to the encoder or the
//! caller.

/// All errors that can occur while building or exporting a workbook.
#[derive(Debug, thiserror::Error)]
pub enum XlbookError {
    /// A sheet with this display name already exists in the workbook.
    #[error("duplicate sheet name: {0}")]
    DuplicateSheetName(String),

    /// `save_to_buffer`/`save_to_blob` was called before an encoder was
    /// injected with [`Workbook::set_encoder`](crate::Workbook::set_encoder).
    #[error("no encoder configured; call Workbook::set_encoder before exporting")]
    EncoderNotConfigured,

    /// Base64 image payload could not be decoded.
    #[error("image data: {0}")]
    ImageData(#[from] base64::DecodeError),

    /// Failure raised by the injected encoder during export.
    #[error("encoder: {0}")]
    Encoder(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, XlbookError>;

impl From<String> for XlbookError {
    fn from(s: String) -> Self {
        Self::Encoder(s)
    }
}

impl From<&str> for XlbookError {
    fn from(s: &str) -> Self {
        Self::Encoder(s.to_string())
    }
}
