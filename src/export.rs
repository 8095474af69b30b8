//! Export boundary: the pluggable encoder contract.
//!
//! The model defines no file format of its own. An encoder strategy is
//! injected into the workbook before export; it receives the finished graph
//! read-only and returns the packaged bytes. Compression, packaging, and
//! platform output handling all live on the encoder side of this line.

use crate::error::{Result, XlbookError};
use crate::types::Workbook;

/// Strategy that turns a finished workbook graph into packaged bytes.
///
/// Implementations walk [`Workbook::sheets`] (and the default style) and
/// may encounter shared resources no cell references; they must tolerate
/// those. Deduplication is by resource id, not by value.
///
/// Closures of shape `Fn(&Workbook) -> Result<Vec<u8>>` implement the trait
/// automatically, so a strategy can be a plain function value.
pub trait BookEncoder {
    /// Encode the graph as it stands at the moment of the call.
    fn encode(&self, book: &Workbook) -> Result<Vec<u8>>;
}

impl<F> BookEncoder for F
where
    F: Fn(&Workbook) -> Result<Vec<u8>>,
{
    fn encode(&self, book: &Workbook) -> Result<Vec<u8>> {
        self(book)
    }
}

impl Workbook {
    /// Inject the encoder used by the export entry points, replacing any
    /// previous one.
    pub fn set_encoder(&mut self, encoder: impl BookEncoder + 'static) {
        self.encoder = Some(Box::new(encoder));
    }

    /// Whether an encoder has been injected.
    pub fn has_encoder(&self) -> bool {
        self.encoder.is_some()
    }

    /// Encode the workbook into a byte buffer.
    ///
    /// The encoder holds a shared borrow of the workbook for the duration
    /// of the call, so the returned bytes reflect the graph exactly as it
    /// stood when the call was made; the borrow checker rules out mutation
    /// in the meantime. Encoding may be CPU-bound (compression); callers
    /// who need it off-thread must arrange that themselves. No cancellation
    /// or timeout semantics exist at this layer.
    ///
    /// # Errors
    /// [`XlbookError::EncoderNotConfigured`] when no encoder has been set;
    /// otherwise whatever the encoder itself raises.
    pub fn save_to_buffer(&self) -> Result<Vec<u8>> {
        let encoder = self
            .encoder
            .as_ref()
            .ok_or(XlbookError::EncoderNotConfigured)?;
        encoder.encode(self)
    }

    /// Encode the workbook into a browser-downloadable `Blob`.
    ///
    /// Identical graph read through the same encoder call as
    /// [`save_to_buffer`](Self::save_to_buffer); only the return shape
    /// differs.
    ///
    /// # Errors
    /// Same as [`save_to_buffer`](Self::save_to_buffer), plus an
    /// [`XlbookError::Encoder`] if `Blob` construction fails on the JS side.
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_blob(&self) -> Result<web_sys::Blob> {
        let bytes = self.save_to_buffer()?;
        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::of1(&array);
        web_sys::Blob::new_with_u8_array_sequence(&parts)
            .map_err(|e| XlbookError::Encoder(format!("blob construction failed: {e:?}")))
    }
}
