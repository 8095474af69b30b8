//! Common test utilities: encoder stubs and payload fixtures.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use std::sync::{Arc, Mutex};

use xlbook::{BookEncoder, Workbook};

/// Snapshot slot shared between a [`RecordingEncoder`] and the test that
/// owns it.
pub type Seen = Arc<Mutex<Option<serde_json::Value>>>;

/// Encoder stub that records a JSON snapshot of the graph it was handed
/// and returns the serialized bytes.
pub struct RecordingEncoder {
    seen: Seen,
}

impl RecordingEncoder {
    /// Build the stub plus the handle the test keeps to inspect what the
    /// encoder saw.
    pub fn new() -> (Self, Seen) {
        let seen = Arc::new(Mutex::new(None));
        (
            Self {
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

impl BookEncoder for RecordingEncoder {
    fn encode(&self, book: &Workbook) -> xlbook::Result<Vec<u8>> {
        let snapshot = serde_json::to_value(book).expect("workbook serializes");
        let bytes = serde_json::to_vec(book).expect("workbook serializes");
        *self.seen.lock().expect("seen lock") = Some(snapshot);
        Ok(bytes)
    }
}

/// Read the recorded snapshot out of the shared slot.
pub fn recorded(seen: &Seen) -> serde_json::Value {
    seen.lock()
        .expect("seen lock")
        .clone()
        .expect("encoder was invoked")
}

/// The 4-byte PNG signature, as a stand-in image payload.
pub const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4e, 0x47];

/// Base64 encoding of [`PNG_MAGIC`].
pub const PNG_MAGIC_B64: &str = "iVBORw==";
