use thiserror::Error;

/// Failures raised while encoding or decoding the DNS wire format.
///
/// None of these are retryable: the codec stops at the first one it hits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("buffer exhausted at offset {offset} ({needed} more bytes required)")]
    Truncated { offset: usize, needed: usize },

    #[error("label of {0} bytes exceeds the 63-byte limit")]
    LabelTooLong(usize),

    #[error("name of {0} bytes exceeds the wire limit")]
    NameTooLong(usize),

    #[error("compression pointer at offset {at} references invalid offset {target}")]
    InvalidPointer { at: usize, target: usize },

    #[error("unsupported label type 0x{byte:02x} at offset {offset}")]
    UnsupportedLabel { offset: usize, byte: u8 },
}

impl WireError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, WireError::Truncated { .. })
    }
}
