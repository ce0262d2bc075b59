//! Length-prefixed label sequences as they appear on the wire.

use super::{WireError, WireReader, WireWriter};

pub const MAX_LABEL_LEN: usize = 63;
/// Longest dotted name accepted by [`WireName::encode`].
pub const MAX_NAME_TEXT_LEN: usize = 254;
/// Longest encoded name, length bytes and terminator included (RFC 1035 §3.1).
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// Top two bits of a length byte. Both set marks a compression pointer.
pub const LABEL_TYPE_MASK: u8 = 0xC0;

/// A domain name in its encoded form: `(len, bytes)*` followed by a zero byte.
///
/// The bytes are never turned back into dotted text by the codec; comparisons
/// and copies operate on the encoding itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireName(Vec<u8>);

impl WireName {
    /// Encodes a dotted name such as `"example.com"`.
    ///
    /// Empty segments are skipped, so a trailing dot is accepted. The zero
    /// terminator is always written.
    pub fn encode(name: &str) -> Result<Self, WireError> {
        if name.len() > MAX_NAME_TEXT_LEN {
            return Err(WireError::NameTooLong(name.len()));
        }

        let mut bytes = Vec::with_capacity(name.len() + 2);
        for label in name.split('.').filter(|label| !label.is_empty()) {
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong(label.len()));
            }
            bytes.push(label.len() as u8);
            bytes.extend_from_slice(label.as_bytes());
        }
        bytes.push(0);

        if bytes.len() > MAX_NAME_WIRE_LEN {
            return Err(WireError::NameTooLong(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// Copies the encoded name starting at `offset` verbatim, terminator
    /// included, and returns it with the offset just past it.
    ///
    /// No compression pointer is followed here; see [`WireName::read`].
    pub fn copy_raw(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut reader = WireReader::at(buf, offset);
        let name = Self::read(&mut reader)?;
        Ok((name, reader.position()))
    }

    /// Reads an uncompressed name at the cursor and advances past it.
    ///
    /// Labels are walked by their length bytes so that a length running past
    /// the end of the buffer is reported as [`WireError::Truncated`]. A length
    /// byte with either of its top two bits set (a pointer or an extended
    /// label type) is rejected with [`WireError::UnsupportedLabel`].
    pub fn read(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        let start = reader.position();
        let mut probe = *reader;

        loop {
            let label_at = probe.position();
            let len = probe.read_u8()?;
            if len == 0 {
                break;
            }
            if len & LABEL_TYPE_MASK != 0 {
                return Err(WireError::UnsupportedLabel {
                    offset: label_at,
                    byte: len,
                });
            }
            probe.skip(len as usize)?;

            let consumed = probe.position() - start;
            if consumed >= MAX_NAME_WIRE_LEN {
                return Err(WireError::NameTooLong(consumed + 1));
            }
        }

        let span = probe.position() - start;
        let bytes = reader.read_slice(span)?;
        Ok(Self(bytes.to_vec()))
    }

    pub fn encode_into(&self, writer: &mut WireWriter<'_>) -> Result<(), WireError> {
        writer.write_bytes(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encoded length, terminator included.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for WireName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
