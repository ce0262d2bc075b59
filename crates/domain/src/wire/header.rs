use super::{WireError, WireReader, WireWriter};

pub const HEADER_LEN: usize = 12;

/// The fixed 12-byte message header (RFC 1035 §4.1.1).
///
/// `flags` is carried as an opaque bitfield; compose it with the constants in
/// [`super::flags`].
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |        QDCOUNT / ANCOUNT / NSCOUNT / ARCOUNT  |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn encode(&self, writer: &mut WireWriter<'_>) -> Result<(), WireError> {
        if writer.remaining() < HEADER_LEN {
            return Err(WireError::Truncated {
                offset: writer.position(),
                needed: HEADER_LEN - writer.remaining(),
            });
        }
        writer.write_u16(self.id)?;
        writer.write_u16(self.flags)?;
        writer.write_u16(self.qdcount)?;
        writer.write_u16(self.ancount)?;
        writer.write_u16(self.nscount)?;
        writer.write_u16(self.arcount)
    }

    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        if reader.remaining() < HEADER_LEN {
            return Err(WireError::Truncated {
                offset: reader.position(),
                needed: HEADER_LEN - reader.remaining(),
            });
        }
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        })
    }
}
