use super::name::LABEL_TYPE_MASK;
use super::{WireError, WireName, WireReader};
use crate::{RecordClass, RecordType};

/// Lower 14 bits of a compression pointer hold the target offset.
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// A resource record decoded from a response (RFC 1035 §4.1.3).
///
/// `rdata` is a view into the buffer the message was decoded from, not a copy.
/// Its interpretation depends on `rtype` and is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<'a> {
    pub name: WireName,
    pub rtype: u16,
    pub class: u16,
    pub ttl: i32,
    pub rdlength: u16,
    pub rdata: &'a [u8],
}

impl<'a> Resource<'a> {
    /// Decodes one record at the cursor and leaves the cursor just past its
    /// rdata.
    pub fn decode(reader: &mut WireReader<'a>) -> Result<Self, WireError> {
        let name = decode_owner_name(reader)?;
        let rtype = reader.read_u16()?;
        let class = reader.read_u16()?;
        let ttl = reader.read_i32()?;
        let rdlength = reader.read_u16()?;
        let rdata = reader.read_slice(rdlength as usize)?;

        Ok(Self {
            name,
            rtype,
            class,
            ttl,
            rdlength,
            rdata,
        })
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.class)
    }
}

/// Reads the owner name, resolving at most one compression pointer.
///
/// A pointer must reference an offset strictly before its own position. The
/// referenced name is copied as-is and any pointer inside it is not followed.
/// The cursor only moves past the two pointer bytes.
fn decode_owner_name(reader: &mut WireReader<'_>) -> Result<WireName, WireError> {
    let at = reader.position();
    let first = reader.peek_u8()?;

    if first & LABEL_TYPE_MASK != LABEL_TYPE_MASK {
        return WireName::read(reader);
    }

    let target = (reader.read_u16()? & POINTER_OFFSET_MASK) as usize;
    if target >= at {
        return Err(WireError::InvalidPointer { at, target });
    }
    let (name, _) = WireName::copy_raw(reader.buffer(), target)?;
    Ok(name)
}
