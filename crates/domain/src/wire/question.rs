use super::{WireError, WireName, WireReader, WireWriter};

/// The question section entry (RFC 1035 §4.1.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: WireName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(qname: WireName, qtype: u16, qclass: u16) -> Self {
        Self {
            qname,
            qtype,
            qclass,
        }
    }

    pub fn encode(&self, writer: &mut WireWriter<'_>) -> Result<(), WireError> {
        let needed = self.qname.len() + 4;
        if writer.remaining() < needed {
            return Err(WireError::Truncated {
                offset: writer.position(),
                needed: needed - writer.remaining(),
            });
        }
        self.qname.encode_into(writer)?;
        writer.write_u16(self.qtype)?;
        writer.write_u16(self.qclass)
    }

    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        let qname = WireName::read(reader)?;
        let qtype = reader.read_u16()?;
        let qclass = reader.read_u16()?;
        Ok(Self {
            qname,
            qtype,
            qclass,
        })
    }
}
