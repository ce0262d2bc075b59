//! Message-level encode/decode driving the section codecs over one cursor.
//!
//! ```text
//! +---------------------+
//! |        Header       |
//! +---------------------+
//! |       Question      | the question for the name server
//! +---------------------+
//! |        Answer       | RRs answering the question
//! +---------------------+
//! |      Authority      | not emitted, not parsed
//! +---------------------+
//! |      Additional     | not emitted, not parsed
//! +---------------------+
//! ```

use super::{flags, Header, Question, Resource, WireError, WireName, WireReader, WireWriter};
use crate::{RecordClass, RecordType};

/// Classic UDP payload limit without EDNS(0).
pub const MAX_MESSAGE_LEN: usize = 512;

/// The buffer a single query/response exchange is carried in.
pub type MessageBuffer = [u8; MAX_MESSAGE_LEN];

/// A DNS message whose answer records borrow from the buffer it was decoded
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    pub header: Header,
    pub question: Question,
    pub answers: Vec<Resource<'a>>,
    /// Never populated by [`Message::decode`].
    pub authority: Vec<Resource<'a>>,
    /// Never populated by [`Message::decode`].
    pub additional: Vec<Resource<'a>>,
}

impl Message<'static> {
    /// A recursive query for `hostname` in the IN class.
    pub fn query(id: u16, hostname: &str, record_type: RecordType) -> Result<Self, WireError> {
        let qname = WireName::encode(hostname)?;
        Ok(Self {
            header: Header {
                id,
                flags: flags::OPCODE_QUERY | flags::RD,
                qdcount: 1,
                ..Header::default()
            },
            question: Question::new(qname, record_type.to_u16(), RecordClass::IN.to_u16()),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        })
    }
}

impl<'a> Message<'a> {
    /// Writes the header and question into `buf` and returns the number of
    /// bytes written. Resource sections are never emitted.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        let mut writer = WireWriter::new(buf);
        self.header.encode(&mut writer)?;
        self.question.encode(&mut writer)?;
        Ok(writer.position())
    }

    /// Decodes header, question and `ancount` answer records.
    ///
    /// Authority and additional counts are kept in the header but their
    /// sections are not read. Decoding stops at the first malformed field.
    pub fn decode(buf: &'a [u8]) -> Result<Self, WireError> {
        let mut reader = WireReader::new(buf);
        let header = Header::decode(&mut reader)?;
        let question = Question::decode(&mut reader)?;

        let answers = (0..header.ancount)
            .map(|_| Resource::decode(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            header,
            question,
            answers,
            authority: Vec::new(),
            additional: Vec::new(),
        })
    }
}

/// Encodes a recursive query with a random id into `buf`.
///
/// Returns the id (for matching the response) and the encoded length.
pub fn build_query(
    hostname: &str,
    record_type: RecordType,
    buf: &mut [u8],
) -> Result<(u16, usize), WireError> {
    let id = fastrand::u16(..);
    let len = Message::query(id, hostname, record_type)?.encode(buf)?;
    Ok((id, len))
}

/// Decodes a response received into `buf`; the result borrows from it.
pub fn parse_response(buf: &[u8]) -> Result<Message<'_>, WireError> {
    Message::decode(buf)
}
