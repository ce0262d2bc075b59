//! Header flag bitmasks (RFC 1035 §4.1.1).
//!
//! The codec treats `flags` as an opaque `u16`; these constants and helpers
//! are for the layers that build queries and inspect responses.

use crate::ResponseCode;

pub const QR: u16 = 0x1 << 15;
pub const OPCODE_QUERY: u16 = 0x0;
pub const TC: u16 = 0x1 << 9;
pub const RD: u16 = 0x1 << 8;
pub const RA: u16 = 0x1 << 7;

pub const RCODE_MASK: u16 = 0x000F;
pub const RCODE_NAME: u16 = 0x3;

pub fn is_response(flags: u16) -> bool {
    flags & QR != 0
}

pub fn is_truncated(flags: u16) -> bool {
    flags & TC != 0
}

pub fn rcode(flags: u16) -> ResponseCode {
    ResponseCode::from_u8((flags & RCODE_MASK) as u8)
}
