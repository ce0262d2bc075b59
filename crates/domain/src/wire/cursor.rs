//! Bounds-checked cursors over a DNS message buffer.
//!
//! Every sub-codec reads and writes through these types so that no field is
//! ever accessed past the end of the buffer. A failed read or write leaves the
//! cursor where it was.

use super::WireError;

/// Read cursor over a received message.
///
/// Slices handed out by [`WireReader::read_slice`] borrow from the underlying
/// buffer, so they cannot outlive it.
#[derive(Debug, Clone, Copy)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Cursor positioned at an absolute offset of `buf`.
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(WireError::Truncated {
                offset: self.pos,
                needed: needed - remaining,
            });
        }
        Ok(())
    }

    pub fn peek_u8(&self) -> Result<u8, WireError> {
        self.ensure(1)?;
        Ok(self.buf[self.pos])
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let value = self.peek_u8()?;
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        self.ensure(2)?;
        let value = u16::from_be_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.ensure(4)?;
        let value = u32::from_be_bytes([
            self.buf[self.pos],
            self.buf[self.pos + 1],
            self.buf[self.pos + 2],
            self.buf[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(value)
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        self.read_u32().map(|v| v as i32)
    }

    /// Borrows the next `len` bytes without copying them.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.ensure(len)?;
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), WireError> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }
}

/// Write cursor over a caller-owned, fixed-size buffer.
#[derive(Debug)]
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), WireError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        let remaining = self.remaining();
        if remaining < bytes.len() {
            return Err(WireError::Truncated {
                offset: self.pos,
                needed: bytes.len() - remaining,
            });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}
