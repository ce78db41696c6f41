use crate::DomainError;

/// Forward-only reader over a received datagram.
///
/// Every read checks the remaining length first and fails with
/// [`DomainError::MalformedMessage`] instead of indexing past the end.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_u16(&mut self, what: &str) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2, what)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_bytes(&mut self, len: usize, what: &str) -> Result<&'a [u8], DomainError> {
        if self.remaining() < len {
            return Err(DomainError::truncated(what, self.pos, len, self.buf.len()));
        }
        let buf = self.buf;
        let start = self.pos;
        self.pos += len;
        Ok(&buf[start..self.pos])
    }

    /// Reads up to and including the first zero byte.
    ///
    /// This is a flat scan, not a label walk: length prefixes are copied like
    /// any other byte. It is correct for uncompressed names whose labels hold
    /// no zero bytes, which is all this codec accepts.
    pub fn read_name(&mut self) -> Result<&'a [u8], DomainError> {
        let rest = self.buf.get(self.pos..).unwrap_or_default();
        match rest.iter().position(|&b| b == 0) {
            Some(zero) => self.read_bytes(zero + 1, "name"),
            None => Err(DomainError::MalformedMessage(format!(
                "name starting at offset {} has no terminator before end of buffer ({} bytes)",
                self.pos,
                self.buf.len()
            ))),
        }
    }
}
