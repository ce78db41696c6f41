use super::wire::WireReader;
use crate::DomainError;
use bytes::BufMut;

pub const HEADER_LEN: usize = 12;

pub const FLAG_QR: u16 = 0x8000;
pub const FLAG_OPCODE: u16 = 0x7800;
pub const FLAG_RD: u16 = 0x0100;
pub const FLAG_RCODE: u16 = 0x000F;

pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

/// The fixed twelve byte message header (RFC 1035 §4.1.1).
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    QDCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ANCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    NSCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ARCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// `flags` is stored as the raw word; the accessors below only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Default for Header {
    /// Scaffold value for a response before it is derived from a request.
    fn default() -> Self {
        Self {
            id: 1234,
            flags: FLAG_QR,
            qdcount: 0,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }
}

impl Header {
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        self.write_to(&mut &mut out[..]);
        out
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16(self.id);
        buf.put_u16(self.flags);
        buf.put_u16(self.qdcount);
        buf.put_u16(self.ancount);
        buf.put_u16(self.nscount);
        buf.put_u16(self.arcount);
    }

    /// Parses the first twelve bytes of `buf`.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::MalformedMessage(format!(
                "header needs {} bytes, buffer has {}",
                HEADER_LEN,
                buf.len()
            )));
        }
        Self::read(&mut WireReader::new(buf))
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        Ok(Self {
            id: reader.read_u16("header ID")?,
            flags: reader.read_u16("header FLAGS")?,
            qdcount: reader.read_u16("header QDCOUNT")?,
            ancount: reader.read_u16("header ANCOUNT")?,
            nscount: reader.read_u16("header NSCOUNT")?,
            arcount: reader.read_u16("header ARCOUNT")?,
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & FLAG_OPCODE) >> 11) as u8
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & FLAG_RCODE) as u8
    }
}
