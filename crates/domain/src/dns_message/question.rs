use super::name::name_to_string;
use super::wire::WireReader;
use crate::{DomainError, RecordClass, RecordType};
use bytes::BufMut;

/// A question entry: wire-encoded name, QTYPE and QCLASS.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question {
    /// Label sequence including the terminating zero byte.
    pub name: Vec<u8>,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: Vec<u8>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name,
            record_type,
            class,
        }
    }

    pub fn wire_len(&self) -> usize {
        self.name.len() + 4
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        self.write_to(&mut out);
        out
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.name);
        buf.put_u16(self.record_type.to_u16());
        buf.put_u16(self.class.to_u16());
    }

    /// Parses a question starting at `offset`.
    ///
    /// Returns the question and the number of bytes it occupied.
    pub fn from_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let mut reader = WireReader::at(buf, offset);
        let question = Self::read(&mut reader)?;
        Ok((question, reader.position() - offset))
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = reader.read_name()?.to_vec();
        let record_type = RecordType::from_u16(reader.read_u16("question TYPE")?);
        let class = RecordClass::from_u16(reader.read_u16("question CLASS")?);
        Ok(Self {
            name,
            record_type,
            class,
        })
    }

    /// Dotted form of the name, for logging.
    pub fn domain(&self) -> String {
        name_to_string(&self.name)
    }
}
