//! Wire codec for the single-question, single-answer messages this server
//! exchanges.
//!
//! Decoding reads the header and the first question of a query. Encoding
//! writes header, question and answer back to back. The two are not inverse:
//! any answer section in a received message is ignored and replaced by a
//! default record, so `encode(decode(bytes))` generally differs from `bytes`.

pub mod header;
pub mod name;
pub mod question;
pub mod resource_record;
pub mod wire;

pub use header::Header;
pub use name::{encode_domains, encode_name, name_to_string};
pub use question::Question;
pub use resource_record::ResourceRecord;
pub use wire::WireReader;

use crate::DomainError;
use header::HEADER_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub question: Question,
    pub answer: ResourceRecord,
}

impl Message {
    pub fn wire_len(&self) -> usize {
        HEADER_LEN + self.question.wire_len() + self.answer.wire_len()
    }

    /// Header, question and answer, in that order, with no padding.
    ///
    /// The counts in `header` are written as stored; setting them to match
    /// the sections is the caller's job.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        self.header.write_to(&mut out);
        self.question.write_to(&mut out);
        self.answer.write_to(&mut out);
        out
    }

    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        let header = Header::from_bytes(buf)?;
        let mut reader = WireReader::at(buf, HEADER_LEN);
        let question = Question::read(&mut reader)?;

        tracing::trace!(
            id = header.id,
            flags = header.flags,
            consumed = reader.position(),
            len = buf.len(),
            "Decoded message"
        );

        Ok(Self {
            header,
            question,
            answer: ResourceRecord::default(),
        })
    }
}
