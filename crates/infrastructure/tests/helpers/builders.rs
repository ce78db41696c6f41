#![allow(dead_code)]
use loopdns_domain::{encode_name, Header, Question, RecordClass, RecordType};

pub struct QueryBuilder {
    header: Header,
    question: Question,
}

impl QueryBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            header: Header {
                id: 0x04D2,
                flags: 0x0100,
                qdcount: 1,
                ancount: 0,
                nscount: 0,
                arcount: 0,
            },
            question: Question::new(encode_name(domain), RecordType::A, RecordClass::IN),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.header.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.header.flags = flags;
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.question.record_type = record_type;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = self.header.to_bytes().to_vec();
        bytes.extend(self.question.to_bytes());
        bytes
    }
}
