#![allow(dead_code)]
use loopdns_domain::{encode_name, RecordClass, RecordType};

/// Builds raw query datagrams the way a stub resolver would send them.
pub struct QueryBytesBuilder {
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
    name: Vec<u8>,
    record_type: u16,
    class: u16,
    trailer: Vec<u8>,
}

impl QueryBytesBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x04D2,
            flags: 0x0100,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
            name: encode_name("example.com"),
            record_type: RecordType::A.to_u16(),
            class: RecordClass::IN.to_u16(),
            trailer: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.flags = (self.flags & !0x7800) | ((opcode as u16 & 0x0F) << 11);
        self
    }

    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.qdcount = qd;
        self.ancount = an;
        self.nscount = ns;
        self.arcount = ar;
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.name = encode_name(domain);
        self
    }

    pub fn raw_name(mut self, name: &[u8]) -> Self {
        self.name = name.to_vec();
        self
    }

    pub fn record_type(mut self, record_type: u16) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    /// Bytes appended after the question, e.g. an answer section.
    pub fn trailer(mut self, trailer: &[u8]) -> Self {
        self.trailer = trailer.to_vec();
        self
    }

    pub fn header_bytes(&self) -> Vec<u8> {
        [
            self.id,
            self.flags,
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount,
        ]
        .iter()
        .flat_map(|field| field.to_be_bytes())
        .collect()
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = self.header_bytes();
        out.extend_from_slice(&self.name);
        out.extend_from_slice(&self.record_type.to_be_bytes());
        out.extend_from_slice(&self.class.to_be_bytes());
        out.extend_from_slice(&self.trailer);
        out
    }
}
