use crate::{DomainError, RecordClass, RecordType};
use bytes::BufMut;
use std::net::Ipv4Addr;

/// A resource record as written in the answer section.
///
/// RDLENGTH is not a free field: it is derived from `rdata` when the record
/// is built, so an encoded record always describes its own payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Vec<u8>,
    pub record_type: RecordType,
    pub class: RecordClass,
    ttl: i32,
    rdata: Vec<u8>,
}

/// Bytes between the name and RDATA: TYPE, CLASS, TTL and RDLENGTH.
pub const RR_FIXED_LEN: usize = 10;

impl Default for ResourceRecord {
    fn default() -> Self {
        Self {
            name: Vec::new(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl: 60,
            rdata: Vec::new(),
        }
    }
}

impl ResourceRecord {
    pub fn new(
        name: Vec<u8>,
        record_type: RecordType,
        class: RecordClass,
        ttl: i32,
        rdata: Vec<u8>,
    ) -> Result<Self, DomainError> {
        if ttl < 0 {
            return Err(DomainError::NegativeTtl(ttl));
        }
        if rdata.len() > u16::MAX as usize {
            return Err(DomainError::RdataTooLong(rdata.len()));
        }
        Ok(Self {
            name,
            record_type,
            class,
            ttl,
            rdata,
        })
    }

    /// Builds a record from an explicit RDLENGTH, rejecting any value that
    /// disagrees with the payload.
    pub fn with_rdlength(
        name: Vec<u8>,
        record_type: RecordType,
        class: RecordClass,
        ttl: i32,
        rdlength: u16,
        rdata: Vec<u8>,
    ) -> Result<Self, DomainError> {
        if rdlength as usize != rdata.len() {
            return Err(DomainError::RdataLengthMismatch {
                declared: rdlength,
                actual: rdata.len(),
            });
        }
        Self::new(name, record_type, class, ttl, rdata)
    }

    /// Replaces RDATA with the four octets of `address`.
    pub fn with_ipv4(mut self, address: Ipv4Addr) -> Self {
        self.rdata = address.octets().to_vec();
        self
    }

    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    pub fn rdata(&self) -> &[u8] {
        &self.rdata
    }

    pub fn rdlength(&self) -> u16 {
        // new() caps rdata at u16::MAX
        self.rdata.len() as u16
    }

    pub fn wire_len(&self) -> usize {
        self.name.len() + RR_FIXED_LEN + self.rdata.len()
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
        buf.put_i32(self.ttl);
        buf.put_u16(self.rdlength());
        buf.put_slice(&self.rdata);
    }
}
