use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("RDLENGTH {declared} does not match RDATA length {actual}")]
    RdataLengthMismatch { declared: u16, actual: usize },

    #[error("RDATA of {0} bytes exceeds the 65535 byte limit")]
    RdataTooLong(usize),

    #[error("Negative TTL: {0}")]
    NegativeTtl(i32),

    #[error("A name field holds one domain, got {0}")]
    MultipleDomainsInName(usize),
}

impl DomainError {
    pub(crate) fn truncated(what: &str, offset: usize, needed: usize, len: usize) -> Self {
        DomainError::MalformedMessage(format!(
            "{} at offset {} needs {} bytes, buffer has {}",
            what, offset, needed, len
        ))
    }
}
