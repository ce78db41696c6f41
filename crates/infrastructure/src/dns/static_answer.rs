use loopdns_application::ports::AnswerResolver;
use loopdns_domain::config::AnswerConfig;
use loopdns_domain::{DomainError, Question, RecordClass, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

/// Answers every question with the same IPv4 address, whatever the name,
/// type or class asked for. The record echoes the question's name, type and
/// class; RDATA is always the four address octets.
#[derive(Debug, Clone)]
pub struct StaticAnswerResolver {
    address: Ipv4Addr,
    // ttl checked once; resolve() only swaps name, type and class
    template: ResourceRecord,
}

impl StaticAnswerResolver {
    pub fn new(address: Ipv4Addr, ttl: i32) -> Result<Self, DomainError> {
        let template = ResourceRecord::new(
            Vec::new(),
            RecordType::A,
            RecordClass::IN,
            ttl,
            address.octets().to_vec(),
        )?;
        Ok(Self { address, template })
    }

    pub fn from_config(config: &AnswerConfig) -> Result<Self, DomainError> {
        Self::new(config.address, config.ttl)
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn ttl(&self) -> i32 {
        self.template.ttl()
    }
}

impl Default for StaticAnswerResolver {
    fn default() -> Self {
        let address = Ipv4Addr::LOCALHOST;
        Self {
            address,
            template: ResourceRecord::default().with_ipv4(address),
        }
    }
}

impl AnswerResolver for StaticAnswerResolver {
    fn resolve(&self, question: &Question) -> ResourceRecord {
        let mut record = self.template.clone();
        record.name = question.name.clone();
        record.record_type = question.record_type;
        record.class = question.class;
        record
    }
}
