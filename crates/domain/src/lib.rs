//! loopdns domain layer: DNS wire types, codecs and configuration.
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{
    encode_domains, encode_name, name_to_string, Header, Message, Question, ResourceRecord,
};
pub use dns_record::{RecordClass, RecordType};
pub use errors::DomainError;
