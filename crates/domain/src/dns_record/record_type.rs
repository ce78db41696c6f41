use std::fmt;
use std::str::FromStr;

/// Resource record TYPE values from RFC 1035 §3.2.2.
///
/// Codes outside the table are kept as [`RecordType::Unknown`] so that a
/// question can be echoed back with exactly the value the client sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,

    Unknown(u16),
}

impl RecordType {
    /// Mnemonic for known types, `None` for [`RecordType::Unknown`].
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            RecordType::A => Some("A"),
            RecordType::NS => Some("NS"),
            RecordType::MD => Some("MD"),
            RecordType::MF => Some("MF"),
            RecordType::CNAME => Some("CNAME"),
            RecordType::SOA => Some("SOA"),
            RecordType::MB => Some("MB"),
            RecordType::MG => Some("MG"),
            RecordType::MR => Some("MR"),
            RecordType::NULL => Some("NULL"),
            RecordType::WKS => Some("WKS"),
            RecordType::PTR => Some("PTR"),
            RecordType::HINFO => Some("HINFO"),
            RecordType::MINFO => Some("MINFO"),
            RecordType::MX => Some("MX"),
            RecordType::TXT => Some("TXT"),
            RecordType::Unknown(_) => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            3 => RecordType::MD,
            4 => RecordType::MF,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            7 => RecordType::MB,
            8 => RecordType::MG,
            9 => RecordType::MR,
            10 => RecordType::NULL,
            11 => RecordType::WKS,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            14 => RecordType::MINFO,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Unknown(_))
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType::from_u16(code)
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        record_type.to_u16()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "MD" => Ok(RecordType::MD),
            "MF" => Ok(RecordType::MF),
            "CNAME" => Ok(RecordType::CNAME),
            "SOA" => Ok(RecordType::SOA),
            "MB" => Ok(RecordType::MB),
            "MG" => Ok(RecordType::MG),
            "MR" => Ok(RecordType::MR),
            "NULL" => Ok(RecordType::NULL),
            "WKS" => Ok(RecordType::WKS),
            "PTR" => Ok(RecordType::PTR),
            "HINFO" => Ok(RecordType::HINFO),
            "MINFO" => Ok(RecordType::MINFO),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            _ => upper
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_u16)
                .ok_or_else(|| format!("Unknown record type: {}", s)),
        }
    }
}
