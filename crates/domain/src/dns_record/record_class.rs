use std::fmt;
use std::str::FromStr;

/// CLASS values from RFC 1035 §3.2.4. Unlisted codes round-trip as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordClass {
    #[default]
    IN,
    CS,
    CH,
    HS,

    Unknown(u16),
}

impl RecordClass {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            RecordClass::IN => Some("IN"),
            RecordClass::CS => Some("CS"),
            RecordClass::CH => Some("CH"),
            RecordClass::HS => Some("HS"),
            RecordClass::Unknown(_) => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            2 => RecordClass::CS,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            other => RecordClass::Unknown(other),
        }
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        RecordClass::from_u16(code)
    }
}

impl From<RecordClass> for u16 {
    fn from(class: RecordClass) -> Self {
        class.to_u16()
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "CLASS{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "IN" => Ok(RecordClass::IN),
            "CS" => Ok(RecordClass::CS),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            _ => upper
                .strip_prefix("CLASS")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordClass::from_u16)
                .ok_or_else(|| format!("Unknown record class: {}", s)),
        }
    }
}
