// ABOUTME: Kind-scoped container serial numbers in the KON-<code>-<n> format.
// ABOUTME: Parsing and validation for the external string form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

const SERIAL_PREFIX: &str = "KON";

#[derive(Debug, Error)]
pub enum SerialNumberError {
    #[error("serial number cannot be empty")]
    Empty,

    #[error("serial number must start with '{SERIAL_PREFIX}-'")]
    BadPrefix,

    #[error("unknown kind code: '{0}'")]
    UnknownKindCode(String),

    #[error("invalid sequence number: '{0}'")]
    InvalidSequence(String),

    #[error("sequence numbers start at 1")]
    ZeroSequence,
}

/// One-letter kind code embedded in every serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCode {
    /// Liquid cargo ("L").
    Liquid,
    /// Gas cargo ("G").
    Gas,
    /// Refrigerated cargo ("C").
    Refrigerated,
}

impl KindCode {
    pub fn as_str(self) -> &'static str {
        match self {
            KindCode::Liquid => "L",
            KindCode::Gas => "G",
            KindCode::Refrigerated => "C",
        }
    }

    fn parse(s: &str) -> Result<Self, SerialNumberError> {
        match s {
            "L" => Ok(KindCode::Liquid),
            "G" => Ok(KindCode::Gas),
            "C" => Ok(KindCode::Refrigerated),
            other => Err(SerialNumberError::UnknownKindCode(other.to_string())),
        }
    }
}

impl fmt::Display for KindCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique container identity, e.g. `KON-G-7`.
///
/// Serials are scoped to a kind and strictly increasing in creation order.
/// The string form is the sole identity handle used for lookup and removal,
/// so serde round-trips through it losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialNumber {
    code: KindCode,
    seq: u64,
}

impl SerialNumber {
    /// Build a serial from its parts. Sequence numbers start at 1.
    pub(crate) fn new(code: KindCode, seq: u64) -> Self {
        debug_assert!(seq >= 1, "sequence numbers start at 1");
        Self { code, seq }
    }

    /// Parse the external `KON-<code>-<n>` string form.
    pub fn parse(input: &str) -> Result<Self, SerialNumberError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SerialNumberError::Empty);
        }

        let mut parts = input.splitn(3, '-');
        let prefix = parts.next().unwrap_or_default();
        if prefix != SERIAL_PREFIX {
            return Err(SerialNumberError::BadPrefix);
        }

        let code = match parts.next() {
            Some(code) => KindCode::parse(code)?,
            None => return Err(SerialNumberError::BadPrefix),
        };

        let seq_str = parts.next().unwrap_or_default();
        let seq: u64 = seq_str
            .parse()
            .map_err(|_| SerialNumberError::InvalidSequence(seq_str.to_string()))?;
        if seq == 0 {
            return Err(SerialNumberError::ZeroSequence);
        }

        Ok(Self { code, seq })
    }

    pub fn code(&self) -> KindCode {
        self.code
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SERIAL_PREFIX}-{}-{}", self.code, self.seq)
    }
}

impl Serialize for SerialNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SerialNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        SerialNumber::parse(&value).map_err(serde::de::Error::custom)
    }
}
