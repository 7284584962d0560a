use core::{fmt, str::FromStr};
use thiserror::Error;

pub const MAC_LEN: usize = 6;

/// Hardware address of an ESP-NOW node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddress(pub [u8; MAC_LEN]);

impl MacAddress {
    /// All-zero address shipped as the default receiver before configuration.
    pub const PLACEHOLDER: MacAddress = MacAddress([0; MAC_LEN]);
    pub const BROADCAST: MacAddress = MacAddress([0xFF; MAC_LEN]);

    pub const fn new(octets: [u8; MAC_LEN]) -> Self {
        return Self(octets);
    }

    pub fn is_placeholder(&self) -> bool {
        return self.0 == Self::PLACEHOLDER.0;
    }

    pub fn octets(&self) -> &[u8; MAC_LEN] {
        return &self.0;
    }
}

impl From<[u8; MAC_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_LEN]) -> Self {
        return Self(octets);
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{octet:02X}")?;
        }
        return Ok(());
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "MacAddress({self})");
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MacParseError {
    #[error("expected 6 octets, found {0}")]
    OctetCount(usize),
    #[error("octet {0} is not a two digit hex number")]
    InvalidOctet(usize),
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    /// Parses `AA:BB:CC:DD:EE:FF`. Dashes are accepted as separators too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; MAC_LEN];
        let mut count = 0;
        for (i, part) in s.trim().split(|c| c == ':' || c == '-').enumerate() {
            if i >= MAC_LEN {
                count = i + 1;
                continue;
            }
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(MacParseError::InvalidOctet(i));
            }
            octets[i] = u8::from_str_radix(part, 16).map_err(|_| MacParseError::InvalidOctet(i))?;
            count = i + 1;
        }
        if count != MAC_LEN {
            return Err(MacParseError::OctetCount(count));
        }
        return Ok(Self(octets));
    }
}
