//! # Octet Model
//!
//! The four bytes of an IPv4 address together with their decimal, hexadecimal
//! and octal renderings. The renderings are computed once, at construction,
//! so the generators in [`crate::variants`] only ever concatenate.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::catalogue::Variant;
use crate::error::InvalidAddress;

pub const HEX_PREFIX: &str = "0x";

/// Immutable per-address state shared by every variant generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OctetModel {
    raw: [u8; 4],
    dec: [String; 4],
    hex: [String; 4],
    oct: [String; 4],
}

/// Builds the model from an optional address.
///
/// An IPv6 address is accepted only when it is IPv4-mapped (`::ffff:a.b.c.d`).
pub fn build(address: Option<IpAddr>) -> Result<OctetModel, InvalidAddress> {
    address.ok_or(InvalidAddress::Missing)?.try_into()
}

impl OctetModel {
    pub fn new(addr: Ipv4Addr) -> Self {
        let raw: [u8; 4] = addr.octets();
        trace!("precomputing octet strings for {addr}");

        Self {
            raw,
            dec: raw.map(|octet| octet.to_string()),
            hex: raw.map(|octet| format!("{HEX_PREFIX}{octet:x}")),
            oct: raw.map(|octet| format!("{octet:o}")),
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.raw)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.raw
    }

    pub fn octet(&self, i: usize) -> u8 {
        self.raw[i]
    }

    /// Base-10 digits, `"0"` for zero.
    pub fn decimal(&self, i: usize) -> &str {
        &self.dec[i]
    }

    /// `0x` followed by the minimal lowercase hex digits.
    pub fn hex(&self, i: usize) -> &str {
        &self.hex[i]
    }

    /// Hex digits of octet `i` without the `0x` prefix.
    pub fn hex_digits(&self, i: usize) -> &str {
        &self.hex[i][HEX_PREFIX.len()..]
    }

    /// Base-8 digits with no leading zero, `"0"` for zero.
    pub fn octal(&self, i: usize) -> &str {
        &self.oct[i]
    }

    pub fn decimals(&self) -> &[String; 4] {
        &self.dec
    }

    pub fn hexes(&self) -> &[String; 4] {
        &self.hex
    }

    pub fn octals(&self) -> &[String; 4] {
        &self.oct
    }

    /// Renders `variant` using the process-wide randomness source.
    pub fn render(&self, variant: Variant) -> String {
        variant.render(self)
    }
}

impl fmt::Display for OctetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dec.join("."))
    }
}

impl From<Ipv4Addr> for OctetModel {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl From<[u8; 4]> for OctetModel {
    fn from(octets: [u8; 4]) -> Self {
        Self::new(Ipv4Addr::from(octets))
    }
}

impl TryFrom<IpAddr> for OctetModel {
    type Error = InvalidAddress;

    fn try_from(addr: IpAddr) -> Result<Self, Self::Error> {
        match addr {
            IpAddr::V4(v4) => Ok(Self::new(v4)),
            IpAddr::V6(v6) => {
                let v4 = v6.to_ipv4_mapped().ok_or(InvalidAddress::NotIpv4(v6))?;
                debug!("reduced IPv4-mapped {v6} to {v4}");
                Ok(Self::new(v4))
            }
        }
    }
}

impl FromStr for OctetModel {
    type Err = InvalidAddress;

    /// Parses an IPv4 or IPv4-mapped IPv6 literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(InvalidAddress::Missing);
        }

        let addr: IpAddr = s.parse().map_err(|source| InvalidAddress::Malformed {
            literal: s.to_string(),
            source,
        })?;

        addr.try_into()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
