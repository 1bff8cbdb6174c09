use std::net::{AddrParseError, Ipv6Addr};

use thiserror::Error;

/// Raised when an input cannot be reduced to a 4-byte IPv4 address.
///
/// This is the only failure of the engine: once an [`OctetModel`](crate::OctetModel)
/// exists, every generator succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAddress {
    #[error("no IP address provided")]
    Missing,

    #[error("invalid IP address literal '{literal}': {source}")]
    Malformed {
        literal: String,
        #[source]
        source: AddrParseError,
    },

    #[error("cannot convert {0} to an IPv4 address")]
    NotIpv4(Ipv6Addr),
}

/// A name that does not belong to the variant catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}'")]
pub struct UnknownVariant(pub String);
