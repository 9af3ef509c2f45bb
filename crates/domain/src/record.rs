use crate::name::DomainName;
use std::fmt;
use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;
pub const TYPE_OPT: u16 = 41;

/// The rclass of the standard OPT pseudo-record doubles as the advertised
/// UDP payload size.
const OPT_PAYLOAD_SIZE: u16 = 512;

/// Record payload. A/IN data is kept as a parsed address (four octets on
/// the wire, dotted quad in text); anything else is carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    Ipv4(Ipv4Addr),
    Opaque(Vec<u8>),
}

impl RData {
    /// Serialized length in bytes; always equals the record's `rdlength`.
    pub fn wire_len(&self) -> usize {
        match self {
            RData::Ipv4(_) => 4,
            RData::Opaque(bytes) => bytes.len(),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::Ipv4(addr) => write!(f, "{}", addr),
            RData::Opaque(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
        }
    }
}

/// A resource record from any of the answer, authority, or additional
/// sections, stamped with its decode time so TTL expiry can be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdata: RData,
    /// Seconds since the Unix epoch at which this record was decoded.
    pub created_at: u64,
}

impl ResourceRecord {
    pub fn new(
        name: DomainName,
        rtype: u16,
        rclass: u16,
        ttl: u32,
        rdata: RData,
        created_at: u64,
    ) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
            created_at,
        }
    }

    /// The OPT pseudo-record included in the additional section of every
    /// synthesized response, matching the envelope of a typical upstream.
    pub fn standard_additional(created_at: u64) -> Self {
        Self {
            name: DomainName::root(),
            rtype: TYPE_OPT,
            rclass: OPT_PAYLOAD_SIZE,
            ttl: 0,
            rdata: RData::Opaque(Vec::new()),
            created_at,
        }
    }

    pub fn rdlength(&self) -> u16 {
        self.rdata.wire_len() as u16
    }

    /// A record is fresh at `now` while strictly less than `ttl` seconds
    /// have elapsed since it was decoded.
    pub fn is_fresh(&self, now: u64) -> bool {
        now < self.created_at + u64::from(self.ttl)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rtype={} rclass={} ttl={} rdlength={} rdata={}",
            self.name,
            self.rtype,
            self.rclass,
            self.ttl,
            self.rdlength(),
            self.rdata
        )
    }
}
