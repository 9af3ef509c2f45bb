use std::fmt;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_NXDOMAIN: u8 = 3;

/// The fixed 12-byte DNS message header (RFC 1035 §4.1.1).
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA| Z|AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    QDCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ANCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    NSCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ARCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: bool,
    pub ad: bool,
    pub cd: bool,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Header for a response we synthesize ourselves. `id` and `qdcount`
    /// are copied from the request; the rest mirrors the envelope a typical
    /// upstream recursive resolver returns: one answer, one additional
    /// (OPT) record, recursion desired and available, authenticated data.
    pub fn response_to(request: &Header) -> Self {
        Self {
            id: request.id,
            qr: true,
            opcode: 0,
            aa: false,
            tc: false,
            rd: true,
            ra: true,
            z: false,
            ad: true,
            cd: false,
            rcode: RCODE_NOERROR,
            qdcount: request.qdcount,
            ancount: 1,
            nscount: 0,
            arcount: 1,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={:#06x} qr={} opcode={} aa={} tc={} rd={} ra={} z={} ad={} cd={} rcode={} \
             qd={} an={} ns={} ar={}",
            self.id,
            self.qr as u8,
            self.opcode,
            self.aa as u8,
            self.tc as u8,
            self.rd as u8,
            self.ra as u8,
            self.z as u8,
            self.ad as u8,
            self.cd as u8,
            self.rcode,
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount
        )
    }
}
