use super::name::{decode_name, encode_name, CompressionMap};
use super::reader::WireReader;
use argent_dns_domain::{DomainError, RData, ResourceRecord, CLASS_IN, TYPE_A};
use std::net::Ipv4Addr;

/// Decodes one resource record, stamping it with `now` so the cache can
/// check TTL expiry later. A/IN rdata of the expected four bytes is parsed
/// into an address; any other payload is kept opaque.
pub fn decode_record(
    reader: &mut WireReader<'_>,
    datagram: &[u8],
    now: u64,
) -> Result<ResourceRecord, DomainError> {
    let name = decode_name(reader, datagram)?;
    let rtype = reader.read_u16()?;
    let rclass = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()?;

    let rdata = if rtype == TYPE_A && rclass == CLASS_IN && rdlength == 4 {
        let octets = reader.take(4)?;
        RData::Ipv4(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
    } else {
        RData::Opaque(reader.take(usize::from(rdlength))?.to_vec())
    };

    Ok(ResourceRecord::new(name, rtype, rclass, ttl, rdata, now))
}

pub fn encode_record(record: &ResourceRecord, out: &mut Vec<u8>, seen: &mut CompressionMap) {
    encode_name(&record.name, out, seen);
    out.extend_from_slice(&record.rtype.to_be_bytes());
    out.extend_from_slice(&record.rclass.to_be_bytes());
    out.extend_from_slice(&record.ttl.to_be_bytes());
    out.extend_from_slice(&record.rdlength().to_be_bytes());
    match &record.rdata {
        RData::Ipv4(addr) => out.extend_from_slice(&addr.octets()),
        RData::Opaque(bytes) => out.extend_from_slice(bytes),
    }
}
