use super::reader::WireReader;
use argent_dns_domain::{DomainError, Header};

/// Decodes the fixed 12-byte header. Byte 2 packs QR/OPCODE/AA/TC/RD,
/// byte 3 packs RA/Z/AD/CD/RCODE, MSB first.
pub fn decode_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    let id = reader.read_u16()?;

    let byte2 = reader.read_u8()?;
    let qr = byte2 & 0x80 != 0;
    let opcode = (byte2 & 0x78) >> 3;
    let aa = byte2 & 0x04 != 0;
    let tc = byte2 & 0x02 != 0;
    let rd = byte2 & 0x01 != 0;

    let byte3 = reader.read_u8()?;
    let ra = byte3 & 0x80 != 0;
    let z = byte3 & 0x40 != 0;
    let ad = byte3 & 0x20 != 0;
    let cd = byte3 & 0x10 != 0;
    let rcode = byte3 & 0x0F;

    let qdcount = reader.read_u16()?;
    let ancount = reader.read_u16()?;
    let nscount = reader.read_u16()?;
    let arcount = reader.read_u16()?;

    Ok(Header {
        id,
        qr,
        opcode,
        aa,
        tc,
        rd,
        ra,
        z,
        ad,
        cd,
        rcode,
        qdcount,
        ancount,
        nscount,
        arcount,
    })
}

/// Writes exactly 12 bytes, the inverse of `decode_header`.
pub fn encode_header(header: &Header, out: &mut Vec<u8>) {
    out.extend_from_slice(&header.id.to_be_bytes());

    let byte2 = (u8::from(header.qr) << 7)
        | ((header.opcode & 0x0F) << 3)
        | (u8::from(header.aa) << 2)
        | (u8::from(header.tc) << 1)
        | u8::from(header.rd);
    out.push(byte2);

    let byte3 = (u8::from(header.ra) << 7)
        | (u8::from(header.z) << 6)
        | (u8::from(header.ad) << 5)
        | (u8::from(header.cd) << 4)
        | (header.rcode & 0x0F);
    out.push(byte3);

    out.extend_from_slice(&header.qdcount.to_be_bytes());
    out.extend_from_slice(&header.ancount.to_be_bytes());
    out.extend_from_slice(&header.nscount.to_be_bytes());
    out.extend_from_slice(&header.arcount.to_be_bytes());
}
