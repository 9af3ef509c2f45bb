use super::name::{decode_name, encode_name, CompressionMap};
use super::reader::WireReader;
use argent_dns_domain::{DomainError, Question};

pub fn decode_question(
    reader: &mut WireReader<'_>,
    datagram: &[u8],
) -> Result<Question, DomainError> {
    let name = decode_name(reader, datagram)?;
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;
    Ok(Question::new(name, qtype, qclass))
}

pub fn encode_question(question: &Question, out: &mut Vec<u8>, seen: &mut CompressionMap) {
    encode_name(&question.name, out, seen);
    out.extend_from_slice(&question.qtype.to_be_bytes());
    out.extend_from_slice(&question.qclass.to_be_bytes());
}
