use super::header::{decode_header, encode_header};
use super::name::CompressionMap;
use super::question::{decode_question, encode_question};
use super::reader::WireReader;
use super::record::{decode_record, encode_record};
use argent_dns_domain::{DomainError, Header, Message, ResourceRecord};

/// Decodes a full datagram: header, then QDCOUNT questions, ANCOUNT
/// answers, NSCOUNT authority records, and ARCOUNT additional records in
/// that order. The input bytes are retained on the message so compression
/// pointers can be resolved against them, and so an NXDOMAIN reply can be
/// forwarded verbatim. Records are stamped with `now`.
pub fn decode_message(datagram: &[u8], now: u64) -> Result<Message, DomainError> {
    let mut reader = WireReader::new(datagram);
    let header = decode_header(&mut reader)?;

    let mut questions = Vec::with_capacity(usize::from(header.qdcount));
    for _ in 0..header.qdcount {
        questions.push(decode_question(&mut reader, datagram)?);
    }

    let mut answers = Vec::with_capacity(usize::from(header.ancount));
    for _ in 0..header.ancount {
        answers.push(decode_record(&mut reader, datagram, now)?);
    }

    let mut authority = Vec::with_capacity(usize::from(header.nscount));
    for _ in 0..header.nscount {
        authority.push(decode_record(&mut reader, datagram, now)?);
    }

    let mut additional = Vec::with_capacity(usize::from(header.arcount));
    for _ in 0..header.arcount {
        additional.push(decode_record(&mut reader, datagram, now)?);
    }

    Ok(Message {
        wire: datagram.to_vec(),
        header,
        questions,
        answers,
        authority,
        additional,
    })
}

/// Serializes a message, sharing one compression table across every name
/// in all four sections so cross-section suffixes compress.
pub fn encode_message(message: &Message) -> Vec<u8> {
    let mut out = Vec::with_capacity(512);
    let mut seen = CompressionMap::new();

    encode_header(&message.header, &mut out);
    for question in &message.questions {
        encode_question(question, &mut out, &mut seen);
    }
    for record in &message.answers {
        encode_record(record, &mut out, &mut seen);
    }
    for record in &message.authority {
        encode_record(record, &mut out, &mut seen);
    }
    for record in &message.additional {
        encode_record(record, &mut out, &mut seen);
    }
    out
}

/// Builds the response we synthesize for an answered query: our standard
/// response header, the request's question section, the given answers, an
/// empty authority section, and the standard OPT additional record. The
/// wire bytes are computed eagerly.
pub fn build_response(request: &Message, answers: Vec<ResourceRecord>, now: u64) -> Message {
    let mut response = Message {
        wire: Vec::new(),
        header: Header::response_to(&request.header),
        questions: request.questions.clone(),
        answers,
        authority: Vec::new(),
        additional: vec![ResourceRecord::standard_additional(now)],
    };
    response.wire = encode_message(&response);
    response
}
