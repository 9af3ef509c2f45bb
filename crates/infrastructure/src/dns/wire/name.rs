use super::reader::WireReader;
use argent_dns_domain::{DomainError, DomainName};
use std::collections::HashMap;

/// Top two bits set marks a two-byte compression pointer; the remaining
/// 14 bits are a byte offset into the datagram.
const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Cap on pointer chasing so adversarial pointer cycles cannot loop the
/// decoder.
const MAX_POINTER_HOPS: usize = 10;

/// Compression state for one message encode: the output offset of every
/// name suffix written so far, keyed by the suffix's text form. Shared
/// across all sections of a message and discarded afterwards.
pub type CompressionMap = HashMap<String, u16>;

/// Decodes a name at the reader's position. On a compression pointer the
/// decoder re-opens the datagram at the pointed offset and resumes label
/// reading there; the original reader ends up positioned just past the
/// pointer's second byte.
pub fn decode_name(
    reader: &mut WireReader<'_>,
    datagram: &[u8],
) -> Result<DomainName, DomainError> {
    let mut labels = Vec::new();
    read_labels(reader, datagram, &mut labels, 0)?;
    DomainName::from_labels(labels)
}

fn read_labels(
    reader: &mut WireReader<'_>,
    datagram: &[u8],
    labels: &mut Vec<String>,
    hops: usize,
) -> Result<(), DomainError> {
    loop {
        let length = reader.read_u8()?;

        // A zero length terminates the label sequence.
        if length == 0 {
            return Ok(());
        }

        if length & POINTER_TAG == POINTER_TAG {
            if hops >= MAX_POINTER_HOPS {
                return Err(DomainError::MalformedMessage(format!(
                    "name compression exceeds {} pointer hops",
                    MAX_POINTER_HOPS
                )));
            }
            let second = reader.read_u8()?;
            let offset =
                usize::from((u16::from(length) << 8 | u16::from(second)) & POINTER_OFFSET_MASK);
            if offset >= datagram.len() {
                return Err(DomainError::MalformedMessage(format!(
                    "compression pointer to offset {} outside datagram of {} bytes",
                    offset,
                    datagram.len()
                )));
            }
            // The rest of the name lives at the pointed offset; the caller's
            // cursor stays where it is.
            let mut jumped = WireReader::at(datagram, offset);
            return read_labels(&mut jumped, datagram, labels, hops + 1);
        }

        if length & POINTER_TAG != 0 {
            return Err(DomainError::MalformedMessage(format!(
                "unsupported label type {:#04x}",
                length
            )));
        }

        let bytes = reader.take(usize::from(length))?;
        let label = String::from_utf8(bytes.to_vec()).map_err(|_| {
            DomainError::MalformedMessage("label is not valid UTF-8".to_string())
        })?;
        labels.push(label);
    }
}

/// Encodes a name with tail-keyed compression: each remaining suffix is
/// looked up in `seen` and emitted as a pointer when already written,
/// otherwise recorded at the current output offset and written literally.
/// Every suffix of every encoded name thus becomes a potential pointer
/// target.
pub fn encode_name(name: &DomainName, out: &mut Vec<u8>, seen: &mut CompressionMap) {
    let labels = name.labels();
    for i in 0..labels.len() {
        let tail = labels[i..].join(".");
        if let Some(&offset) = seen.get(&tail) {
            let pointer = 0xC000 | (offset & POINTER_OFFSET_MASK);
            out.extend_from_slice(&pointer.to_be_bytes());
            return;
        }
        // Offsets beyond the 14-bit pointer range cannot be targets.
        if out.len() <= usize::from(POINTER_OFFSET_MASK) {
            seen.insert(tail, out.len() as u16);
        }
        out.push(labels[i].len() as u8);
        out.extend_from_slice(labels[i].as_bytes());
    }
    out.push(0);
}
