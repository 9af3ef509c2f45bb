//! DNS wire-format codec (RFC 1035 §4.1)
//!
//! Messages mix bit-packed flags, big-endian integers, length-prefixed
//! labels, and back-pointer name compression. Decoding therefore works on
//! a positioned cursor over the datagram plus the full datagram slice, so
//! the name decoder can open a second cursor at a pointer target without
//! disturbing the sequential read. Encoding shares one compression table
//! across every name written into a message.

pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod reader;
pub mod record;

pub use message::{build_response, decode_message, encode_message};
pub use name::CompressionMap;
pub use reader::WireReader;
