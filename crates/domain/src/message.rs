use crate::header::Header;
use crate::question::Question;
use crate::record::ResourceRecord;
use std::fmt;

/// A full DNS message: the header, the four sections, and the raw datagram
/// bytes it was decoded from (or encoded to).
///
/// The raw bytes are retained because name decompression needs random
/// access into the original datagram while a sequential decode is in
/// progress. The section counts in `header` always equal the section list
/// lengths.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub wire: Vec<u8>,
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Message {
    /// The first (and, for this resolver, only supported) question.
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "header: {}", self.header)?;
        writeln!(f, "questions({}):", self.questions.len())?;
        for question in &self.questions {
            writeln!(f, "  {}", question)?;
        }
        writeln!(f, "answers({}):", self.answers.len())?;
        for record in &self.answers {
            writeln!(f, "  {}", record)?;
        }
        writeln!(f, "authority({}):", self.authority.len())?;
        for record in &self.authority {
            writeln!(f, "  {}", record)?;
        }
        writeln!(f, "additional({}):", self.additional.len())?;
        for record in &self.additional {
            writeln!(f, "  {}", record)?;
        }
        Ok(())
    }
}
