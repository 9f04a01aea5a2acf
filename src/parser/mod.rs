pub mod entries;
pub mod extract;
pub mod normalize;
pub mod sections;
pub mod tech;

use crate::model::ProfileDocument;

/// Single linear pass: source text → section spans → tokenized entries →
/// normalized fields → assembled document with derived tags and variant.
///
/// Pure with respect to its input; the same text and origin hint always
/// produce the same document. Reading the file and persisting the output
/// belong to the caller.
pub fn parse_document(text: &str, origin: Option<&str>) -> ProfileDocument {
    extract::assemble(text, origin)
}
