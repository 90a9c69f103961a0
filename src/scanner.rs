//! Lexical primitives shared by every parsing routine.
//!
//! Positions are byte offsets into the full document. They always sit on a
//! code point boundary because every routine advances by the UTF-8 width
//! that `decode_next` reports.

use crate::error::ParseError;

/// The only character treated as insignificant between tokens.
pub(crate) const SPACE: char = ' ';

/// Decodes the code point starting at byte offset `pos`.
///
/// Returns the character and its UTF-8 width, or `None` at end of input.
#[inline]
pub fn decode_next(input: &str, pos: usize) -> Option<(char, usize)> {
    input
        .get(pos..)?
        .chars()
        .next()
        .map(|c| (c, c.len_utf8()))
}

/// Returns how far the run of spaces starting at `pos` extends.
///
/// Only `' '` counts; tabs and newlines are significant characters here.
/// The run may extend to the end of input, in which case the caller sees
/// `None` from `decode_next` at the returned position.
///
/// # Errors
/// Returns a `MalformedInput` error if `pos` is already past the end of
/// the input, so no skip is possible.
pub fn skip_whitespace(input: &str, pos: usize) -> Result<usize, ParseError> {
    let rest = input.get(pos..).ok_or_else(|| {
        ParseError::malformed("Input ends before whitespace can be skipped", input.len())
    })?;
    Ok(rest.bytes().take_while(|&b| b == SPACE as u8).count())
}
