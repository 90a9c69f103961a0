//! Contains the recursive-descent `Parser`.
//!
//! Every routine starts at a byte offset into the document, consumes a
//! prefix of what remains, and reports how many bytes it consumed so the
//! caller can resume right after it. Offsets handed to a routine always
//! point at the routine's flag character (`{` for objects, `"` for
//! strings, and so on); only the dispatch routine decides which one to call.

use crate::error::ParseError;
use crate::limits::Limits;
use crate::scanner::{decode_next, skip_whitespace, SPACE};
use crate::value::{JsonObject, JsonValue};
use memchr::memchr;

/// A parsed value together with the number of bytes it occupied.
#[derive(Debug, PartialEq)]
pub struct Parsed<T> {
    /// The value built from the consumed text.
    pub value: T,
    /// Length of the consumed text in bytes.
    pub consumed: usize,
}

impl<T> Parsed<T> {
    fn new(value: T, consumed: usize) -> Self {
        Parsed { value, consumed }
    }
}

/// Flags tracked while scanning a number literal.
#[derive(Debug, Default)]
struct NumberScan {
    has_decimal: bool,
    has_exponent: bool,
    /// True at the start of the literal and right after the exponent marker.
    segment_start: bool,
}

/// The recursive-descent parser over one in-memory document.
///
/// Holds no state between calls besides the input and its limits, so a
/// single `Parser` may be used for any number of routine calls.
pub struct Parser<'a> {
    input: &'a str,
    limits: Limits,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`.
    pub fn new(input: &'a str, limits: Limits) -> Self {
        Parser { input, limits }
    }

    /// Parses the top-level object and checks nothing but spaces follows it.
    ///
    /// Leading whitespace is not skipped: the document must begin with `{`.
    pub fn parse_document(&self) -> Result<JsonObject, ParseError> {
        if self.input.len() > self.limits.max_input_bytes {
            return Err(ParseError::malformed(
                "Input exceeds maximum size limit",
                0,
            ));
        }

        let root = self.parse_object(0, 0)?;
        let end = root.consumed;
        let trailing = skip_whitespace(self.input, end)?;
        if end + trailing < self.input.len() {
            return Err(ParseError::malformed(
                "Unexpected trailing characters after the root object",
                end + trailing,
            ));
        }
        Ok(root.value)
    }

    /// Dispatches on the first character at `at` to the matching routine.
    ///
    /// `depth` is the number of objects/arrays already open around `at`.
    pub fn parse_value(&self, at: usize, depth: usize) -> Result<Parsed<JsonValue>, ParseError> {
        let Some((lead, _)) = decode_next(self.input, at) else {
            let message = if at >= self.input.len() {
                "Input ends where a value was expected"
            } else {
                "Value does not begin on a character boundary"
            };
            return Err(ParseError::malformed(message, at));
        };

        match lead {
            '{' => self
                .parse_object(at, depth)
                .map(|p| Parsed::new(JsonValue::Object(p.value), p.consumed)),
            '[' => self.parse_array(at, depth),
            '"' => self
                .parse_string(at)
                .map(|p| Parsed::new(JsonValue::String(p.value), p.consumed)),
            't' | 'f' => self.parse_boolean(at),
            'n' => self.parse_null(at),
            '0'..='9' | '-' => self.parse_number(at),
            _ => Err(ParseError::malformed(
                format!("Value in JSON does not parse properly: unexpected '{}'", lead),
                at,
            )),
        }
    }

    /// `Object := '{' '}' | '{' Pair (',' Pair)* '}'`
    pub fn parse_object(&self, at: usize, depth: usize) -> Result<Parsed<JsonObject>, ParseError> {
        match decode_next(self.input, at) {
            Some(('{', _)) => {}
            _ => {
                return Err(ParseError::malformed(
                    "Object does not begin with '{'",
                    at,
                ))
            }
        }
        self.enter(at, depth)?;

        let mut members = JsonObject::new();
        let mut cursor = at + 1;
        let mut first_pair = true;

        loop {
            cursor += skip_whitespace(self.input, cursor)?;
            let Some((c, width)) = decode_next(self.input, cursor) else {
                return Err(unterminated_object(cursor));
            };

            if c == '}' {
                if first_pair {
                    return Ok(Parsed::new(members, cursor + width - at));
                }
                return Err(ParseError::malformed(
                    "Object terminates with ', }'",
                    cursor,
                ));
            }
            first_pair = false;

            let pair = self.parse_pair(cursor, depth + 1)?;
            let (name, value) = pair.value;
            members.insert(name, value);
            cursor += pair.consumed;

            cursor += skip_whitespace(self.input, cursor)?;
            match decode_next(self.input, cursor) {
                Some(('}', width)) => return Ok(Parsed::new(members, cursor + width - at)),
                Some((',', width)) => cursor += width,
                Some(_) => {
                    return Err(ParseError::malformed(
                        "JSON object has 2 members unseparated by comma",
                        cursor,
                    ))
                }
                None => return Err(unterminated_object(cursor)),
            }
        }
    }

    /// `Pair := String ':' Value`
    ///
    /// `depth` is the depth of the object the pair belongs to.
    pub fn parse_pair(
        &self,
        at: usize,
        depth: usize,
    ) -> Result<Parsed<(String, JsonValue)>, ParseError> {
        let name = self.parse_string(at)?;
        let mut cursor = at + name.consumed;

        cursor += skip_whitespace(self.input, cursor)?;
        match decode_next(self.input, cursor) {
            Some((':', width)) => cursor += width,
            _ => {
                return Err(ParseError::malformed(
                    "Member name and value not separated by ':'",
                    cursor,
                ))
            }
        }

        cursor += skip_whitespace(self.input, cursor)?;
        let value = self.parse_value(cursor, depth)?;
        cursor += value.consumed;

        Ok(Parsed::new((name.value, value.value), cursor - at))
    }

    /// `Array := '[' ']' | '[' Value (',' Value)* ']'`
    pub fn parse_array(&self, at: usize, depth: usize) -> Result<Parsed<JsonValue>, ParseError> {
        match decode_next(self.input, at) {
            Some(('[', _)) => {}
            _ => {
                return Err(ParseError::malformed(
                    "Array does not start with '['",
                    at,
                ))
            }
        }
        self.enter(at, depth)?;

        let mut elements = Vec::new();
        let mut cursor = at + 1;
        let (mut needs_comma, mut needs_value) = (false, false);

        loop {
            cursor += skip_whitespace(self.input, cursor)?;
            let Some((c, width)) = decode_next(self.input, cursor) else {
                return Err(ParseError::malformed(
                    "Array does not end before end of input",
                    cursor,
                ));
            };

            match c {
                ']' => {
                    if needs_value {
                        return Err(ParseError::malformed(
                            "Array ends with comma, no value",
                            cursor,
                        ));
                    }
                    return Ok(Parsed::new(
                        JsonValue::Array(elements),
                        cursor + width - at,
                    ));
                }
                ',' => {
                    if needs_value {
                        return Err(ParseError::malformed(
                            "Array has two commas in a row",
                            cursor,
                        ));
                    }
                    // A comma before the first element is a missing value too.
                    if !needs_comma {
                        return Err(ParseError::malformed(
                            "Array has a comma before its first value",
                            cursor,
                        ));
                    }
                    needs_comma = false;
                    needs_value = true;
                    cursor += width;
                }
                _ => {
                    if needs_comma {
                        return Err(ParseError::malformed(
                            "Array has two values not separated by comma",
                            cursor,
                        ));
                    }
                    let element = self.parse_value(cursor, depth + 1)?;
                    elements.push(element.value);
                    cursor += element.consumed;
                    needs_comma = true;
                    needs_value = false;
                }
            }
        }
    }

    /// Scans from the opening `"` to the next `"`.
    ///
    /// The returned content excludes both quote characters; the consumed
    /// length includes them. There is no escape handling: the first `"`
    /// after the opening one always closes the string.
    pub fn parse_string(&self, at: usize) -> Result<Parsed<String>, ParseError> {
        match decode_next(self.input, at) {
            Some(('"', _)) => {}
            _ => {
                return Err(ParseError::malformed(
                    "String value does not begin with quotation mark",
                    at,
                ))
            }
        }

        let content_start = at + 1;
        // '"' is ASCII, so a byte match is always a code point boundary.
        match memchr(b'"', &self.input.as_bytes()[content_start..]) {
            Some(len) => {
                let content = &self.input[content_start..content_start + len];
                Ok(Parsed::new(content.to_string(), len + 2))
            }
            None => Err(ParseError::malformed("String value never ends", at)),
        }
    }

    /// Matches the exact literal `true` or `false`.
    pub fn parse_boolean(&self, at: usize) -> Result<Parsed<JsonValue>, ParseError> {
        let (expected, value) = match decode_next(self.input, at) {
            Some(('t', _)) => ("true", true),
            Some(('f', _)) => ("false", false),
            _ => {
                return Err(ParseError::invariant(
                    "Value passed to parse_boolean starts with neither 't' nor 'f'",
                    at,
                ))
            }
        };

        if self.rest(at).starts_with(expected) {
            Ok(Parsed::new(JsonValue::Boolean(value), expected.len()))
        } else {
            Err(ParseError::malformed(
                format!("Value for boolean {} does not equal '{}'", value, expected),
                at,
            ))
        }
    }

    /// Matches the exact literal `null`.
    pub fn parse_null(&self, at: usize) -> Result<Parsed<JsonValue>, ParseError> {
        if self.rest(at).starts_with("null") {
            Ok(Parsed::new(JsonValue::Null, 4))
        } else {
            Err(ParseError::malformed(
                "Value for null does not have 4 characters == 'null'",
                at,
            ))
        }
    }

    /// Scans a number literal up to a space, `,`, `]`, `}` or end of input,
    /// validating each character, then parses the scanned text as `f64`.
    pub fn parse_number(&self, at: usize) -> Result<Parsed<JsonValue>, ParseError> {
        if self.input.get(at..).is_none() {
            return Err(ParseError::malformed(
                "Number does not begin at a valid offset",
                at,
            ));
        }
        let mut scan = NumberScan {
            segment_start: true,
            ..NumberScan::default()
        };
        let mut cursor = at;

        while let Some((c, width)) = decode_next(self.input, cursor) {
            if matches!(c, SPACE | ',' | ']' | '}') {
                break;
            }
            scan.accept(c, cursor)?;
            cursor += width;
        }

        let literal = &self.input[at..cursor];
        let number = literal.parse::<f64>().map_err(|_| {
            ParseError::malformed(
                format!("Error parsing float '{}' after initial pass", literal),
                at,
            )
        })?;
        if !number.is_finite() {
            return Err(ParseError::malformed(
                format!("Number '{}' is out of range for a 64-bit float", literal),
                at,
            ));
        }

        Ok(Parsed::new(JsonValue::Number(number), cursor - at))
    }

    /// Checks the nesting limit before opening a container at `at`.
    fn enter(&self, at: usize, depth: usize) -> Result<(), ParseError> {
        if depth >= self.limits.max_depth {
            return Err(ParseError::malformed(
                "Maximum nesting depth exceeded",
                at,
            ));
        }
        Ok(())
    }

    fn rest(&self, at: usize) -> &'a str {
        self.input.get(at..).unwrap_or("")
    }
}

impl NumberScan {
    /// Validates the next character of a number literal at offset `at`.
    fn accept(&mut self, c: char, at: usize) -> Result<(), ParseError> {
        match c {
            '0'..='9' => {
                self.segment_start = false;
            }
            '.' => {
                if self.has_decimal {
                    return Err(ParseError::malformed("Second decimal found in Number", at));
                }
                self.has_decimal = true;
                self.segment_start = false;
            }
            'e' | 'E' => {
                if self.has_exponent {
                    return Err(ParseError::malformed(
                        "Second exponent 'e' or 'E' found in Number",
                        at,
                    ));
                }
                if self.segment_start {
                    return Err(ParseError::malformed("Number leads with 'e' or 'E'", at));
                }
                self.has_exponent = true;
                self.has_decimal = false;
                self.segment_start = true;
            }
            '-' => {
                if !self.segment_start {
                    return Err(ParseError::malformed(
                        "Negative sign found in middle of number",
                        at,
                    ));
                }
                self.segment_start = false;
            }
            '+' => {
                if !(self.segment_start && self.has_exponent) {
                    return Err(ParseError::malformed(
                        "Plus sign found outside of exponent in Number",
                        at,
                    ));
                }
                self.segment_start = false;
            }
            _ => {
                return Err(ParseError::malformed(
                    format!("Invalid character '{}' found in Number", c),
                    at,
                ))
            }
        }
        Ok(())
    }
}

fn unterminated_object(at: usize) -> ParseError {
    ParseError::malformed("JSON object does not terminate with '}'", at)
}
