//! Contains the `JsonValue` enum, the in-memory tree a parse produces.
//!
//! This module also includes the render (serialization) logic for turning
//! a value back into its canonical text form.
use std::collections::hash_map::{self, HashMap};
use std::fmt;

/// The kind tag of a `JsonValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Any number, always held as `f64`.
    Number,
    /// A quoted string.
    String,
    /// An ordered list of values.
    Array,
    /// An unordered name/value mapping.
    Object,
}

impl ValueKind {
    /// Lower-case name of the kind, for messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON object: member names mapped to the values they own.
///
/// Iteration order is unspecified, and so is the member order of the
/// rendered text. Inserting a name that is already present replaces the
/// previous value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonObject {
    members: HashMap<String, JsonValue>,
}

impl JsonObject {
    /// Creates an empty object.
    pub fn new() -> Self {
        JsonObject::default()
    }

    /// Inserts a member, returning the value it replaced (last write wins).
    pub fn insert(&mut self, name: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
        self.members.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.members.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut JsonValue> {
        self.members.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<JsonValue> {
        self.members.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over members in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, JsonValue> {
        self.members.iter()
    }

    /// Always `ValueKind::Object`.
    pub fn kind(&self) -> ValueKind {
        ValueKind::Object
    }

    /// Renders the object as canonical text, e.g. `{"a" : 1e+00}`.
    pub fn render(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = write_object(self, &mut output);
        output
    }
}

impl FromIterator<(String, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        JsonObject {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonValue);
    type IntoIter = hash_map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = hash_map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_object(self, f)
    }
}

/// A native Rust representation of a parsed JSON value.
///
/// Composite variants own their children; a tree has no sharing and
/// no cycles.
#[derive(Debug, PartialEq, Clone)]
pub enum JsonValue {
    /// Represents a JSON `null`.
    Null,
    /// Represents a JSON `true` or `false`.
    Boolean(bool),
    /// Represents a JSON number.
    Number(f64),
    /// Represents a JSON string, without its delimiting quotes.
    String(String),
    /// Represents a JSON array (list).
    Array(Vec<JsonValue>),
    /// Represents a JSON object (map).
    Object(JsonObject),
}

impl JsonValue {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Boolean(_) => ValueKind::Boolean,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JsonValue::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean if this is a `Boolean`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string content if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a member of an object by name.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|o| o.get(name))
    }

    /// Get an element of an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Serializes the value into its canonical text form.
    ///
    /// The output is compact apart from the fixed `", "` and `" : "`
    /// separators; strings are wrapped in one pair of quotes with no
    /// escaping, and numbers use scientific notation (`1.5e+02`).
    pub fn render(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = write_value(self, &mut output);
        output
    }
}

impl From<JsonObject> for JsonValue {
    fn from(object: JsonObject) -> Self {
        JsonValue::Object(object)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}

// --- Rendering ---

/// Recursive helper function to write any `JsonValue` to a buffer.
fn write_value<W: fmt::Write>(value: &JsonValue, w: &mut W) -> fmt::Result {
    match value {
        JsonValue::Null => w.write_str("null"),
        JsonValue::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
        JsonValue::Number(n) => write_number(*n, w),
        JsonValue::String(s) => write_string(s, w),
        JsonValue::Array(a) => write_array(a, w),
        JsonValue::Object(o) => write_object(o, w),
    }
}

/// Writes `n` as `<mantissa>e<sign><exponent>` with at least two exponent
/// digits, e.g. `1.5e+02`, `-2e-07`, `0e+00`.
///
/// NaN and the infinities have no JSON form and are written as `null`.
fn write_number<W: fmt::Write>(n: f64, w: &mut W) -> fmt::Result {
    if !n.is_finite() {
        return w.write_str("null");
    }
    // `{:e}` yields the shortest mantissa that reads back to the same f64.
    let sci = format!("{:e}", n);
    match sci.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(w, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => w.write_str(&sci),
    }
}

fn write_string<W: fmt::Write>(s: &str, w: &mut W) -> fmt::Result {
    w.write_char('"')?;
    w.write_str(s)?;
    w.write_char('"')
}

/// Helper to write a JSON array.
fn write_array<W: fmt::Write>(arr: &[JsonValue], w: &mut W) -> fmt::Result {
    w.write_char('[')?;
    let mut first = true;
    for val in arr {
        if !first {
            w.write_str(", ")?;
        }
        write_value(val, w)?;
        first = false;
    }
    w.write_char(']')
}

/// Helper to write a JSON object. Member order follows the map's iteration
/// order, which is unspecified.
fn write_object<W: fmt::Write>(obj: &JsonObject, w: &mut W) -> fmt::Result {
    w.write_char('{')?;
    let mut first = true;
    for (name, val) in obj {
        if !first {
            w.write_str(", ")?;
        }
        write_string(name, w)?;
        w.write_str(" : ")?;
        write_value(val, w)?;
        first = false;
    }
    w.write_char('}')
}
