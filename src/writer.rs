//! Tree-to-text serialization
//!
//! The writer implements [Visitor] and is driven through the tree by
//! [JsonValue::accept]. Output formatting is controlled by a small option
//! bitmask: compact (the default), escaped non-ASCII and pretty-printed.

use std::io::{self, Write};
use std::ops::BitOr;

use crate::value::{JsonConst, JsonValue, Visitor};
use crate::{JsonArray, JsonNumber, JsonObject, JsonString};

const INDENT_WIDTH: usize = 4;

/// Serialization options bitmask
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions(u8);

impl WriteOptions {
    /// Minimal single-line output, no whitespace (the default)
    pub const COMPACT: WriteOptions = WriteOptions(0);
    /// Re-encode every non-ASCII code unit as a `\uXXXX` escape
    pub const ESCAPE_UNICODE: WriteOptions = WriteOptions(1);
    /// Indented multi-line output
    pub const PRETTY: WriteOptions = WriteOptions(2);

    pub fn escape_unicode(self) -> bool {
        self.0 & WriteOptions::ESCAPE_UNICODE.0 != 0
    }

    pub fn pretty(self) -> bool {
        self.0 & WriteOptions::PRETTY.0 != 0
    }
}

impl BitOr for WriteOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        WriteOptions(self.0 | rhs.0)
    }
}

/// The serializing [Visitor]. Sink failures are latched: the first error is
/// kept and surfaced by [Writer::finish], later visits become no-ops.
pub struct Writer<W: Write> {
    sink: W,
    options: WriteOptions,
    depth: usize,
    status: io::Result<()>,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W, options: WriteOptions) -> Self {
        Writer {
            sink,
            options,
            depth: 0,
            status: Ok(()),
        }
    }

    /// Flush the sink and yield the first failure, if any
    pub fn finish(mut self) -> io::Result<()> {
        std::mem::replace(&mut self.status, Ok(()))?;
        self.sink.flush()
    }

    fn record(&mut self, result: io::Result<()>) {
        if self.status.is_ok() {
            self.status = result;
        }
    }

    fn newline_and_indent(&mut self) -> io::Result<()> {
        if self.options.pretty() {
            write!(self.sink, "\n{:width$}", "", width = self.depth * INDENT_WIDTH)?;
        }
        Ok(())
    }

    fn write_value(&mut self, value: &JsonValue) -> io::Result<()> {
        match value {
            JsonValue::Object(object) => self.write_object(object),
            JsonValue::Array(array) => self.write_array(array),
            JsonValue::String(string) => self.write_string(string),
            JsonValue::Number(number) => self.write_number(number),
            JsonValue::Const(constant) => self.write_const(constant),
        }
    }

    fn write_object(&mut self, object: &JsonObject) -> io::Result<()> {
        if object.count() == 0 {
            return write!(self.sink, "{{}}");
        }
        write!(self.sink, "{{")?;
        self.depth += 1;
        for (index, key, value) in object.iter() {
            if index > 0 {
                write!(self.sink, ",")?;
            }
            self.newline_and_indent()?;
            self.write_text(key)?;
            write!(self.sink, ":")?;
            if self.options.pretty() {
                write!(self.sink, " ")?;
            }
            self.write_value(value)?;
        }
        self.depth -= 1;
        self.newline_and_indent()?;
        write!(self.sink, "}}")
    }

    fn write_array(&mut self, array: &JsonArray) -> io::Result<()> {
        if array.count() == 0 {
            return write!(self.sink, "[]");
        }
        write!(self.sink, "[")?;
        self.depth += 1;
        for index in 0..array.count() {
            if index > 0 {
                write!(self.sink, ",")?;
            }
            self.newline_and_indent()?;
            match array.get(index) {
                Some(value) => self.write_value(value)?,
                // vacant slot
                None => write!(self.sink, "null")?,
            }
        }
        self.depth -= 1;
        self.newline_and_indent()?;
        write!(self.sink, "]")
    }

    fn write_string(&mut self, string: &JsonString) -> io::Result<()> {
        write!(self.sink, "\"")?;
        if self.options.escape_unicode() {
            // per-unit escaping keeps astral code points as surrogate pairs
            for &unit in string.units() {
                self.write_unit(unit)?;
            }
        } else {
            for c in string.utf8().chars() {
                self.write_char(c)?;
            }
        }
        write!(self.sink, "\"")
    }

    /// Serialize an object key with the same escaping rules as string values
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.sink, "\"")?;
        if self.options.escape_unicode() {
            for unit in text.encode_utf16() {
                self.write_unit(unit)?;
            }
        } else {
            for c in text.chars() {
                self.write_char(c)?;
            }
        }
        write!(self.sink, "\"")
    }

    fn write_unit(&mut self, unit: u16) -> io::Result<()> {
        match unit {
            0x22 => write!(self.sink, "\\\""),
            0x5C => write!(self.sink, "\\\\"),
            0x08 => write!(self.sink, "\\b"),
            0x0C => write!(self.sink, "\\f"),
            0x0A => write!(self.sink, "\\n"),
            0x0D => write!(self.sink, "\\r"),
            0x09 => write!(self.sink, "\\t"),
            0x20..=0x7E => write!(self.sink, "{}", unit as u8 as char),
            _ => write!(self.sink, "\\u{unit:04x}"),
        }
    }

    fn write_char(&mut self, c: char) -> io::Result<()> {
        match c {
            '"' => write!(self.sink, "\\\""),
            '\\' => write!(self.sink, "\\\\"),
            '\u{8}' => write!(self.sink, "\\b"),
            '\u{C}' => write!(self.sink, "\\f"),
            '\n' => write!(self.sink, "\\n"),
            '\r' => write!(self.sink, "\\r"),
            '\t' => write!(self.sink, "\\t"),
            // RFC 4627 forbids raw control characters
            c if (c as u32) < 0x20 => write!(self.sink, "\\u{:04x}", c as u32),
            c => write!(self.sink, "{c}"),
        }
    }

    fn write_number(&mut self, number: &JsonNumber) -> io::Result<()> {
        write!(self.sink, "{number}")
    }

    fn write_const(&mut self, constant: &JsonConst) -> io::Result<()> {
        write!(self.sink, "{}", constant.as_str())
    }
}

impl<W: Write> Visitor for Writer<W> {
    fn visit_object(&mut self, object: &JsonObject) {
        if self.status.is_ok() {
            let result = self.write_object(object);
            self.record(result);
        }
    }

    fn visit_array(&mut self, array: &JsonArray) {
        if self.status.is_ok() {
            let result = self.write_array(array);
            self.record(result);
        }
    }

    fn visit_string(&mut self, string: &JsonString) {
        if self.status.is_ok() {
            let result = self.write_string(string);
            self.record(result);
        }
    }

    fn visit_number(&mut self, number: &JsonNumber) {
        if self.status.is_ok() {
            let result = self.write_number(number);
            self.record(result);
        }
    }

    fn visit_const(&mut self, constant: &JsonConst) {
        if self.status.is_ok() {
            let result = self.write_const(constant);
            self.record(result);
        }
    }
}

/// Serialize `value` into `sink` under the given options
pub fn write_to<W: Write>(value: &JsonValue, sink: W, options: WriteOptions) -> io::Result<()> {
    let mut writer = Writer::new(sink, options);
    value.accept(&mut writer);
    writer.finish()
}

/// Serialize `value` into a byte buffer
pub fn to_vec(value: &JsonValue, options: WriteOptions) -> Vec<u8> {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_to(value, &mut buffer, options);
    buffer
}

/// Serialize `value` into an owned string
pub fn to_text(value: &JsonValue, options: WriteOptions) -> String {
    String::from_utf8_lossy(&to_vec(value, options)).into_owned()
}
