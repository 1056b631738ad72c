//! Recursive descent JSON parser
//!
//! Consumes a normalized byte cursor ([InputStream]) and builds a value tree.
//! Numbers and strings are recognized by explicit per-token state machines.
//! Syntax errors are delivered synchronously to a caller-supplied callback
//! with line/column coordinates; the erroring production drops its partial
//! value and the failure bubbles up to a `None` root. There is no error
//! recovery - the first fatal error ends the parse.
//!
//! Beyond strict RFC 4627 JSON the grammar accepts `#`-to-end-of-line,
//! `//`-to-end-of-line and `/* ... */` comments anywhere whitespace is legal.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::coords::Coords;
use crate::encoding::{DecodingStream, InputStream};
use crate::errors::{Details, ParserError, Stage};
use crate::value::{JsonConst, JsonValue};
use crate::{JsonArray, JsonNumber, JsonObject, JsonString};

/// The default error callback: one formatted line on standard error
fn report_to_stderr(error: &ParserError) {
    eprintln!("**** Syntax error {error}");
}

/// Main JSON parser struct
#[derive(Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    /// Parse a single JSON value from a normalized byte cursor, reporting
    /// errors to standard error
    pub fn parse_stream<S: InputStream>(&self, stream: S) -> Option<JsonValue> {
        self.parse_stream_with(stream, report_to_stderr)
    }

    /// Parse a single JSON value from a normalized byte cursor. `on_error`
    /// receives every diagnostic the parse produces; a `None` result means
    /// the root value could not be completed.
    pub fn parse_stream_with<S, F>(&self, stream: S, on_error: F) -> Option<JsonValue>
    where
        S: InputStream,
        F: FnMut(&ParserError),
    {
        ParseContext::new(stream, on_error).parse()
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Option<JsonValue> {
        self.parse_bytes_with(bytes, report_to_stderr)
    }

    pub fn parse_bytes_with<F>(&self, bytes: &[u8], mut on_error: F) -> Option<JsonValue>
    where
        F: FnMut(&ParserError),
    {
        match DecodingStream::from_bytes(bytes) {
            Ok(stream) => self.parse_stream_with(stream, on_error),
            Err(error) => {
                on_error(&error);
                None
            }
        }
    }

    pub fn parse_str(&self, text: &str) -> Option<JsonValue> {
        self.parse_bytes(text.as_bytes())
    }

    pub fn parse_str_with<F>(&self, text: &str, on_error: F) -> Option<JsonValue>
    where
        F: FnMut(&ParserError),
    {
        self.parse_bytes_with(text.as_bytes(), on_error)
    }

    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Option<JsonValue> {
        match File::open(path) {
            Ok(file) => match DecodingStream::new(BufReader::new(file)) {
                Ok(stream) => self.parse_stream(stream),
                Err(error) => {
                    report_to_stderr(&error);
                    None
                }
            },
            Err(_) => {
                report_to_stderr(&ParserError {
                    stage: Stage::Parser,
                    details: Details::InvalidFile,
                    coords: None,
                });
                None
            }
        }
    }
}

/// State threaded through one parse: the cursor, position bookkeeping and the
/// error callback
struct ParseContext<S: InputStream, F: FnMut(&ParserError)> {
    stream: S,
    on_error: F,
    coords: Coords,
    failed: bool,
}

enum NumState {
    Zero,
    Integral,
    DecimalFirst,
    DecimalMore,
    ExpSignOrFirst,
    ExpFirst,
    ExpMore,
}

impl<S: InputStream, F: FnMut(&ParserError)> ParseContext<S, F> {
    fn new(stream: S, on_error: F) -> Self {
        ParseContext {
            stream,
            on_error,
            coords: Coords::start(),
            failed: false,
        }
    }

    fn item(&self) -> Option<u8> {
        self.stream.item()
    }

    /// Advance the cursor, maintaining line/column bookkeeping. A decode
    /// error in the underlying stream is reported at the current position,
    /// after which the cursor reads as exhausted.
    fn advance(&mut self) {
        match self.stream.next() {
            Ok(()) => {
                self.coords.absolute += 1;
                match self.item() {
                    Some(b'\n') => {
                        self.coords.line += 1;
                        self.coords.column = 0;
                    }
                    _ => self.coords.column += 1,
                }
            }
            Err(mut error) => {
                error.coords = Some(self.coords);
                self.report(error);
            }
        }
    }

    fn report(&mut self, error: ParserError) {
        self.failed = true;
        (self.on_error)(&error);
    }

    fn error(&mut self, details: Details) {
        self.report(ParserError {
            stage: Stage::Parser,
            details,
            coords: Some(self.coords),
        });
    }

    fn parse(&mut self) -> Option<JsonValue> {
        let result = self.parse_value();
        if !self.failed {
            self.skip_blanks();
            if self.item().is_some() {
                self.error(Details::TrailingCharacters);
            }
        }
        result
    }

    /// Skip whitespace and comments. Returns false when a malformed comment
    /// was reported.
    fn skip_blanks(&mut self) -> bool {
        loop {
            match self.item() {
                Some(b' ' | b'\t' | b'\r' | b'\n' | 0x0C) => self.advance(),
                Some(b'#') => self.skip_line_comment(),
                Some(b'/') => {
                    self.advance();
                    match self.item() {
                        Some(b'/') => self.skip_line_comment(),
                        Some(b'*') => {
                            if !self.skip_block_comment() {
                                return false;
                            }
                        }
                        _ => {
                            self.error(Details::InvalidCharacter('/'));
                            return false;
                        }
                    }
                }
                _ => return true,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        loop {
            match self.item() {
                None => return,
                Some(b'\n') => {
                    self.advance();
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    fn skip_block_comment(&mut self) -> bool {
        self.advance();
        loop {
            match self.item() {
                None => {
                    self.error(Details::EndOfInput);
                    return false;
                }
                Some(b'*') => {
                    self.advance();
                    if self.item() == Some(b'/') {
                        self.advance();
                        return true;
                    }
                }
                _ => self.advance(),
            }
        }
    }

    fn parse_value(&mut self) -> Option<JsonValue> {
        if !self.skip_blanks() {
            return None;
        }
        match self.item() {
            Some(b'{') => self.parse_object().map(JsonValue::Object),
            Some(b'[') => self.parse_array().map(JsonValue::Array),
            Some(b'"') => self.parse_string().map(JsonValue::String),
            Some(b't') => self.parse_keyword("true", JsonConst::True),
            Some(b'f') => self.parse_keyword("false", JsonConst::False),
            Some(b'n') => self.parse_keyword("null", JsonConst::Null),
            Some(b'-' | b'0'..=b'9') => self.parse_number().map(JsonValue::Number),
            Some(other) => {
                self.error(Details::InvalidCharacter(other as char));
                None
            }
            None => {
                self.error(Details::EndOfInput);
                None
            }
        }
    }

    fn parse_object(&mut self) -> Option<JsonObject> {
        let mut result = JsonObject::new();
        self.advance();
        if !self.skip_blanks() {
            return None;
        }
        if self.item() == Some(b'}') {
            self.advance();
            return Some(result);
        }
        loop {
            if !self.skip_blanks() {
                return None;
            }
            if self.item() != Some(b'"') {
                self.error(Details::ExpectedString);
                return None;
            }
            // the parsed key is transient: its UTF-8 form becomes the stored
            // key and the string value itself is discarded
            let key = self.parse_string()?.utf8();
            if result.get(&key).is_some() {
                self.error(Details::DuplicateKey(key));
                return None;
            }
            if !self.skip_blanks() {
                return None;
            }
            if self.item() != Some(b':') {
                self.error(Details::ExpectedColon);
                return None;
            }
            self.advance();
            let value = self.parse_value()?;
            result.set(&key, value);
            if !self.skip_blanks() {
                return None;
            }
            match self.item() {
                Some(b'}') => {
                    self.advance();
                    return Some(result);
                }
                Some(b',') => self.advance(),
                _ => {
                    self.error(Details::ExpectedCommaOrEndObject);
                    return None;
                }
            }
        }
    }

    fn parse_array(&mut self) -> Option<JsonArray> {
        let mut result = JsonArray::new();
        self.advance();
        if !self.skip_blanks() {
            return None;
        }
        if self.item() == Some(b']') {
            self.advance();
            return Some(result);
        }
        loop {
            let value = self.parse_value()?;
            result.add(value);
            if !self.skip_blanks() {
                return None;
            }
            match self.item() {
                Some(b']') => {
                    self.advance();
                    return Some(result);
                }
                Some(b',') => self.advance(),
                _ => {
                    self.error(Details::ExpectedCommaOrEndArray);
                    return None;
                }
            }
        }
    }

    fn parse_keyword(&mut self, word: &'static str, value: JsonConst) -> Option<JsonValue> {
        for expected in word.bytes() {
            if self.item() != Some(expected) {
                self.error(Details::KeywordMatchFailed(word));
                return None;
            }
            self.advance();
        }
        Some(JsonValue::Const(value))
    }

    /// Number state machine. The cursor is left on the first character after
    /// the token; end of input in a terminal state completes the token.
    fn parse_number(&mut self) -> Option<JsonNumber> {
        let mut sign = 1;
        let mut integral: u64 = 0;
        let mut decimal: u64 = 0;
        let mut decimal_exp: u32 = 0;
        let mut exponent_sign = 1;
        let mut exponent: i32 = 0;

        if self.item() == Some(b'-') {
            sign = -1;
            self.advance();
        }
        let mut state = match self.item() {
            Some(b'0') => {
                self.advance();
                NumState::Zero
            }
            Some(digit @ b'1'..=b'9') => {
                integral = (digit - b'0') as u64;
                self.advance();
                NumState::Integral
            }
            _ => {
                self.error(Details::InvalidNumber);
                return None;
            }
        };

        loop {
            let c = self.item();
            state = match state {
                NumState::Zero => match c {
                    Some(b'.') => {
                        self.advance();
                        NumState::DecimalFirst
                    }
                    Some(b'e' | b'E') => {
                        self.advance();
                        NumState::ExpSignOrFirst
                    }
                    _ => break,
                },
                NumState::Integral => match c {
                    Some(b'.') => {
                        self.advance();
                        NumState::DecimalFirst
                    }
                    Some(b'e' | b'E') => {
                        self.advance();
                        NumState::ExpSignOrFirst
                    }
                    Some(digit @ b'0'..=b'9') => {
                        integral = integral
                            .saturating_mul(10)
                            .saturating_add((digit - b'0') as u64);
                        self.advance();
                        NumState::Integral
                    }
                    _ => break,
                },
                NumState::DecimalFirst => match c {
                    Some(digit @ b'0'..=b'9') => {
                        decimal = (digit - b'0') as u64;
                        decimal_exp = 1;
                        self.advance();
                        NumState::DecimalMore
                    }
                    _ => {
                        self.error(Details::InvalidNumber);
                        return None;
                    }
                },
                NumState::DecimalMore => match c {
                    Some(digit @ b'0'..=b'9') => {
                        decimal = decimal
                            .saturating_mul(10)
                            .saturating_add((digit - b'0') as u64);
                        decimal_exp += 1;
                        self.advance();
                        NumState::DecimalMore
                    }
                    Some(b'e' | b'E') => {
                        self.advance();
                        NumState::ExpSignOrFirst
                    }
                    _ => break,
                },
                NumState::ExpSignOrFirst => match c {
                    Some(b'+') => {
                        self.advance();
                        NumState::ExpFirst
                    }
                    Some(b'-') => {
                        exponent_sign = -1;
                        self.advance();
                        NumState::ExpFirst
                    }
                    Some(digit @ b'0'..=b'9') => {
                        exponent = (digit - b'0') as i32;
                        self.advance();
                        NumState::ExpMore
                    }
                    _ => {
                        self.error(Details::InvalidNumber);
                        return None;
                    }
                },
                NumState::ExpFirst => match c {
                    Some(digit @ b'0'..=b'9') => {
                        exponent = (digit - b'0') as i32;
                        self.advance();
                        NumState::ExpMore
                    }
                    _ => {
                        self.error(Details::InvalidNumber);
                        return None;
                    }
                },
                NumState::ExpMore => match c {
                    Some(digit @ b'0'..=b'9') => {
                        exponent = exponent
                            .saturating_mul(10)
                            .saturating_add((digit - b'0') as i32);
                        self.advance();
                        NumState::ExpMore
                    }
                    _ => break,
                },
            };
        }
        Some(JsonNumber::from_parts(
            sign,
            integral,
            decimal,
            decimal_exp,
            exponent_sign * exponent,
        ))
    }

    /// String state machine. The cursor starts on the opening quote and is
    /// left on the first character after the closing quote.
    fn parse_string(&mut self) -> Option<JsonString> {
        let mut result = JsonString::new();
        self.advance();
        loop {
            match self.item() {
                None => {
                    self.error(Details::UnterminatedString);
                    return None;
                }
                Some(b'"') => {
                    if result.pending_utf8() > 0 {
                        self.error(Details::InvalidUtf8Sequence);
                        return None;
                    }
                    self.advance();
                    return Some(result);
                }
                Some(b'\\') => {
                    if result.pending_utf8() > 0 {
                        self.error(Details::InvalidUtf8Sequence);
                        return None;
                    }
                    self.advance();
                    if !self.parse_escape(&mut result) {
                        return None;
                    }
                }
                Some(byte) => {
                    if let Err(mut error) = result.add_utf8(byte) {
                        error.coords = Some(self.coords);
                        self.report(error);
                        return None;
                    }
                    self.advance();
                }
            }
        }
    }

    /// The cursor is on the character following the backslash
    fn parse_escape(&mut self, string: &mut JsonString) -> bool {
        match self.item() {
            Some(b'"') => string.add('"' as u32),
            Some(b'\\') => string.add('\\' as u32),
            Some(b'/') => string.add('/' as u32),
            Some(b'b') => string.add(0x08),
            Some(b'f') => string.add(0x0C),
            Some(b'n') => string.add('\n' as u32),
            Some(b'r') => string.add('\r' as u32),
            Some(b't') => string.add('\t' as u32),
            Some(b'u') => {
                self.advance();
                let mut unit: u32 = 0;
                for _ in 0..4 {
                    let digit = match self.item().and_then(|byte| (byte as char).to_digit(16)) {
                        Some(digit) => digit,
                        None => {
                            let found = self.item().map(char::from).unwrap_or('\u{0}');
                            self.error(Details::InvalidUnicodeEscape(found));
                            return false;
                        }
                    };
                    unit = (unit << 4) | digit;
                    self.advance();
                }
                // a raw UTF-16 unit: the string pairs surrogate halves on read
                string.add(unit);
                return true;
            }
            Some(other) => {
                self.error(Details::InvalidEscapeSequence(other as char));
                return false;
            }
            None => {
                self.error(Details::UnterminatedString);
                return false;
            }
        }
        self.advance();
        true
    }
}
