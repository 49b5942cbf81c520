//! JSON token model and the forward-only tokenizer behind `JsonReader`.

use crate::error::{FabricMeshError, Result};

/// One JSON token, as produced by the tokenizer.
///
/// Number tokens keep their raw text; the typed scalar reads on `JsonReader`
/// decide how to parse them, so an operation that skips a number never pays
/// for (or fails on) a numeric parse.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonToken {
    /// `{`
    StartObject,
    /// `}`
    EndObject,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// An object member name. The following value token belongs to it.
    PropertyName(String),
    /// A string value.
    String(String),
    /// A number value, raw text.
    Number(String),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
    /// The end of the input. Reading past it is a `MalformedStream` error.
    EndOfStream,
}

/// The kind of a [`JsonToken`], for cursor introspection without borrowing
/// the token's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    StartObject,
    /// `}`
    EndObject,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// An object member name.
    PropertyName,
    /// A string value.
    String,
    /// A number value.
    Number,
    /// `true` or `false`.
    Bool,
    /// `null`.
    Null,
    /// The end of the input.
    EndOfStream,
}

impl JsonToken {
    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            JsonToken::StartObject => TokenKind::StartObject,
            JsonToken::EndObject => TokenKind::EndObject,
            JsonToken::StartArray => TokenKind::StartArray,
            JsonToken::EndArray => TokenKind::EndArray,
            JsonToken::PropertyName(_) => TokenKind::PropertyName,
            JsonToken::String(_) => TokenKind::String,
            JsonToken::Number(_) => TokenKind::Number,
            JsonToken::Bool(_) => TokenKind::Bool,
            JsonToken::Null => TokenKind::Null,
            JsonToken::EndOfStream => TokenKind::EndOfStream,
        }
    }
}

/// What the tokenizer expects at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// A value: at the document root, after a `:`, or after an array `,`.
    Value,
    /// A member name or `}`, right after `{`.
    NameOrEndObject,
    /// `,` followed by a member name, or `}`.
    CommaOrEndObject,
    /// A value or `]`, right after `[`.
    ValueOrEndArray,
    /// `,` followed by a value, or `]`.
    CommaOrEndArray,
    /// The root value is complete; only whitespace may remain.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

/// Forward-only tokenizer over an in-memory JSON text.
///
/// Purely positional: no value buffering beyond the token being produced,
/// no backtracking. A context stack distinguishes member names from string
/// values and enforces comma/colon placement.
#[derive(Debug)]
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    containers: Vec<Container>,
    expect: Expect,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            containers: Vec::new(),
            expect: Expect::Value,
        }
    }

    /// Produces the next token, advancing the cursor past it.
    pub(crate) fn next_token(&mut self) -> Result<JsonToken> {
        self.skip_whitespace();
        match self.expect {
            Expect::Value => self.lex_value(),
            Expect::NameOrEndObject => match self.peek() {
                Some(b'}') => self.lex_end_object(),
                Some(b'"') => self.lex_property_name(),
                _ => Err(self.unexpected("a member name or '}'")),
            },
            Expect::CommaOrEndObject => match self.peek() {
                Some(b'}') => self.lex_end_object(),
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b'"') {
                        self.lex_property_name()
                    } else {
                        Err(self.unexpected("a member name after ','"))
                    }
                }
                _ => Err(self.unexpected("',' or '}'")),
            },
            Expect::ValueOrEndArray => match self.peek() {
                Some(b']') => self.lex_end_array(),
                _ => self.lex_value(),
            },
            Expect::CommaOrEndArray => match self.peek() {
                Some(b']') => self.lex_end_array(),
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    self.lex_value()
                }
                _ => Err(self.unexpected("',' or ']'")),
            },
            Expect::Done => {
                if self.pos >= self.input.len() {
                    Ok(JsonToken::EndOfStream)
                } else {
                    Err(self.unexpected("end of input"))
                }
            }
        }
    }

    fn lex_value(&mut self) -> Result<JsonToken> {
        match self.peek() {
            Some(b'{') => {
                self.pos += 1;
                self.containers.push(Container::Object);
                self.expect = Expect::NameOrEndObject;
                Ok(JsonToken::StartObject)
            }
            Some(b'[') => {
                self.pos += 1;
                self.containers.push(Container::Array);
                self.expect = Expect::ValueOrEndArray;
                Ok(JsonToken::StartArray)
            }
            Some(b'"') => {
                let s = self.lex_string()?;
                self.expect = self.after_value();
                Ok(JsonToken::String(s))
            }
            Some(b't') => {
                self.lex_keyword("true")?;
                self.expect = self.after_value();
                Ok(JsonToken::Bool(true))
            }
            Some(b'f') => {
                self.lex_keyword("false")?;
                self.expect = self.after_value();
                Ok(JsonToken::Bool(false))
            }
            Some(b'n') => {
                self.lex_keyword("null")?;
                self.expect = self.after_value();
                Ok(JsonToken::Null)
            }
            Some(c) if c == b'-' || c.is_ascii_digit() => {
                let raw = self.lex_number();
                self.expect = self.after_value();
                Ok(JsonToken::Number(raw))
            }
            _ => Err(self.unexpected("a JSON value")),
        }
    }

    fn lex_property_name(&mut self) -> Result<JsonToken> {
        let name = self.lex_string()?;
        self.skip_whitespace();
        if self.peek() != Some(b':') {
            return Err(self.unexpected("':' after member name"));
        }
        self.pos += 1;
        self.expect = Expect::Value;
        Ok(JsonToken::PropertyName(name))
    }

    fn lex_end_object(&mut self) -> Result<JsonToken> {
        // Only reachable from object expectations, so the top of the
        // container stack is the object being closed.
        self.pos += 1;
        self.containers.pop();
        self.expect = self.after_value();
        Ok(JsonToken::EndObject)
    }

    fn lex_end_array(&mut self) -> Result<JsonToken> {
        self.pos += 1;
        self.containers.pop();
        self.expect = self.after_value();
        Ok(JsonToken::EndArray)
    }

    /// The expectation that follows a completed value, based on the
    /// enclosing container.
    fn after_value(&self) -> Expect {
        match self.containers.last() {
            Some(Container::Object) => Expect::CommaOrEndObject,
            Some(Container::Array) => Expect::CommaOrEndArray,
            None => Expect::Done,
        }
    }

    fn lex_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.input[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            Ok(())
        } else {
            Err(self.unexpected("a JSON value"))
        }
    }

    fn lex_number(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            match c {
                b'-' | b'+' | b'.' | b'e' | b'E' => self.pos += 1,
                c if c.is_ascii_digit() => self.pos += 1,
                _ => break,
            }
        }
        self.input[start..self.pos].to_string()
    }

    /// Lexes a quoted string, resolving escapes. The cursor must be on the
    /// opening quote.
    fn lex_string(&mut self) -> Result<String> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;
        let bytes = self.input.as_bytes();
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            match bytes.get(self.pos) {
                None => {
                    return Err(FabricMeshError::MalformedStream(
                        "unterminated string".to_string(),
                    ))
                }
                Some(b'"') => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.pos += 1;
                    let escaped = match bytes.get(self.pos) {
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\u{0008}',
                        Some(b'f') => '\u{000c}',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(b'u') => {
                            self.pos += 1;
                            let c = self.lex_unicode_escape()?;
                            out.push(c);
                            run_start = self.pos;
                            continue;
                        }
                        _ => {
                            return Err(FabricMeshError::MalformedStream(
                                "invalid escape sequence".to_string(),
                            ))
                        }
                    };
                    out.push(escaped);
                    self.pos += 1;
                    run_start = self.pos;
                }
                Some(c) if *c < 0x20 => {
                    return Err(FabricMeshError::MalformedStream(
                        "unescaped control character in string".to_string(),
                    ))
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Lexes the four hex digits of a `\u` escape (plus a low-surrogate pair
    /// when required). The cursor must be just past the `u`.
    fn lex_unicode_escape(&mut self) -> Result<char> {
        let high = self.lex_hex4()?;
        if (0xd800..0xdc00).contains(&high) {
            // High surrogate: a \uXXXX low surrogate must follow.
            if !self.input[self.pos..].starts_with("\\u") {
                return Err(FabricMeshError::MalformedStream(
                    "unpaired surrogate in string".to_string(),
                ));
            }
            self.pos += 2;
            let low = self.lex_hex4()?;
            if !(0xdc00..0xe000).contains(&low) {
                return Err(FabricMeshError::MalformedStream(
                    "unpaired surrogate in string".to_string(),
                ));
            }
            let code = 0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00);
            char::from_u32(code).ok_or_else(|| {
                FabricMeshError::MalformedStream("invalid unicode escape".to_string())
            })
        } else {
            char::from_u32(high).ok_or_else(|| {
                FabricMeshError::MalformedStream("unpaired surrogate in string".to_string())
            })
        }
    }

    fn lex_hex4(&mut self) -> Result<u32> {
        let digits = self.input.get(self.pos..self.pos + 4).ok_or_else(|| {
            FabricMeshError::MalformedStream("truncated unicode escape".to_string())
        })?;
        let value = u32::from_str_radix(digits, 16).map_err(|_| {
            FabricMeshError::MalformedStream("invalid unicode escape".to_string())
        })?;
        self.pos += 4;
        Ok(value)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn unexpected(&self, expected: &str) -> FabricMeshError {
        let found = match self.peek() {
            Some(c) => format!("{:?}", c as char),
            None => "end of input".to_string(),
        };
        FabricMeshError::MalformedStream(format!(
            "expected {} at offset {}, found {}",
            expected, self.pos, found
        ))
    }
}
