//! A byte-level GraphQL lexer.
//!
//! The [`Lexer`] is a small `Copy` cursor (byte offset plus line/column) over
//! whichever [`Input`] it is handed on each call. It never allocates: every
//! token literal is a [`ByteSliceReference`] into that input.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_arena::Input;
//! use libgraphql_arena::Lexer;
//! use libgraphql_arena::token::Keyword;
//!
//! let input = Input::from_string("{ name }");
//! let mut lexer = Lexer::new();
//! assert_eq!(lexer.read(&input).keyword, Keyword::CurlyBraceOpen);
//! let name = lexer.read(&input);
//! assert_eq!(input.byte_slice(name.literal), b"name");
//! assert_eq!(lexer.read(&input).keyword, Keyword::CurlyBraceClose);
//! assert_eq!(lexer.read(&input).keyword, Keyword::Eof);
//! ```

use crate::ByteSliceReference;
use crate::Input;
use crate::Position;
use crate::token::Keyword;
use crate::token::LexErrorKind;
use crate::token::Token;

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// A GraphQL lexer over an [`Input`].
///
/// Whitespace, line terminators, commas, the byte order mark and `#`
/// comments are insignificant: [`read()`](Self::read) skips them.
/// [`peek()`](Self::peek) can optionally report them so callers can tell
/// whether two tokens are adjacent.
#[derive(Clone, Copy, Debug)]
pub struct Lexer {
    /// Current byte offset into the input.
    offset: usize,

    /// Current 1-based line.
    line: u32,

    /// Current 1-based UTF-8 character column.
    column: u32,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Rewinds to the start of the input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes and returns the next significant token.
    ///
    /// Once the end of input is reached every further call returns an
    /// [`Keyword::Eof`] token.
    pub fn read(&mut self, input: &Input) -> Token {
        let bytes = input.raw_bytes();
        self.skip_insignificant(bytes);

        let start = self.mark();
        let Some(&byte) = bytes.get(self.offset) else {
            return self.finish(Keyword::Eof, start);
        };

        match byte {
            b'&' => self.single(bytes, Keyword::Ampersand, start),
            b'@' => self.single(bytes, Keyword::At, start),
            b'!' => self.single(bytes, Keyword::Bang, start),
            b':' => self.single(bytes, Keyword::Colon, start),
            b'}' => self.single(bytes, Keyword::CurlyBraceClose, start),
            b'{' => self.single(bytes, Keyword::CurlyBraceOpen, start),
            b'$' => self.single(bytes, Keyword::Dollar, start),
            b'=' => self.single(bytes, Keyword::Equals, start),
            b'-' => self.single(bytes, Keyword::Minus, start),
            b')' => self.single(bytes, Keyword::ParenClose, start),
            b'(' => self.single(bytes, Keyword::ParenOpen, start),
            b'|' => self.single(bytes, Keyword::Pipe, start),
            b']' => self.single(bytes, Keyword::SquareBracketClose, start),
            b'[' => self.single(bytes, Keyword::SquareBracketOpen, start),
            b'.' => self.lex_ellipsis(bytes, start),
            b'"' => self.lex_string(bytes, start),
            b'0'..=b'9' => self.lex_number(bytes, start),
            b if is_name_start(b) => self.lex_name(bytes, start),
            _ => self.lex_invalid_character(bytes, start),
        }
    }

    /// Returns the keyword of the next token without consuming it.
    ///
    /// With `ignore_whitespace == false`, insignificant input directly at the
    /// cursor is reported as [`Keyword::Whitespace`] or [`Keyword::Comment`]
    /// instead of being skipped.
    pub fn peek(&self, input: &Input, ignore_whitespace: bool) -> Keyword {
        if !ignore_whitespace {
            let rest = &input.raw_bytes()[self.offset.min(input.len())..];
            match rest.first() {
                Some(b' ' | b'\t' | b',' | b'\n' | b'\r') => {
                    return Keyword::Whitespace;
                },
                Some(b'#') => return Keyword::Comment,
                _ if rest.starts_with(BYTE_ORDER_MARK) => {
                    return Keyword::Whitespace;
                },
                _ => (),
            }
        }
        self.peek_token(input).keyword
    }

    /// Returns the next significant token without consuming it.
    pub fn peek_token(&self, input: &Input) -> Token {
        let mut probe = *self;
        probe.read(input)
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn mark(&self) -> (usize, u32, u32) {
        (self.offset, self.line, self.column)
    }

    /// Builds a token spanning from `start` to the cursor.
    fn finish(&self, keyword: Keyword, start: (usize, u32, u32)) -> Token {
        let (start_offset, line, column) = start;
        Token::new(
            keyword,
            ByteSliceReference::new(start_offset as u32, self.offset as u32),
            Position::new(line, column, self.line, self.column),
        )
    }

    fn finish_error(&self, error: LexErrorKind, start: (usize, u32, u32)) -> Token {
        Token {
            error: Some(error),
            ..self.finish(Keyword::Error, start)
        }
    }

    /// Consumes `count` bytes, tracking line terminators (`\n`, `\r`,
    /// `\r\n`).
    fn advance(&mut self, bytes: &[u8], count: usize) {
        let end = (self.offset + count).min(bytes.len());
        while self.offset < end {
            match bytes[self.offset] {
                b'\n' => {
                    let after_cr =
                        self.offset > 0 && bytes[self.offset - 1] == b'\r';
                    if !after_cr {
                        self.line += 1;
                        self.column = 1;
                    }
                },
                b'\r' => {
                    self.line += 1;
                    self.column = 1;
                },
                b => {
                    if !is_utf8_continuation(b) {
                        self.column += 1;
                    }
                },
            }
            self.offset += 1;
        }
    }

    /// Consumes `count` bytes known not to contain line terminators.
    fn advance_within_line(&mut self, bytes: &[u8], count: usize) {
        let end = (self.offset + count).min(bytes.len());
        let chars = bytes[self.offset..end]
            .iter()
            .filter(|b| !is_utf8_continuation(**b))
            .count();
        self.column += chars as u32;
        self.offset = end;
    }

    fn skip_insignificant(&mut self, bytes: &[u8]) {
        loop {
            match bytes.get(self.offset) {
                Some(b' ' | b'\t' | b',') => self.advance_within_line(bytes, 1),
                Some(b'\n' | b'\r') => self.advance(bytes, 1),
                Some(b'#') => {
                    let rest = &bytes[self.offset..];
                    let len = memchr::memchr2(b'\n', b'\r', rest)
                        .unwrap_or(rest.len());
                    self.advance_within_line(bytes, len);
                },
                Some(0xEF) if bytes[self.offset..].starts_with(BYTE_ORDER_MARK) => {
                    self.advance_within_line(bytes, BYTE_ORDER_MARK.len());
                },
                _ => return,
            }
        }
    }

    fn single(
        &mut self,
        bytes: &[u8],
        keyword: Keyword,
        start: (usize, u32, u32),
    ) -> Token {
        self.advance_within_line(bytes, 1);
        self.finish(keyword, start)
    }

    // =========================================================================
    // Token lexing
    // =========================================================================

    /// Lexes `...`, or an error for one or two dots.
    fn lex_ellipsis(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        if bytes[self.offset..].starts_with(b"...") {
            self.advance_within_line(bytes, 3);
            return self.finish(Keyword::Ellipsis, start);
        }
        let dots = bytes[self.offset..]
            .iter()
            .take_while(|b| **b == b'.')
            .count();
        self.advance_within_line(bytes, dots);
        self.finish_error(LexErrorKind::InvalidEllipsis, start)
    }

    /// Lexes a name. Names match `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn lex_name(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        let len = bytes[self.offset..]
            .iter()
            .take_while(|b| is_name_continue(**b))
            .count();
        self.advance_within_line(bytes, len);
        self.finish(Keyword::Ident, start)
    }

    /// Lexes an unsigned integer or float literal.
    ///
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A number directly followed by a name character or `.` is invalid.
    fn lex_number(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        let mut is_float = false;

        if bytes[self.offset] == b'0' {
            self.advance_within_line(bytes, 1);
            if bytes.get(self.offset).is_some_and(u8::is_ascii_digit) {
                return self.lex_number_error(bytes, start);
            }
        } else {
            self.advance_within_line(bytes, count_digits(&bytes[self.offset..]));
        }

        if bytes.get(self.offset) == Some(&b'.') {
            let fraction_digits = count_digits(&bytes[self.offset + 1..]);
            if fraction_digits == 0 {
                return self.lex_number_error(bytes, start);
            }
            is_float = true;
            self.advance_within_line(bytes, 1 + fraction_digits);
        }

        if let Some(b'e' | b'E') = bytes.get(self.offset) {
            is_float = true;
            self.advance_within_line(bytes, 1);
            if let Some(b'+' | b'-') = bytes.get(self.offset) {
                self.advance_within_line(bytes, 1);
            }
            let exponent_digits = count_digits(&bytes[self.offset..]);
            if exponent_digits == 0 {
                return self.lex_number_error(bytes, start);
            }
            self.advance_within_line(bytes, exponent_digits);
        }

        if bytes
            .get(self.offset)
            .is_some_and(|b| *b == b'.' || is_name_start(*b))
        {
            return self.lex_number_error(bytes, start);
        }

        let keyword = if is_float { Keyword::Float } else { Keyword::Integer };
        self.finish(keyword, start)
    }

    /// Consumes the rest of a malformed number and returns an error token.
    fn lex_number_error(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        let len = bytes[self.offset..]
            .iter()
            .take_while(|b| is_name_continue(**b) || matches!(b, b'.' | b'+' | b'-'))
            .count();
        self.advance_within_line(bytes, len);
        self.finish_error(LexErrorKind::InvalidNumber, start)
    }

    /// Lexes a `"..."` string or a `"""..."""` block string.
    fn lex_string(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        if bytes[self.offset..].starts_with(b"\"\"\"") {
            return self.lex_block_string(bytes, start);
        }

        self.advance_within_line(bytes, 1);
        let content_start = self.offset;
        loop {
            let rest = &bytes[self.offset..];
            let stop = memchr::memchr3(b'"', b'\\', b'\n', rest).unwrap_or(rest.len());
            if let Some(cr) = memchr::memchr(b'\r', &rest[..stop]) {
                self.advance_within_line(bytes, cr);
                return self.finish_error(LexErrorKind::UnterminatedString, start);
            }
            self.advance_within_line(bytes, stop);

            match bytes.get(self.offset) {
                Some(b'"') => {
                    let content = ByteSliceReference::new(
                        content_start as u32,
                        self.offset as u32,
                    );
                    self.advance_within_line(bytes, 1);
                    return Token {
                        literal: content,
                        ..self.finish(Keyword::String, start)
                    };
                },
                Some(b'\\') => {
                    let escaped_is_char = bytes
                        .get(self.offset + 1)
                        .is_some_and(|b| *b != b'\n' && *b != b'\r');
                    let len = if escaped_is_char { 2 } else { 1 };
                    self.advance_within_line(bytes, len);
                },
                _ => {
                    return self.finish_error(LexErrorKind::UnterminatedString, start);
                },
            }
        }
    }

    fn lex_block_string(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        self.advance_within_line(bytes, 3);
        let content_start = self.offset;
        loop {
            let rest = &bytes[self.offset..];
            let Some(found) = memchr::memmem::find(rest, b"\"\"\"") else {
                self.advance(bytes, rest.len());
                return self.finish_error(LexErrorKind::UnterminatedBlockString, start);
            };
            if found > 0 && rest[found - 1] == b'\\' {
                // `\"""` is an escaped triple quote, part of the content.
                self.advance(bytes, found + 3);
                continue;
            }
            self.advance(bytes, found);
            let content = ByteSliceReference::new(content_start as u32, self.offset as u32);
            self.advance_within_line(bytes, 3);
            return Token {
                literal: content,
                ..self.finish(Keyword::BlockString, start)
            };
        }
    }

    /// Consumes one (possibly multi-byte) character that can't start a token.
    fn lex_invalid_character(&mut self, bytes: &[u8], start: (usize, u32, u32)) -> Token {
        let len = match bytes[self.offset] {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.advance_within_line(bytes, len);
        self.finish_error(LexErrorKind::InvalidCharacter, start)
    }
}

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
