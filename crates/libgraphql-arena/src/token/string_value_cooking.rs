//! Turning the raw content of string tokens into their semantic value.
//!
//! The arena stores string values exactly as they appear in the source (so
//! they print back unchanged). Escape processing and block-string indentation
//! stripping only happen when a caller asks for the value.

use std::borrow::Cow;

/// Error returned when cooking a GraphQL string value fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StringValueError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// An invalid Unicode escape sequence was encountered (e.g. `\u{ZZZZ}`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    /// The raw bytes are not valid UTF-8.
    #[error("String value is not valid UTF-8")]
    InvalidUtf8,
}

/// Cooks the raw content of a string token (the bytes between the quotes).
///
/// - For single-line strings processes `\n`, `\r`, `\t`, `\\`, `\"`, `\/`,
///   `\b`, `\f`, `\uXXXX` and `\u{X...}`.
/// - For block strings applies the indentation stripping algorithm of the
///   GraphQL spec, then processes the `\"""` escape only.
pub fn cook_string_value(
    raw: &[u8],
    block_string: bool,
) -> Result<Cow<'_, str>, StringValueError> {
    let raw = std::str::from_utf8(raw).map_err(|_| StringValueError::InvalidUtf8)?;
    if block_string {
        Ok(Cow::Owned(cook_block_string(raw)))
    } else if !raw.contains('\\') {
        Ok(Cow::Borrowed(raw))
    } else {
        cook_single_line_string(raw).map(Cow::Owned)
    }
}

fn cook_single_line_string(content: &str) -> Result<String, StringValueError> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(StringValueError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(StringValueError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(result)
}

/// Cooks a Unicode escape sequence after seeing `\u`.
fn cook_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, StringValueError> {
    let braced = chars.peek() == Some(&'{');
    if braced {
        chars.next();
    }

    let mut hex = String::with_capacity(4);
    loop {
        if !braced && hex.len() == 4 {
            break;
        }
        match chars.next() {
            Some('}') if braced => break,
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(StringValueError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            },
            None => {
                return Err(StringValueError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            },
        }
    }

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| StringValueError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Returns `true` if the line consists only of GraphQL `WhiteSpace` (space
/// and tab).
fn is_graphql_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn cook_block_string(content: &str) -> String {
    let content = content.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content
        .split("\r\n")
        .flat_map(|segment| segment.split(['\n', '\r']))
        .collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_graphql_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let first_non_blank = lines.iter().position(|line| !is_graphql_blank(line));
    let last_non_blank = lines.iter().rposition(|line| !is_graphql_blank(line));
    let (Some(first), Some(last)) = (first_non_blank, last_non_blank) else {
        return String::new();
    };

    let mut result = String::with_capacity(content.len());
    for (i, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        if i > first {
            result.push('\n');
        }
        if i == 0 {
            result.push_str(line);
        } else {
            result.push_str(line.get(common_indent..).unwrap_or(""));
        }
    }
    result
}
