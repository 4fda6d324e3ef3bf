use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::ParseErrorKind;
use crate::Position;

/// The single error a failed parse produces.
///
/// Parsing is fail-fast: the first unexpected token aborts the parse and the
/// [`Document`](crate::ast::Document) being filled must be discarded (or
/// [`reset()`](crate::ast::Document::reset)).
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    /// Human-readable primary error message, e.g.
    /// "Expected `:` after argument name, found `}`".
    message: String,

    /// Where the error was detected (the offending token's position).
    position: Position,

    kind: ParseErrorKind,

    notes: ErrorNotes,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        position: Position,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    pub fn with_notes(
        message: impl Into<String>,
        position: Position,
        kind: ParseErrorKind,
        notes: ErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
            notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(ErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic for CLI output.
    ///
    /// ```text
    /// error: Expected `:` after argument name, found `100`
    ///   --> 1:15
    ///    |
    ///  1 | query { posts(first 100) { id } }
    ///    |                     ^^^
    ///    |
    ///    = help: ...
    /// ```
    ///
    /// Without a `source` the snippet is omitted.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}\n",
            self.position.line_start, self.position.char_start,
        ));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
                ErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
        }

        output
    }

    /// Formats this error as `line:column: error: message`.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}: error: {}",
            self.position.line_start, self.position.char_start, self.message,
        )
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_index = (self.position.line_start as usize).checked_sub(1)?;
        let line_content = source_lines(source).nth(line_index)?;
        let display_line_num = self.position.line_start;
        let line_num_width = display_line_num.to_string().len().max(2);

        let col_start = (self.position.char_start as usize).saturating_sub(1);
        let underline_len = if self.position.line_end == self.position.line_start
            && self.position.char_end > self.position.char_start
        {
            (self.position.char_end - self.position.char_start) as usize
        } else {
            1
        };

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start,
        ));
        if !self.notes.is_empty() {
            output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        }
        Some(output)
    }
}

/// Splits `source` on `\n`, `\r\n` and lone `\r`, the line terminators the
/// lexer counts.
fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let remaining = rest?;
        match remaining.find(['\n', '\r']) {
            Some(end) => {
                let terminator_len = if remaining[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&remaining[end + terminator_len..]);
                Some(&remaining[..end])
            },
            None => {
                rest = None;
                Some(remaining)
            },
        }
    })
}
