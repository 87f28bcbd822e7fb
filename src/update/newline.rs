//! Line-ending detection and line splitting shared by the parser and writers.
//!
//! Line boundaries are `\n`, `\r\n`, a bare `\r`, and the other Unicode
//! separators `\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`, `\u{2028}`, `\u{2029}`.

/// Line terminator style applied to every line a writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF if the text contains `\r\n` anywhere, LF otherwise (including empty text).
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over `(content, terminator)` pairs. The last line may have an
/// empty terminator; empty text yields nothing.
#[derive(Debug, Clone)]
pub struct LinesWithEnds<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LinesWithEnds<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((idx, ch)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some((line, ""));
        };

        let mut end = idx + ch.len_utf8();
        if ch == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        let item = (&self.rest[..idx], &self.rest[idx..end]);
        self.rest = &self.rest[end..];
        Some(item)
    }
}

pub fn lines_with_ends(text: &str) -> LinesWithEnds<'_> {
    LinesWithEnds { rest: text }
}

/// Line contents without terminators.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    lines_with_ends(text).map(|(content, _)| content)
}
