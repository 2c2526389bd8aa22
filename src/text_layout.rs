//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::TEXT_LENGTH;

/// Byte range of one laid out line. Text is single-byte, so byte and column counts agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TextLine {
    pub start: usize,
    pub end: usize,
}

impl TextLine {
    pub fn len(&self) -> usize { self.end - self.start }
    pub fn slice<'a>(&self, text: &'a str) -> &'a str { &text[self.start..self.end] }
}

fn push_wrapped_line(lines: &mut Vec<TextLine>, text: &str, line_start: usize, line_end: usize, max_cols: usize) {
    if max_cols == 0 || line_end - line_start <= max_cols {
        lines.push(TextLine { start: line_start, end: line_end });
        return;
    }
    let mut seg_start = line_start;
    let mut cols = 0;
    for (idx, _) in text[line_start..line_end].char_indices() {
        if cols == max_cols {
            lines.push(TextLine { start: seg_start, end: line_start + idx });
            seg_start = line_start + idx;
            cols = 0;
        }
        cols += 1;
    }
    lines.push(TextLine { start: seg_start, end: line_end });
}

/// Breaks `text` at newlines and wherever a line would exceed `max_cols` columns.
/// `max_cols == 0` disables column wrapping. Always yields at least one line.
pub(crate) fn wrap_lines(text: &str, max_cols: usize) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            push_wrapped_line(&mut lines, text, line_start, idx, max_cols);
            line_start = idx + 1;
        }
    }
    push_wrapped_line(&mut lines, text, line_start, text.len(), max_cols);
    lines
}

/// Width in columns of the widest line.
pub(crate) fn widest(lines: &[TextLine]) -> usize { lines.iter().map(TextLine::len).max().unwrap_or(0) }

/// Number of newline separated lines; the empty string has one.
pub fn count_lines(text: &str) -> usize { text.bytes().filter(|b| *b == b'\n').count() + 1 }

/// Returns the `n`-th newline separated line of `text`.
pub fn line(text: &str, n: usize) -> Option<&str> { text.split('\n').nth(n) }

/// Cuts `text` to at most `max_bytes` bytes on a character boundary.
pub(crate) fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Normalizes caller text into the single-byte buffer model: bounded by [`TEXT_LENGTH`] and ASCII only.
pub(crate) fn bounded_text(text: &str) -> String {
    truncate(text, TEXT_LENGTH - 1).chars().map(|c| if c.is_ascii() { c } else { '?' }).collect()
}

/// Shortens `text` to `max_chars`, replacing the tail with `...` when it had to cut.
pub(crate) fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_string();
    }
    let dots = max_chars.min(3);
    let mut out = truncate(text, max_chars - dots).to_string();
    out.push_str(&"..."[..dots]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<'a>(text: &'a str, lines: &[TextLine]) -> Vec<&'a str> { lines.iter().map(|l| l.slice(text)).collect() }

    #[test]
    fn wraps_on_newlines() {
        let text = "ab\ncde\n";
        let lines = wrap_lines(text, 0);
        assert_eq!(parts(text, &lines), vec!["ab", "cde", ""]);
        assert_eq!(widest(&lines), 3);
    }

    #[test]
    fn wraps_on_columns() {
        let text = "abcdefg";
        let lines = wrap_lines(text, 3);
        assert_eq!(parts(text, &lines), vec!["abc", "def", "g"]);
    }

    #[test]
    fn empty_text_is_one_line() {
        let lines = wrap_lines("", 4);
        assert_eq!(lines.len(), 1);
        assert_eq!(widest(&lines), 0);
        assert_eq!(count_lines(""), 1);
    }

    #[test]
    fn counts_and_fetches_lines() {
        assert_eq!(count_lines("A\nB\nC"), 3);
        assert_eq!(line("A\nB\nC", 1), Some("B"));
        assert_eq!(line("A\nB\nC", 3), None);
    }

    #[test]
    fn ellipsis_replaces_tail() {
        assert_eq!(ellipsize("short", 10), "short");
        assert_eq!(ellipsize("a long window title", 8), "a lon...");
        assert_eq!(ellipsize("abcdef", 2), "..");
    }

    #[test]
    fn bounded_text_truncates_and_flattens() {
        let long = "x".repeat(TEXT_LENGTH + 10);
        assert_eq!(bounded_text(&long).len(), TEXT_LENGTH - 1);
        assert_eq!(bounded_text("caf\u{e9}"), "caf?");
    }
}
