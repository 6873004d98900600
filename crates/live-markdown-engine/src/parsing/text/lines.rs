use super::span::Span;

/// A single source line with its position.
///
/// `text` excludes the line terminator (`\n`, or `\r\n` with the `\r`
/// trimmed) and `end` points just past the last character of `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo<'a> {
    /// Line content without its terminator. Borrowed from the source.
    pub text: &'a str,
    /// Offset of the first character of the line.
    pub start: usize,
    /// Offset just past `text`, before any terminator.
    pub end: usize,
    /// Zero-based line number.
    pub line_number: usize,
}

impl LineInfo<'_> {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Splits `input` into position-tracked lines.
///
/// Splits on `\n` and trims one trailing `\r`. Always returns at least one
/// line; an input ending with `\n` produces a final empty line. The
/// substrings between consecutive `start`s reassemble the input exactly.
pub fn split_lines(input: &str) -> Vec<LineInfo<'_>> {
    let bytes = input.as_bytes();
    let mut lines = Vec::with_capacity(bytes.iter().filter(|&&b| b == b'\n').count() + 1);
    let mut start = 0usize;

    loop {
        let newline = bytes[start..].iter().position(|&b| b == b'\n');
        let line_end = newline.map_or(bytes.len(), |n| start + n);
        let text_end = if line_end > start && bytes[line_end - 1] == b'\r' {
            line_end - 1
        } else {
            line_end
        };

        lines.push(LineInfo {
            text: &input[start..text_end],
            start,
            end: text_end,
            line_number: lines.len(),
        });

        match newline {
            Some(_) => start = line_end + 1,
            None => break,
        }
    }

    lines
}
