//! Character classes, indentation arithmetic and link sub-scanners.
//!
//! All positions are byte offsets into `&str`; every function returns
//! positions on character boundaries.

/// Tab stops are every four columns.
pub const TAB_STOP: usize = 4;

/// Indentation (in columns) at which a line becomes indented code.
pub const CODE_INDENT: usize = 4;

/// Most leading spaces a block marker may carry before it stops being one.
pub const MAX_MARKER_INDENT: usize = 3;

/// ASCII punctuation as CommonMark defines it: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
#[inline(always)]
pub fn is_ascii_punctuation(c: char) -> bool {
    matches!(c, '!'..='/' | ':'..='@' | '['..='`' | '{'..='~')
}

/// Unicode whitespace: tab, line feed, form feed, carriage return, space and
/// the non-ASCII space separators.
#[inline(always)]
pub fn is_unicode_whitespace(c: char) -> bool {
    match c {
        ' ' | '\t' | '\n' | '\x0C' | '\r' => true,
        c if c.is_ascii() => false,
        c => c.is_whitespace(),
    }
}

/// A line containing only spaces and tabs (or nothing).
pub fn is_blank_line(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

/// Number of leading `' '` bytes (tabs are not counted).
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Columns covered by the leading whitespace, expanding tabs to the next stop.
pub fn count_leading_columns(line: &str) -> usize {
    let mut columns = 0;
    for b in line.bytes() {
        match b {
            b' ' => columns += 1,
            b'\t' => columns += TAB_STOP - columns % TAB_STOP,
            _ => break,
        }
    }
    columns
}

/// Removes leading spaces/tabs covering at most `max_columns` columns.
///
/// A tab that would overshoot `max_columns` is left in place.
pub fn strip_leading_columns(line: &str, max_columns: usize) -> &str {
    let bytes = line.as_bytes();
    let mut removed = 0;
    let mut i = 0;
    while i < bytes.len() && removed < max_columns {
        match bytes[i] {
            b' ' => removed += 1,
            b'\t' => {
                let width = TAB_STOP - removed % TAB_STOP;
                if removed + width > max_columns {
                    break;
                }
                removed += width;
            }
            _ => break,
        }
        i += 1;
    }
    &line[i..]
}

/// Length in bytes of the indentation that makes `line` indented code, or 0
/// when the line is blank or indented fewer than [`CODE_INDENT`] columns.
pub fn code_indent_len(line: &str) -> usize {
    if is_blank_line(line) {
        return 0;
    }
    let mut columns = 0;
    let mut chars = 0;
    for b in line.bytes() {
        if columns >= CODE_INDENT {
            break;
        }
        match b {
            b' ' => columns += 1,
            b'\t' => columns += TAB_STOP - columns % TAB_STOP,
            _ => break,
        }
        chars += 1;
    }
    if columns >= CODE_INDENT { chars } else { 0 }
}

/// The character ending just before `pos`, or `' '` at the start of text.
///
/// Start and end of text count as whitespace for flanking purposes.
pub fn char_before(text: &str, pos: usize) -> char {
    text.get(..pos)
        .and_then(|head| head.chars().next_back())
        .unwrap_or(' ')
}

/// The character starting at `pos`, or `' '` at the end of text.
pub fn char_at(text: &str, pos: usize) -> char {
    text.get(pos..)
        .and_then(|tail| tail.chars().next())
        .unwrap_or(' ')
}

/// Length of the line break starting at `pos` (`\n` → 1, `\r\n` → 2).
pub fn newline_len(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes.get(pos) {
        Some(b'\n') => Some(1),
        Some(b'\r') if bytes.get(pos + 1) == Some(&b'\n') => Some(2),
        _ => None,
    }
}

/// Finds the end of a link destination beginning at `start`.
///
/// Two forms are accepted:
/// - `<...>`: no unescaped `<` and no line break before the closing `>`
/// - bare: runs until unescaped whitespace or an unbalanced `)`; parentheses
///   must balance
///
/// Returns the offset just past the destination.
pub fn find_link_destination_end(text: &str, start: usize) -> Option<usize> {
    let tail = text.get(start..).filter(|t| !t.is_empty())?;

    if tail.starts_with('<') {
        let mut chars = tail.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '>' => return Some(start + i + 1),
                '<' | '\n' => return None,
                '\\' => {
                    chars.next();
                }
                _ => {}
            }
        }
        return None;
    }

    let mut depth = 0usize;
    let mut end = tail.len();
    let mut chars = tail.char_indices();
    while let Some((i, c)) = chars.next() {
        if is_unicode_whitespace(c) {
            end = i;
            break;
        }
        match c {
            '\\' => {
                chars.next();
            }
            '(' => depth += 1,
            ')' if depth == 0 => {
                end = i;
                break;
            }
            ')' => depth -= 1,
            _ => {}
        }
    }

    // An escape at the very end may have stepped past the last char.
    let end = end.min(tail.len());
    (depth == 0).then_some(start + end)
}

/// Finds the end of a link title beginning at `start`.
///
/// Titles are delimited by `"..."`, `'...'` or `(...)`. Returns the offset
/// just past the closing delimiter.
pub fn find_link_title_end(text: &str, start: usize) -> Option<usize> {
    let tail = text.get(start..)?;
    let close = match tail.chars().next()? {
        '"' => '"',
        '\'' => '\'',
        '(' => ')',
        _ => return None,
    };

    let mut chars = tail.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        if c == close {
            return Some(start + i + 1);
        }
        if c == '\\' {
            chars.next();
        }
    }
    None
}

/// Skips spaces, tabs and line breaks starting at `pos`.
pub fn skip_link_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while let Some(b' ' | b'\t' | b'\n' | b'\r') = bytes.get(pos) {
        pos += 1;
    }
    pos
}
