use super::MarkdownRange;

/// Re-expresses byte-offset ranges in UTF-16 code units of `source`.
///
/// Android and iOS text buffers index UTF-16; the engine works in bytes.
/// Input sorted by `start` (as the parser returns it) converts in one pass.
pub fn to_utf16(source: &str, ranges: &[MarkdownRange]) -> Vec<MarkdownRange> {
    let mut walker = Walker::default();
    ranges
        .iter()
        .map(|r| MarkdownRange {
            start: walker.units_at(source, r.start),
            length: units_in(source, r.start, r.end()),
            ..*r
        })
        .collect()
}

/// Remembers the last converted position so sorted input never rescans.
#[derive(Default)]
struct Walker {
    byte: usize,
    units: usize,
}

impl Walker {
    fn units_at(&mut self, source: &str, byte: usize) -> usize {
        if byte < self.byte {
            *self = Self::default();
        }
        self.units += units_in(source, self.byte, byte);
        self.byte = byte;
        self.units
    }
}

fn units_in(source: &str, start: usize, end: usize) -> usize {
    source
        .get(start..end)
        .map_or(0, |s| s.chars().map(char::len_utf16).sum())
}
