use crate::parsing::{blocks::Block, ranges::MarkdownRange};

/// Panics unless every block (recursively) is in bounds, contains its
/// content, and siblings are ordered and disjoint.
pub fn check(source: &str, blocks: &[Block]) {
    let n = source.len();
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        assert!(
            b.content.start <= b.content.end && b.content.end <= n,
            "content span out of bounds: {:?} (source len: {})",
            b.content,
            n
        );
        assert!(
            b.span.contains(b.content),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content,
            b.span
        );
        for child in &b.children {
            assert!(
                b.span.contains(child.span),
                "child {:?} escapes parent {:?}",
                child.span,
                b.span
            );
        }
        check(source, &b.children);
    }

    for pair in blocks.windows(2) {
        assert!(
            pair[0].span.end <= pair[1].span.start,
            "sibling blocks overlap or are unordered: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }
}

/// Panics unless `ranges` is a valid parser result for `source`: in bounds,
/// on character boundaries, non-empty, sorted by start, and grouped.
pub fn check_ranges(source: &str, ranges: &[MarkdownRange]) {
    for r in ranges {
        assert!(r.length > 0, "zero-length range: {r:?}");
        assert!(r.end() <= source.len(), "range out of bounds: {r:?} (source len: {})", source.len());
        assert!(
            source.is_char_boundary(r.start) && source.is_char_boundary(r.end()),
            "range splits a character: {r:?}"
        );
    }

    for pair in ranges.windows(2) {
        assert!(pair[0].start <= pair[1].start, "ranges not sorted: {pair:?}");
    }

    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            if b.start > a.end() {
                continue;
            }
            assert!(!a.same_style(b), "ungrouped ranges: {a:?} and {b:?}");
        }
    }
}
