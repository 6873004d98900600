use super::MarkdownRange;

/// Normalizes a raw range list for consumers.
///
/// 1. zero-length ranges are dropped
/// 2. ranges are stable-sorted by `start`, so production order breaks ties
/// 3. ranges of the same style that touch or overlap an earlier one are merged
///    into it
///
/// The output is therefore sorted by `start`, and no two same-style ranges in
/// it touch or overlap.
pub fn sort_and_group(mut ranges: Vec<MarkdownRange>) -> Vec<MarkdownRange> {
    ranges.retain(|r| r.length > 0);
    ranges.sort_by_key(|r| r.start);

    let mut out: Vec<MarkdownRange> = Vec::with_capacity(ranges.len());
    // Index into `out` of the latest range per style; styles are few.
    let mut latest: Vec<usize> = Vec::new();

    for range in ranges {
        let slot = latest
            .iter()
            .position(|&i| out[i].same_style(&range));

        match slot {
            Some(slot) if range.start <= out[latest[slot]].end() => {
                let last = &mut out[latest[slot]];
                let end = last.end().max(range.end());
                last.length = end - last.start;
            }
            Some(slot) => {
                latest[slot] = out.len();
                out.push(range);
            }
            None => {
                latest.push(out.len());
                out.push(range);
            }
        }
    }

    out
}
