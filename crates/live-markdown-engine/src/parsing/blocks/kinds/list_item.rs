use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{
    blocks::{
        rule::{BlockContext, BlockRule, Processed},
        types::{Block, BlockKind, ListKind, ListMarker, TaskState},
    },
    ranges::{MarkdownRange, RangeKind},
    text::{LineInfo, Span},
};

static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
static ORDERED_TASK_REGEX: OnceLock<Regex> = OnceLock::new();
static BULLET_TASK_REGEX: OnceLock<Regex> = OnceLock::new();
static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();

fn marker_regex() -> &'static Regex {
    MARKER_REGEX.get_or_init(|| {
        Regex::new(r"^[ \t]*(?:[-*+]|[0-9]{1,9}[.)])[ \t]+").expect("Invalid list marker regex")
    })
}

fn ordered_task_regex() -> &'static Regex {
    ORDERED_TASK_REGEX.get_or_init(|| {
        Regex::new(r"^([ \t]*)([0-9]{1,9}[.)])[ \t]+\[([ xX])\][ \t]+")
            .expect("Invalid ordered task regex")
    })
}

fn bullet_task_regex() -> &'static Regex {
    BULLET_TASK_REGEX.get_or_init(|| {
        Regex::new(r"^([ \t]*)([-*+])[ \t]+\[([ xX])\][ \t]+").expect("Invalid task regex")
    })
}

fn bullet_regex() -> &'static Regex {
    BULLET_REGEX.get_or_init(|| Regex::new(r"^([ \t]*)([-*+])[ \t]+").expect("Invalid bullet regex"))
}

fn ordered_regex() -> &'static Regex {
    ORDERED_REGEX
        .get_or_init(|| Regex::new(r"^([ \t]*)([0-9]{1,9}[.)])[ \t]+").expect("Invalid ordered regex"))
}

/// List items, one line each: bullets, ordered items and task boxes.
///
/// There is no loose/tight continuation; the next line is a new block.
pub struct ListItemRule;

/// Capture facts shared by every marker form.
struct Marker {
    /// Offset of the marker within the line (after indentation).
    start: usize,
    /// The bullet char or `digits` + `.`/`)`.
    token: Span,
    /// End of the whole match: marker, spacing and any task box.
    end: usize,
    task: Option<(TaskState, usize)>,
}

impl ListItemRule {
    fn read(caps: &Captures<'_>, task: bool) -> Option<Marker> {
        let indent = caps.get(1)?;
        let token = caps.get(2)?;
        let task = if task {
            let state = match caps.get(3)?.as_str() {
                " " => TaskState::Unchecked,
                _ => TaskState::Checked,
            };
            // The box starts one byte before its check char.
            Some((state, caps.get(3)?.start() - 1))
        } else {
            None
        };
        Some(Marker {
            start: indent.end(),
            token: Span::new(token.start(), token.end()),
            end: caps.get(0)?.end(),
            task,
        })
    }

    fn list_kind(text: &str, token: Span) -> Option<ListKind> {
        let token = token.slice(text);
        let last = token.chars().next_back()?;
        if token.len() == 1 && matches!(last, '-' | '*' | '+') {
            return Some(ListKind::Bullet(last));
        }
        let number = token[..token.len() - 1].parse().ok()?;
        Some(ListKind::Ordered {
            number,
            delimiter: last,
        })
    }
}

impl BlockRule for ListItemRule {
    fn name(&self) -> &'static str {
        "list-item"
    }

    fn matches(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> bool {
        marker_regex().is_match(line.text)
    }

    fn process(&self, line: &LineInfo<'_>, _ctx: &BlockContext<'_, '_>) -> Option<Processed> {
        let text = line.text;
        let marker = [
            (ordered_task_regex(), true),
            (bullet_task_regex(), true),
            (bullet_regex(), false),
            (ordered_regex(), false),
        ]
        .into_iter()
        .find_map(|(re, task)| re.captures(text).and_then(|caps| Self::read(&caps, task)))?;

        let kind = Self::list_kind(text, marker.token)?;
        let at = |offset: usize| line.start + offset;
        let content = Span::new(at(marker.end), line.end);

        let mut block = Block::new(
            BlockKind::ListItem(ListMarker {
                kind,
                task: marker.task.map(|(state, _)| state),
            }),
            line.span(),
            content,
        );

        let whole = Span::new(at(marker.start), at(marker.end));
        let token = Span::new(at(marker.token.start), at(marker.token.end));
        match (kind, marker.task) {
            (ListKind::Bullet(_), None) => {
                block.push_syntax(whole);
                block.push_range(MarkdownRange::over(RangeKind::ListBullet, token));
            }
            (ListKind::Ordered { .. }, None) => {
                block.push_syntax(whole);
                block.push_range(MarkdownRange::over(RangeKind::ListNumber, token));
            }
            (ListKind::Bullet(_), Some((state, _))) => {
                block.push_syntax(whole);
                block.push_range(MarkdownRange::over(task_kind(state), whole));
            }
            (ListKind::Ordered { .. }, Some((state, box_start))) => {
                block.push_range(MarkdownRange::over(RangeKind::ListNumber, token));
                block.push_range(MarkdownRange::over(
                    task_kind(state),
                    Span::new(at(box_start), at(marker.end)),
                ));
            }
        }

        if marker.task.is_some_and(|(state, _)| state == TaskState::Checked) {
            block.push_range(MarkdownRange::over(RangeKind::TaskContentChecked, content));
        }

        Some(Processed::Closed(block))
    }
}

fn task_kind(state: TaskState) -> RangeKind {
    match state {
        TaskState::Checked => RangeKind::TaskChecked,
        TaskState::Unchecked => RangeKind::TaskUnchecked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::BlockRegistry, text::split_lines};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(text: &str) -> Option<Block> {
        let registry = BlockRegistry::builtin();
        let lines = split_lines(text);
        let ctx = BlockContext {
            lines: &lines,
            index: 0,
            registry: &registry,
            rule: Some(3),
        };
        if !ListItemRule.matches(&lines[0], &ctx) {
            return None;
        }
        match ListItemRule.process(&lines[0], &ctx)? {
            Processed::Closed(b) => Some(b),
            Processed::Open(_) => panic!("list items are single-line"),
        }
    }

    #[test]
    fn bullet() {
        let b = item("  - milk").expect("list item");
        assert_eq!(
            b.kind,
            BlockKind::ListItem(ListMarker {
                kind: ListKind::Bullet('-'),
                task: None
            })
        );
        assert_eq!(b.content, Span::new(4, 8));
        assert_eq!(
            b.syntax_ranges,
            vec![
                MarkdownRange::syntax(2, 2),
                MarkdownRange::new(RangeKind::ListBullet, 2, 1),
            ]
        );
    }

    #[test]
    fn ordered() {
        let b = item("12) step").expect("list item");
        assert_eq!(
            b.kind,
            BlockKind::ListItem(ListMarker {
                kind: ListKind::Ordered {
                    number: 12,
                    delimiter: ')'
                },
                task: None
            })
        );
        assert_eq!(
            b.syntax_ranges,
            vec![
                MarkdownRange::syntax(0, 4),
                MarkdownRange::new(RangeKind::ListNumber, 0, 3),
            ]
        );
    }

    #[test]
    fn checked_bullet_task() {
        let b = item("- [x] done").expect("list item");
        assert_eq!(
            b.syntax_ranges,
            vec![
                MarkdownRange::syntax(0, 6),
                MarkdownRange::new(RangeKind::TaskChecked, 0, 6),
                MarkdownRange::new(RangeKind::TaskContentChecked, 6, 4),
            ]
        );
    }

    #[test]
    fn unchecked_ordered_task() {
        let b = item("1. [ ] todo").expect("list item");
        assert_eq!(
            b.syntax_ranges,
            vec![
                MarkdownRange::new(RangeKind::ListNumber, 0, 2),
                MarkdownRange::new(RangeKind::TaskUnchecked, 3, 4),
            ]
        );
        assert_eq!(b.content, Span::new(7, 11));
    }

    #[test]
    fn box_without_trailing_space_is_plain_bullet() {
        let b = item("- [x]").expect("list item");
        let BlockKind::ListItem(marker) = b.kind else {
            panic!("expected list item");
        };
        assert_eq!(marker.task, None);
    }

    #[rstest]
    #[case("-no space")]
    #[case("**bold**")]
    #[case("1234567890. too long")]
    #[case("1.")]
    #[case("text - dash")]
    fn not_items(#[case] text: &str) {
        assert!(item(text).is_none());
    }
}
