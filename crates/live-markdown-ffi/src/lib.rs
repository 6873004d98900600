//! UniFFI bindings for live-markdown mobile text inputs
//!
//! Hosts install a [`ParserHandle`] (or use the default parser through
//! [`parse_markdown`]), call it synchronously on each edit, and drop the
//! handle when the input goes away. Offsets crossing the boundary are UTF-16
//! code units, the native string index on Android and iOS. The length limit
//! is the one exception: it counts UTF-8 bytes of the source.

use live_markdown_config::Config;
use live_markdown_engine::{
    self as engine, MarkdownParser, MarkdownRange, ParserConfig, TableAlignment,
    parsing::ranges::to_utf16,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid parser config: {reason}")]
    InvalidConfig { reason: String },
}

// ============ Parser Handle ============

/// A configured parser owned by the host.
///
/// Parsing borrows the handle immutably, so one handle may be shared across
/// threads without locking.
#[derive(uniffi::Object)]
pub struct ParserHandle {
    inner: MarkdownParser,
}

#[uniffi::export]
impl ParserHandle {
    /// Installs a parser with the built-in rules and the given length limit,
    /// in UTF-8 bytes of the source.
    #[uniffi::constructor]
    pub fn new(max_parsable_length: u64) -> Result<Self, FfiError> {
        if max_parsable_length == 0 {
            return Err(FfiError::InvalidConfig {
                reason: "max_parsable_length must be greater than zero".to_string(),
            });
        }
        let max_parsable_length =
            usize::try_from(max_parsable_length).map_err(|e| FfiError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self {
            inner: MarkdownParser::builtin().with_config(ParserConfig {
                max_parsable_length,
            }),
        })
    }

    /// Installs a parser configured from the `[parser]` section of a TOML
    /// file. `~` and `$VAR` in the path are expanded. A missing file yields
    /// the defaults.
    #[uniffi::constructor]
    pub fn from_config_file(path: String) -> Result<Self, FfiError> {
        let config = Config::load_from_path(&path)
            .map_err(|e| FfiError::InvalidConfig {
                reason: e.to_string(),
            })?
            .unwrap_or_else(|| {
                log::debug!("no config at {path}; using defaults");
                Config::default()
            });

        Ok(Self {
            inner: MarkdownParser::builtin().with_config(config.parser),
        })
    }

    /// Parses `source`, returning ranges in UTF-16 code units.
    pub fn parse(&self, source: String) -> Vec<MarkdownRangeDto> {
        convert(&source, &self.inner.parse(&source))
    }

    /// Longest accepted source, in UTF-8 bytes (not UTF-16 units).
    pub fn max_parsable_length(&self) -> u64 {
        self.inner.config().max_parsable_length as u64
    }
}

// ============ DTOs ============

/// One style range, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MarkdownRangeDto {
    /// Wire name of the range kind (e.g., "h1", "bold", "blockquote-marker")
    pub kind: String,
    pub start: u32,
    pub length: u32,
    /// Blockquote nesting depth, 0 for every other kind
    pub depth: u32,
    pub table: Option<TableCellDto>,
}

impl MarkdownRangeDto {
    fn from_engine(range: MarkdownRange) -> Self {
        Self {
            kind: range.kind.as_str().to_string(),
            start: clamp_u32(range.start),
            length: clamp_u32(range.length),
            depth: range.depth.unwrap_or(0),
            table: range.table.map(|cell| TableCellDto {
                column: cell.column,
                column_count: cell.column_count,
                alignment: cell.alignment.map(|a| {
                    match a {
                        TableAlignment::Left => "left",
                        TableAlignment::Center => "center",
                        TableAlignment::Right => "right",
                    }
                    .to_string()
                }),
            }),
        }
    }
}

/// Table cell metadata for table range kinds.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TableCellDto {
    pub column: u32,
    pub column_count: u32,
    /// "left", "center" or "right"; absent when the column declares none
    pub alignment: Option<String>,
}

// ============ Standalone Functions ============

/// Parses `source` with the default parser; offsets are UTF-16 code units.
#[uniffi::export]
pub fn parse_markdown(source: String) -> Vec<MarkdownRangeDto> {
    convert(&source, &engine::parse_markdown(&source))
}

fn convert(source: &str, ranges: &[MarkdownRange]) -> Vec<MarkdownRangeDto> {
    to_utf16(source, ranges)
        .into_iter()
        .map(MarkdownRangeDto::from_engine)
        .collect()
}

fn clamp_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| {
        log::warn!("offset {n} exceeds u32; clamping");
        u32::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use live_markdown_config::Config;
    use live_markdown_engine::{RangeKind, TableCell};
    use tempfile::TempDir;

    fn dto(kind: &str, start: u32, length: u32) -> MarkdownRangeDto {
        MarkdownRangeDto {
            kind: kind.to_string(),
            start,
            length,
            depth: 0,
            table: None,
        }
    }

    #[test]
    fn test_parse_heading() {
        let ranges = parse_markdown("# Hello".to_string());
        assert_eq!(ranges, vec![dto("syntax", 0, 2), dto("h1", 2, 5)]);
    }

    #[test]
    fn test_offsets_are_utf16() {
        // "é" is two UTF-8 bytes but one UTF-16 unit.
        let ranges = parse_markdown("é **b**".to_string());
        assert_eq!(
            ranges,
            vec![dto("syntax", 2, 2), dto("bold", 4, 1), dto("syntax", 5, 2)]
        );
    }

    #[test]
    fn test_astral_chars_count_two_units() {
        let ranges = parse_markdown("🎉 *i*".to_string());
        assert_eq!(
            ranges,
            vec![dto("syntax", 3, 1), dto("italic", 4, 1), dto("syntax", 5, 1)]
        );
    }

    #[test]
    fn test_blockquote_depth() {
        let ranges = parse_markdown(">> deep".to_string());
        let quote = ranges.iter().find(|r| r.kind == "blockquote").unwrap();
        assert_eq!(quote.depth, 2);
    }

    #[test]
    fn test_handle_respects_limit() {
        let handle = ParserHandle::new(4).unwrap();
        assert_eq!(handle.max_parsable_length(), 4);
        assert_eq!(handle.parse("# Hi".to_string()).len(), 2);
        assert!(handle.parse("# Hey".to_string()).is_empty());
    }

    #[test]
    fn test_limit_counts_utf8_bytes() {
        // Four UTF-16 units but eight UTF-8 bytes.
        let handle = ParserHandle::new(6).unwrap();
        assert!(handle.parse("éééé".to_string()).is_empty());
        assert!(!handle.parse("# éé".to_string()).is_empty());
    }

    #[test]
    fn test_handle_from_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nmax_parsable_length = 4\n").unwrap();

        let handle =
            ParserHandle::from_config_file(config_file.to_string_lossy().into_owned()).unwrap();

        assert_eq!(handle.max_parsable_length(), 4);
        assert!(handle.parse("# Hey".to_string()).is_empty());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        let handle = ParserHandle::from_config_file(missing.to_string_lossy().into_owned()).unwrap();

        assert_eq!(
            handle.max_parsable_length(),
            live_markdown_engine::parsing::MAX_PARSABLE_LENGTH as u64
        );
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nmax_parsable_length = 0\n").unwrap();

        let err = ParserHandle::from_config_file(config_file.to_string_lossy().into_owned())
            .err()
            .unwrap();

        assert!(matches!(err, FfiError::InvalidConfig { .. }));
        assert!(err.to_string().contains("must be greater than zero"));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = ParserHandle::new(0).err().unwrap();
        assert!(matches!(err, FfiError::InvalidConfig { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid parser config: max_parsable_length must be greater than zero"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_markdown(String::new()).is_empty());
    }

    #[test]
    fn test_table_cell_conversion() {
        let range = MarkdownRange::new(RangeKind::TableCell, 0, 3).with_table(TableCell {
            column: 1,
            alignment: Some(TableAlignment::Center),
            column_count: 3,
        });
        let dto = MarkdownRangeDto::from_engine(range);
        assert_eq!(dto.kind, "table-cell");
        assert_eq!(
            dto.table,
            Some(TableCellDto {
                column: 1,
                column_count: 3,
                alignment: Some("center".to_string()),
            })
        );
    }
}
