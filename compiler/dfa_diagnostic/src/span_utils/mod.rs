//! Span utility functions for diagnostic processing.
//!
//! Computes line and column numbers from byte offsets, used by
//! `DiagnosticQueue` for ordering and by the terminal emitter for
//! `file:line:col` locations.
//!
//! For repeated lookups on the same source, use [`LineOffsetTable`] which
//! pre-computes line offsets for O(log L) lookup instead of O(n) scanning.

use dfa_ir::Span;

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use dfa_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] = 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset using binary search.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_idx = (line - 1) as usize;
        let line_start = self.offsets.get(line_idx).copied().unwrap_or(0) as usize;
        (line, column(source, line_start, offset as usize))
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Compute the 1-based line number where a span starts.
///
/// Note: For repeated lookups, use [`LineOffsetTable`] instead.
pub fn line_number(source: &str, span: Span) -> u32 {
    offset_to_line_col(source, span.start).0
}

/// Compute 1-based (line, column) from a byte offset.
///
/// Note: For repeated lookups, use [`LineOffsetTable`] instead.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = offset as usize;
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, &byte) in source.as_bytes().iter().enumerate() {
        if i >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    (line, column(source, line_start, offset))
}

/// 1-based character column of `offset` within the line starting at `line_start`.
fn column(source: &str, line_start: usize, offset: usize) -> u32 {
    let end = offset.min(source.len());
    let col_chars = source
        .get(line_start..end)
        .map_or(0, |text| text.chars().count());
    u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1
}
