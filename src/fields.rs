//! Whitespace-delimited field extraction.

use crate::error::LineError;

/// Selects the 1-based `index`-th whitespace-delimited field of `line`.
///
/// Runs of whitespace count as one separator and leading/trailing
/// whitespace produces no empty fields. The selected field is trimmed of
/// leading/trailing colons so formats that wrap durations in `:` still
/// yield a parseable token; inner colons (clock-form durations) survive.
pub fn extract_field(line: &str, index: usize) -> Result<&str, LineError> {
    debug_assert!(index >= 1);
    let mut found = 0;
    for field in line.split_whitespace() {
        found += 1;
        if found == index {
            return Ok(field.trim_matches(':'));
        }
    }
    Err(LineError::FieldIndex { index, found })
}
