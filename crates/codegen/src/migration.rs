//! Migration patching.
//!
//! The freshly created migration contains a `table.timestamps();` call; the
//! patcher splices one generated schema-builder line per column directly in
//! front of it, copying the sentinel's indentation.

use std::fs;
use std::path::Path;

use modkit_core::{ColumnSpec, ScaffoldError};

/// Line the generated columns are inserted in front of.
pub const TIMESTAMPS_SENTINEL: &str = "table.timestamps();";

/// Render the schema-builder call for one parsed column.
///
/// The type token is emitted verbatim (no validation — a bad token fails when
/// the host project compiles the migration), except `enum`, which is a Rust
/// keyword and renders as `enum_` with its quoted value list. Bare modifiers
/// become zero-argument calls; modifiers that already carry parentheses pass
/// through unchanged.
pub fn schema_line(column: &ColumnSpec) -> String {
    let mut line = if column.column_type == "enum" {
        let values = column
            .values
            .iter()
            .map(|value| format!("\"{}\"", value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("table.enum_(\"{}\", &[{}])", column.name, values)
    } else {
        format!("table.{}(\"{}\")", column.column_type, column.name)
    };

    for modifier in &column.modifiers {
        if modifier.is_empty() {
            continue;
        }
        if modifier.contains('(') {
            line.push('.');
            line.push_str(modifier);
        } else {
            line.push('.');
            line.push_str(modifier);
            line.push_str("()");
        }
    }

    line.push(';');
    line
}

/// Insert the generated column lines into the migration at `path`.
///
/// Returns whether the file was modified. An empty column list leaves the
/// file byte-identical; a missing file or a migration without the sentinel is
/// a silent no-op (migration creation is optional, and a hand-edited file
/// without timestamps is left alone).
pub fn patch_migration(path: &Path, columns: &[ColumnSpec]) -> Result<bool, ScaffoldError> {
    if columns.is_empty() || !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();

    let Some(sentinel_at) = lines
        .iter()
        .position(|line| line.trim() == TIMESTAMPS_SENTINEL)
    else {
        return Ok(false);
    };
    let indent: String = lines[sentinel_at]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();

    let mut patched = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i == sentinel_at {
            for column in columns {
                patched.push_str(&indent);
                patched.push_str(&schema_line(column));
                patched.push('\n');
            }
        }
        patched.push_str(line);
        patched.push('\n');
    }

    fs::write(path, patched)?;
    Ok(true)
}
