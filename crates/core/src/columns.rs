//! Column specification parsing.
//!
//! The user describes migration columns as a single free-text string,
//! e.g. `title:string, content:text, status:enum:draft|published:nullable`.
//! Type and modifier tokens are NOT validated here — an invalid token
//! surfaces when the host project compiles the generated migration.

/// One parsed column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    /// Column type token, `string` when omitted
    pub column_type: String,
    /// Allowed values, populated for `enum` columns only
    pub values: Vec<String>,
    /// Modifier tokens, rendered as chained method calls
    pub modifiers: Vec<String>,
}

/// Parse a column specification string into an ordered column sequence.
///
/// Fields are comma-separated; each field is colon-separated into
/// `name[:type[:modifier...]]`. For the `enum` type the first modifier token
/// is reinterpreted as a `|`-separated list of allowed values. An empty input
/// yields an empty sequence. Duplicate names are last-wins: the later entry
/// replaces the earlier one without changing its position.
pub fn parse_columns(input: &str) -> Vec<ColumnSpec> {
    let mut columns: Vec<ColumnSpec> = Vec::new();

    for field in input.split(',') {
        let field = field.trim();
        if field.is_empty() {
            continue;
        }

        let parts: Vec<&str> = field.split(':').map(str::trim).collect();
        let name = parts[0].to_string();
        let column_type = parts
            .get(1)
            .copied()
            .filter(|t| !t.is_empty())
            .unwrap_or("string")
            .to_string();
        let mut modifiers: Vec<String> = parts
            .get(2..)
            .unwrap_or(&[])
            .iter()
            .map(|m| m.to_string())
            .collect();

        let values = if column_type == "enum" && !modifiers.is_empty() {
            let raw = modifiers.remove(0);
            raw.split('|').map(|v| v.trim().to_string()).collect()
        } else {
            Vec::new()
        };

        let column = ColumnSpec {
            name,
            column_type,
            values,
            modifiers,
        };

        if let Some(existing) = columns.iter_mut().find(|c| c.name == column.name) {
            *existing = column;
        } else {
            columns.push(column);
        }
    }

    columns
}
