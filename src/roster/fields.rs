use crate::config::ColumnNames;
use crate::types::{Record, RosterEntry};

/// Normalizes a raw cell value by trimming surrounding whitespace.
pub fn clean(value: &str) -> &str {
    value.trim()
}

/// Finds the position of the column named `column` in `record`.
///
/// An exact header match wins. Otherwise the first header whose trimmed text
/// ends with `column` is used, which tolerates a byte-order mark or stray
/// whitespace in front of a header. When several headers qualify the first in
/// record order wins.
fn find_field(record: &Record, column: &str) -> Option<usize> {
    record
        .iter()
        .position(|(header, _)| header == column)
        .or_else(|| {
            record
                .iter()
                .position(|(header, _)| header.trim().ends_with(column))
        })
}

/// Returns the raw value of the logical column `column`, or `""` if absent.
pub fn resolve_field<'a>(record: &'a Record, column: &str) -> &'a str {
    find_field(record, column)
        .and_then(|idx| record.iter().nth(idx))
        .map(|(_, value)| value)
        .unwrap_or("")
}

/// Resolves the five logical roster fields of `record` into a `RosterEntry`.
///
/// Every column not claimed by a logical field ends up in `extra`.
pub fn entry_from_record(record: &Record, columns: &ColumnNames) -> RosterEntry {
    let mut claimed: Vec<usize> = Vec::with_capacity(5);
    let mut take = |column: &str| -> String {
        match find_field(record, column) {
            Some(idx) => {
                claimed.push(idx);
                record
                    .iter()
                    .nth(idx)
                    .map(|(_, value)| clean(value).to_string())
                    .unwrap_or_default()
            }
            None => String::new(),
        }
    };

    let id = take(&columns.id);
    let name = take(&columns.name);
    let role = take(&columns.role);
    let manager_ref = take(&columns.manager);
    let secondary_ref = take(&columns.secondary);

    let extra = record
        .iter()
        .enumerate()
        .filter(|(idx, _)| !claimed.contains(idx))
        .map(|(_, (header, value))| (header.to_string(), value.to_string()))
        .collect();

    RosterEntry {
        id,
        name,
        role,
        manager_ref,
        secondary_ref,
        extra,
    }
}
