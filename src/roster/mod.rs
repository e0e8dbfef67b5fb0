/// Roster input: CSV loading and tolerant column lookup.
///
/// Records keep their headers exactly as read; `fields` decides how a logical
/// column maps onto those headers.
mod fields;
mod reader;

pub use fields::{clean, entry_from_record, resolve_field};
pub use reader::{parse_roster, read_roster, roster_fingerprint, Roster};
