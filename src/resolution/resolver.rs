use std::collections::HashMap;

use crate::types::*;

/// Resolves references against a roster.
///
/// The exact-id index is built once at construction time; role matching stays
/// a linear scan because substring containment cannot be indexed by key.
pub struct ReferenceResolver<'a> {
    entries: &'a [RosterEntry],
    /// First roster position of each id.
    id_index: HashMap<&'a str, usize>,
}

impl<'a> ReferenceResolver<'a> {
    /// Creates a resolver over `entries`, indexing ids by first occurrence.
    pub fn new(entries: &'a [RosterEntry]) -> Self {
        let mut id_index: HashMap<&'a str, usize> = HashMap::with_capacity(entries.len());
        for (row, entry) in entries.iter().enumerate() {
            id_index.entry(entry.id.as_str()).or_insert(row);
        }
        Self { entries, id_index }
    }

    /// Attempts to resolve a single reference.
    ///
    /// Strategies are tried in order:
    /// 1. **Role substring** -- the first entry whose role contains the
    ///    reference (case-sensitive).
    /// 2. **Exact id** -- the first entry whose id equals the reference.
    ///
    /// An empty reference never resolves. Returns `None` when no strategy
    /// matches. The entry owning the reference is a candidate like any other.
    pub fn resolve(&self, reference: &str) -> Option<ResolvedRef> {
        if reference.is_empty() {
            return None;
        }

        // Strategy 1: role substring
        if let Some(resolved) = self.try_role_match(reference) {
            return Some(resolved);
        }

        // Strategy 2: exact id
        self.try_exact_id_match(reference)
    }

    /// Resolves `reference` and returns only the target id, or `""`.
    pub fn resolve_id(&self, reference: &str) -> String {
        self.resolve(reference)
            .map(|r| r.target_id)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ------------------------------------------------------------------
    // Private helpers
    // ------------------------------------------------------------------

    fn try_role_match(&self, reference: &str) -> Option<ResolvedRef> {
        self.entries
            .iter()
            .position(|entry| entry.role.contains(reference))
            .map(|row| ResolvedRef {
                target_id: self.entries[row].id.clone(),
                strategy: MatchStrategy::RoleSubstring,
                row,
            })
    }

    fn try_exact_id_match(&self, reference: &str) -> Option<ResolvedRef> {
        let row = *self.id_index.get(reference)?;
        Some(ResolvedRef {
            target_id: self.entries[row].id.clone(),
            strategy: MatchStrategy::ExactId,
            row,
        })
    }
}
