//! The merge pipeline: Expand -> Deduplicate -> Sort -> Collapse.
//!
//! Each stage consumes a sequence and returns a new one. Entries are in
//! file-load order on the way in; the first definition of any target wins.

use std::collections::{HashMap, HashSet};

use crate::attachment::{AttachmentItem, AttachmentKind};
use crate::entry::Entry;
use crate::light::Light;

/// Run every stage over entries loaded in priority order.
pub fn merge(entries: Vec<Entry>) -> Vec<Entry> {
    let loaded = entries.len();
    let expanded = expand(&entries);
    let deduped = dedupe(expanded);
    let sorted = sort(deduped);
    let collapsed = collapse(sorted);
    tracing::info!(loaded, merged = collapsed.len(), "merged light placer entries");
    collapsed
}

// ---------------------------------------------------------------------------
// Expand
// ---------------------------------------------------------------------------

/// Split every entry into canonical single-target entries, keeping order.
pub fn expand(entries: &[Entry]) -> Vec<Entry> {
    let expanded: Vec<Entry> = entries.iter().flat_map(Entry::expand).collect();
    tracing::debug!(entries = entries.len(), canonical = expanded.len(), "expanded entries");
    expanded
}

// ---------------------------------------------------------------------------
// Deduplicate
// ---------------------------------------------------------------------------

/// Keep only the first canonical entry for each target.
pub fn dedupe(entries: Vec<Entry>) -> Vec<Entry> {
    let before = entries.len();
    let mut seen: HashSet<AttachmentItem> = HashSet::with_capacity(before);
    let deduped: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| match entry.target() {
            Some(target) => {
                let first = seen.insert(target.clone());
                if !first {
                    tracing::debug!(%target, "dropping later definition");
                }
                first
            }
            None => true,
        })
        .collect();
    tracing::debug!(before, after = deduped.len(), "deduplicated entries");
    deduped
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Order canonical entries by target; see [`AttachmentItem::sort_key`].
pub fn sort(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by_cached_key(|entry| entry.target().map(|target| target.sort_key()));
    entries
}

// ---------------------------------------------------------------------------
// Collapse
// ---------------------------------------------------------------------------

/// Merge entries of the same kind whose lights are identical.
///
/// Each group is emitted once, at the position of its first member, with the
/// targets of later members appended in order.
pub fn collapse(entries: Vec<Entry>) -> Vec<Entry> {
    let before = entries.len();

    let (membership, group_count) = {
        let mut groups: HashMap<(AttachmentKind, &[Light]), usize> = HashMap::new();
        let membership: Vec<usize> = entries
            .iter()
            .map(|entry| {
                let next = groups.len();
                *groups.entry((entry.kind(), entry.lights())).or_insert(next)
            })
            .collect();
        (membership, groups.len())
    };

    let mut merged: Vec<Option<Entry>> = (0..group_count).map(|_| None).collect();
    for (entry, group) in entries.into_iter().zip(membership) {
        match &mut merged[group] {
            Some(head) => head.absorb(entry),
            slot @ None => *slot = Some(entry),
        }
    }

    let collapsed: Vec<Entry> = merged.into_iter().flatten().collect();
    tracing::debug!(before, after = collapsed.len(), "collapsed entries");
    collapsed
}
