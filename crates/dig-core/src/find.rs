//! Circular search over the record list

use crate::git::Record;

/// The index after `current`, wrapping to 0 past the end.
pub fn next_index(len: usize, current: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// First index matching `pred`, scanning `items[from..]` then `items[..from]`.
pub fn find_from<T, F>(items: &[T], from: usize, pred: F) -> Option<usize>
where
    F: Fn(&T) -> bool,
{
    let from = from.min(items.len());
    items[from..]
        .iter()
        .position(&pred)
        .map(|idx| from + idx)
        .or_else(|| items[..from].iter().position(&pred))
}

/// Resolve a find query against `records`, starting just after `current`.
///
/// Both an exact key match and a title substring match are searched; when
/// both succeed the title match wins. An empty query is contained in every
/// title, so it selects the next record.
pub fn find_record(records: &[Record], query: &str, current: usize) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    let from = next_index(records.len(), current);
    let by_key = find_from(records, from, |record| record.key == query);
    let by_title = find_from(records, from, |record| record.title.contains(query));
    by_title.or(by_key)
}
