use crate::record::{compare, Record};
use std::cmp::Ordering;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    /// Index of a match, or the insertion index that keeps the sequence
    /// sorted when nothing matched.
    pub position: usize,
}

impl SearchResult {
    pub fn found(position: usize) -> Self {
        Self {
            found: true,
            position,
        }
    }

    pub fn not_found(position: usize) -> Self {
        Self {
            found: false,
            position,
        }
    }

    /// Same convention as `slice::binary_search`.
    pub fn into_result(self) -> Result<usize, usize> {
        if self.found {
            Ok(self.position)
        } else {
            Err(self.position)
        }
    }
}

impl From<SearchResult> for Result<usize, usize> {
    fn from(result: SearchResult) -> Self {
        result.into_result()
    }
}

/// Searches a sequence sorted ascending under `comparator`, which receives
/// an element and the target. Among duplicates any matching index may be
/// returned. An unsorted sequence gives an unspecified (but in-bounds)
/// position.
pub fn binary_search_by<T, Q, F>(sequence: &[T], target: &Q, mut comparator: F) -> SearchResult
where
    Q: ?Sized,
    F: FnMut(&T, &Q) -> Ordering,
{
    let mut low = 0;
    let mut high = sequence.len();
    let mut probes = 0usize;

    // Half-open window: it is empty once `low == high`, which is the
    // insertion point.
    while low < high {
        let middle = low + (high - low) / 2;
        probes += 1;

        match comparator(&sequence[middle], target) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => {
                trace!(position = middle, probes, "binary search hit");
                return SearchResult::found(middle);
            }
        }
    }

    trace!(position = low, probes, "binary search miss");
    SearchResult::not_found(low)
}

pub fn binary_search_records(sequence: &[Record], target: &Record) -> SearchResult {
    binary_search_by(sequence, target, compare)
}
