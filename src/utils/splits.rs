use log::trace;
use std::ops::Range;

/// Every way of cutting `0..len` into a non-empty left and right part,
/// ordered by split point.
pub fn binary_splits(len: usize) -> Vec<(Range<usize>, Range<usize>)> {
    trace!("Generating binary splits for length {}", len);

    if len < 2 {
        return Vec::new();
    }

    (1..len).map(|split| (0..split, split..len)).collect()
}
