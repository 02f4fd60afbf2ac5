/*!
Chunk boundaries.

Splits `len` items into contiguous, non-overlapping ranges that cover every item exactly once.
*/
use std::ops::Range;

/// Split `0..len` into at most `degree` contiguous ranges of `ceil(len / degree)` items.
///
/// The last range may be shorter, and empty ranges are not returned,
/// so that fewer than `degree` ranges can be returned when `len < degree`.
/// A `degree` of 0 is treated as 1.
/// # Example
/// ```
/// use paracorpus::processing::chunks::chunk_ranges;
///
/// assert_eq!(chunk_ranges(10, 3), vec![0..4, 4..8, 8..10]);
/// assert_eq!(chunk_ranges(2, 4), vec![0..1, 1..2]);
/// assert!(chunk_ranges(0, 4).is_empty());
/// ```
pub fn chunk_ranges(len: usize, degree: usize) -> Vec<Range<usize>> {
    let degree = degree.max(1);
    let chunk_len = (len + degree - 1) / degree;

    (0..degree)
        .map(|i| {
            let start = (i * chunk_len).min(len);
            let end = ((i + 1) * chunk_len).min(len);
            start..end
        })
        .filter(|range| !range.is_empty())
        .collect()
}
