/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! In-place HeapSort.

use super::InstrumentedSort;
use super::buffer::{SortError, SortingBuffer};

/// HeapSort over an implicit max-heap.
///
/// The heap is built by sifting down from the last parent to the root. The
/// root is then repeatedly swapped with the last unsorted slot (`Swap{i, 0}`)
/// and the reduced heap is repaired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapSort;

impl InstrumentedSort for HeapSort {
    fn name(&self) -> &'static str {
        "HeapSort"
    }

    fn sort<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError> {
        let n = buffer.len();
        for i in (0..n / 2).rev() {
            sift_down(buffer, n, i)?;
        }
        for end in (1..n).rev() {
            buffer.swap(end, 0)?;
            sift_down(buffer, end, 0)?;
        }
        Ok(())
    }
}

/// Restores max-heap order below `i` within the first `n` slots.
///
/// Child reads are silent; only an actual repair emits `Compare{i, largest}`
/// followed by `Swap{i, largest}`.
fn sift_down<T: Ord + Clone>(
    buffer: &mut SortingBuffer<'_, T>,
    n: usize,
    i: usize,
) -> Result<(), SortError> {
    let mut largest = i;
    let (left, right) = (2 * i + 1, 2 * i + 2);
    if left < n && buffer.value_at(left) > buffer.value_at(largest) {
        largest = left;
    }
    if right < n && buffer.value_at(right) > buffer.value_at(largest) {
        largest = right;
    }
    if largest == i {
        return Ok(());
    }
    buffer.compare(i, largest)?;
    buffer.swap(i, largest)?;
    sift_down(buffer, n, largest)
}
