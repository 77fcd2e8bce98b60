/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Recursive QuickSort with Lomuto partitioning.

use super::InstrumentedSort;
use super::buffer::{SortError, SortingBuffer};
use std::cmp::Ordering;

/// QuickSort using the last element of each subrange as the pivot.
///
/// Every scanned element emits `Compare{j, high}`; elements smaller than the
/// pivot are swapped below the running boundary, and the pivot is finally
/// swapped into place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSort;

impl InstrumentedSort for QuickSort {
    fn name(&self) -> &'static str {
        "QuickSort"
    }

    fn sort<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError> {
        match buffer.len() {
            0 | 1 => Ok(()),
            len => quick_sort(buffer, 0, len - 1),
        }
    }
}

fn quick_sort<T: Ord + Clone>(
    buffer: &mut SortingBuffer<'_, T>,
    low: usize,
    high: usize,
) -> Result<(), SortError> {
    if low >= high {
        return Ok(());
    }
    let pivot = partition(buffer, low, high)?;
    if pivot > low {
        quick_sort(buffer, low, pivot - 1)?;
    }
    quick_sort(buffer, pivot + 1, high)
}

/// Partitions `[low, high]` around the value at `high` and returns the
/// pivot's final index `p`.
///
/// Afterwards every value in `[low, p)` is smaller than the pivot and every
/// value in `(p, high]` is greater than or equal to it. Requires
/// `low <= high < buffer.len()`.
///
/// # Errors
///
/// Propagates [`SortError::Cancelled`] from the buffer's sink.
pub fn partition<T: Ord + Clone>(
    buffer: &mut SortingBuffer<'_, T>,
    low: usize,
    high: usize,
) -> Result<usize, SortError> {
    // `boundary` is the next slot for a value smaller than the pivot.
    let mut boundary = low;
    for j in low..high {
        if buffer.compare(j, high)? == Ordering::Less {
            buffer.swap(boundary, j)?;
            boundary += 1;
        }
    }
    buffer.swap(boundary, high)?;
    Ok(boundary)
}
