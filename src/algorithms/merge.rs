/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Top-down MergeSort.

use super::InstrumentedSort;
use super::buffer::{SortError, SortingBuffer};

/// Stable top-down MergeSort.
///
/// Each merge copies both halves aside, then for every destination slot `k`
/// emits `Compare{k}` before choosing a side and `Swap{k}` once the slot has
/// been written. Ties take the left element. Remainders are drained with a
/// `Swap{k}` per slot and no comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSort;

impl InstrumentedSort for MergeSort {
    fn name(&self) -> &'static str {
        "MergeSort"
    }

    fn sort<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError> {
        match buffer.len() {
            0 | 1 => Ok(()),
            len => merge_sort(buffer, 0, len - 1),
        }
    }
}

fn merge_sort<T: Ord + Clone>(
    buffer: &mut SortingBuffer<'_, T>,
    left: usize,
    right: usize,
) -> Result<(), SortError> {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort(buffer, left, mid)?;
        merge_sort(buffer, mid + 1, right)?;
        merge(buffer, left, mid, right)?;
    }
    Ok(())
}

fn merge<T: Ord + Clone>(
    buffer: &mut SortingBuffer<'_, T>,
    left: usize,
    mid: usize,
    right: usize,
) -> Result<(), SortError> {
    let left_part = buffer.values()[left..=mid].to_vec();
    let right_part = buffer.values()[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_part.len() && j < right_part.len() {
        buffer.observe(k)?;
        let next = if left_part[i] <= right_part[j] {
            i += 1;
            left_part[i - 1].clone()
        } else {
            j += 1;
            right_part[j - 1].clone()
        };
        buffer.write(k, next)?;
        k += 1;
    }

    for value in left_part[i..].iter().chain(&right_part[j..]) {
        buffer.write(k, value.clone())?;
        k += 1;
    }
    Ok(())
}
