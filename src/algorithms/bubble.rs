/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Textbook BubbleSort.

use super::InstrumentedSort;
use super::buffer::{SortError, SortingBuffer};
use std::cmp::Ordering;

/// O(n²) BubbleSort.
///
/// There is no early exit on a swap-free pass: an already sorted input still
/// produces the full `n(n-1)/2` comparison schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl InstrumentedSort for BubbleSort {
    fn name(&self) -> &'static str {
        "BubbleSort"
    }

    fn sort<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError> {
        let n = buffer.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                if buffer.compare(j, j + 1)? == Ordering::Greater {
                    buffer.swap(j, j + 1)?;
                }
            }
        }
        Ok(())
    }
}
