/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Instrumented sorting algorithms.
//!
//! Each algorithm is a deterministic sequence of reads, compares, swaps and
//! writes over a [`SortingBuffer`]. Because the buffer is the only producer
//! of events, every algorithm emits its events in program order through the
//! same contract, and none of them can tell whether it is being recorded,
//! paced, or cancelled.
//!
//! # Examples
//!
//! ```
//! use sortviz::algorithms::{Algorithm, EventLog, execute};
//! use sortviz::model::EventKind;
//!
//! let mut log = EventLog::new();
//! let sorted = execute(Algorithm::QuickSort, vec![5, 3, 8, 1, 9, 2], &mut log).unwrap();
//! assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(log.count(EventKind::Sorted), 1);
//! ```

pub mod bubble;
pub mod buffer;
pub mod heap;
pub mod merge;
pub mod quick;

#[cfg(test)]
mod tests;

pub use bubble::BubbleSort;
pub use buffer::{EventLog, EventSink, SortError, SortingBuffer};
pub use heap::HeapSort;
pub use merge::MergeSort;
pub use quick::{QuickSort, partition};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A sorting strategy expressed purely through [`SortingBuffer`] operations.
pub trait InstrumentedSort {
    /// Display name of the strategy.
    fn name(&self) -> &'static str;

    /// Sorts the buffer in place, emitting events as it goes.
    ///
    /// Arrays of length 0 or 1 produce no events.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Cancelled`] if the sink stops the run.
    fn sort<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError>;
}

/// The four selectable algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Lomuto-partition QuickSort.
    #[default]
    QuickSort,
    /// Top-down stable MergeSort.
    MergeSort,
    /// In-place HeapSort.
    HeapSort,
    /// BubbleSort without early exit.
    BubbleSort,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 4] = [
        Self::QuickSort,
        Self::MergeSort,
        Self::HeapSort,
        Self::BubbleSort,
    ];

    /// Display name of the algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::QuickSort => QuickSort.name(),
            Self::MergeSort => MergeSort.name(),
            Self::HeapSort => HeapSort.name(),
            Self::BubbleSort => BubbleSort.name(),
        }
    }

    /// Sorts the buffer without emitting the terminal event.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Cancelled`] if the sink stops the run.
    pub fn sort<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError> {
        match self {
            Self::QuickSort => QuickSort.sort(buffer),
            Self::MergeSort => MergeSort.sort(buffer),
            Self::HeapSort => HeapSort.sort(buffer),
            Self::BubbleSort => BubbleSort.sort(buffer),
        }
    }

    /// Performs a complete run: sorts the buffer, then emits exactly one
    /// `Sorted` event covering the whole array.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Cancelled`] if the sink stops the run; no
    /// `Sorted` event is emitted in that case.
    pub fn run<T: Ord + Clone>(&self, buffer: &mut SortingBuffer<'_, T>) -> Result<(), SortError> {
        self.sort(buffer)?;
        buffer.finish()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}': expected one of QuickSort, MergeSort, HeapSort, BubbleSort")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses an algorithm name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Runs `algorithm` over `values` without pacing and returns the sorted array.
///
/// Every event, including the terminal `Sorted`, goes to `sink`.
///
/// # Errors
///
/// Returns [`SortError::Cancelled`] if the sink stops the run.
pub fn execute<T: Ord + Clone>(
    algorithm: Algorithm,
    values: Vec<T>,
    sink: &mut dyn EventSink<T>,
) -> Result<Vec<T>, SortError> {
    let mut buffer = SortingBuffer::new(values, sink);
    algorithm.run(&mut buffer)?;
    Ok(buffer.into_values())
}
