/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Observation events emitted by instrumented algorithms.
//!
//! Every comparison, swap (or slot write) and the terminal completion of a
//! run is surfaced as a [`SortEvent`]. Events carry only positions; the
//! values they refer to travel separately as a snapshot in a
//! [`Frame`](super::Frame).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Discriminant of a [`SortEvent`], used by renderers to pick a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A read-only observation of one or two positions.
    Compare,
    /// One or two positions were just written.
    Swap,
    /// The run finished; every position holds its final value.
    Sorted,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare => write!(f, "compare"),
            Self::Swap => write!(f, "swap"),
            Self::Sorted => write!(f, "sorted"),
        }
    }
}

/// The one or two array positions named by a compare or swap event.
///
/// Pairs keep the order in which the algorithm named them, so `Pair(4, 0)`
/// and `Pair(0, 4)` are different observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indices {
    /// A single-slot observation, as used by merge.
    One(usize),
    /// Two positions.
    Pair(usize, usize),
}

impl Indices {
    /// Iterates the referenced positions in the order they were named.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        let (first, second) = match self {
            Self::One(i) => (i, None),
            Self::Pair(i, j) => (i, Some(j)),
        };
        std::iter::once(first).chain(second)
    }

    /// Returns `true` if `index` is one of the referenced positions.
    #[inline]
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        match self {
            Self::One(i) => i == index,
            Self::Pair(i, j) => i == index || j == index,
        }
    }
}

/// A single observation produced during a sort run.
///
/// # Examples
///
/// ```
/// use sortviz::model::{EventKind, SortEvent};
///
/// let event = SortEvent::compare(3, 7);
/// assert_eq!(event.kind(), EventKind::Compare);
/// assert!(event.touches(7));
/// assert_eq!(event.indices().collect::<Vec<_>>(), vec![3, 7]);
///
/// let done = SortEvent::sorted(4);
/// assert_eq!(done.indices().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortEvent {
    /// Read-only observation; the array is unchanged.
    Compare(Indices),
    /// The named positions were just written. For a pair this is a
    /// structural exchange; for a single slot it marks a merge write.
    Swap(Indices),
    /// Terminal event covering the full index range.
    Sorted(Range<usize>),
}

impl SortEvent {
    /// Comparison of two positions.
    #[inline]
    #[must_use]
    pub fn compare(i: usize, j: usize) -> Self {
        Self::Compare(Indices::Pair(i, j))
    }

    /// Single-slot observation.
    #[inline]
    #[must_use]
    pub fn observe(k: usize) -> Self {
        Self::Compare(Indices::One(k))
    }

    /// Exchange of two positions.
    #[inline]
    #[must_use]
    pub fn swap(i: usize, j: usize) -> Self {
        Self::Swap(Indices::Pair(i, j))
    }

    /// Final value written into a single slot.
    #[inline]
    #[must_use]
    pub fn write(k: usize) -> Self {
        Self::Swap(Indices::One(k))
    }

    /// Terminal event for an array of `len` elements.
    #[inline]
    #[must_use]
    pub fn sorted(len: usize) -> Self {
        Self::Sorted(0..len)
    }

    /// Returns the kind of this event.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Compare(_) => EventKind::Compare,
            Self::Swap(_) => EventKind::Swap,
            Self::Sorted(_) => EventKind::Sorted,
        }
    }

    /// Iterates every position this event references.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (named, range) = match self {
            Self::Compare(ix) | Self::Swap(ix) => (Some(*ix), 0..0),
            Self::Sorted(range) => (None, range.clone()),
        };
        named.into_iter().flat_map(Indices::positions).chain(range)
    }

    /// Returns `true` if this event references `index`.
    #[must_use]
    pub fn touches(&self, index: usize) -> bool {
        match self {
            Self::Compare(ix) | Self::Swap(ix) => ix.contains(index),
            Self::Sorted(range) => range.contains(&index),
        }
    }

    /// Returns `true` if every referenced position lies in `[0, len)`.
    #[must_use]
    pub fn within(&self, len: usize) -> bool {
        self.indices().all(|i| i < len)
    }
}

impl fmt::Display for SortEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(Indices::One(k)) | Self::Swap(Indices::One(k)) => {
                write!(f, "{}{{{}}}", self.kind(), k)
            }
            Self::Compare(Indices::Pair(i, j)) | Self::Swap(Indices::Pair(i, j)) => {
                write!(f, "{}{{{}, {}}}", self.kind(), i, j)
            }
            Self::Sorted(range) => write!(f, "sorted{{{}..{}}}", range.start, range.end),
        }
    }
}
