/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Frames handed to renderers.
//!
//! A [`Frame`] pairs one [`SortEvent`] with an owned snapshot of the array
//! taken right after the event, so a renderer never holds a reference into
//! the array the worker is still mutating.

use super::array::Value;
use super::event::{EventKind, SortEvent};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a single sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a new random run identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Visual classification of a single bar in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// Not referenced by the current event.
    Default,
    /// Referenced by a compare event.
    Compare,
    /// Referenced by a swap or write event.
    Swap,
    /// Part of the terminal sorted range.
    Sorted,
}

impl Highlight {
    /// Hex fill colour conventionally used for this highlight.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Default => "#A9CCE3",
            Self::Compare => "#F7DC6F",
            Self::Swap => "#E74C3C",
            Self::Sorted => "#58D68D",
        }
    }
}

impl From<EventKind> for Highlight {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Compare => Self::Compare,
            EventKind::Swap => Self::Swap,
            EventKind::Sorted => Self::Sorted,
        }
    }
}

/// One paced observation delivered to frame listeners.
///
/// Sequence numbers start at 1 for every run and grow by exactly one per
/// frame. The terminal `Sorted` frame, when present, is always the last.
///
/// # Examples
///
/// ```
/// use sortviz::model::{Frame, Highlight, RunId, SortEvent};
///
/// let frame = Frame::new(RunId::new(), 1, 0, SortEvent::swap(0, 1), vec![1, 2, 3]);
/// assert_eq!(frame.highlight(0), Highlight::Swap);
/// assert_eq!(frame.highlight(2), Highlight::Default);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// The run this frame belongs to.
    pub run_id: RunId,

    /// Position of this frame within its run, starting at 1.
    pub sequence_num: u64,

    /// Nanosecond timestamp taken when the frame was built.
    pub timestamp_ns: u64,

    /// The observation being delivered.
    pub event: SortEvent,

    /// Array contents right after the event.
    pub values: Vec<Value>,
}

impl Frame {
    /// Creates a new frame.
    #[must_use]
    pub fn new(
        run_id: RunId,
        sequence_num: u64,
        timestamp_ns: u64,
        event: SortEvent,
        values: Vec<Value>,
    ) -> Self {
        Self {
            run_id,
            sequence_num,
            timestamp_ns,
            event,
            values,
        }
    }

    /// Returns the kind of the carried event.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    /// Returns `true` if this is the terminal frame of its run.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind() == EventKind::Sorted
    }

    /// Classification of the bar at `index` for this frame.
    #[must_use]
    pub fn highlight(&self, index: usize) -> Highlight {
        if self.event.touches(index) {
            self.kind().into()
        } else {
            Highlight::Default
        }
    }

    /// Classification of every bar, in index order.
    #[must_use]
    pub fn highlights(&self) -> Vec<Highlight> {
        (0..self.values.len()).map(|i| self.highlight(i)).collect()
    }
}
