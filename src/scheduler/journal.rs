/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Journal trait and in-memory implementation for frame recording.
//!
//! A journal is an append-only log of the [`Frame`]s of a single run. It
//! checks the ordering guarantees as frames arrive (one run, sequence
//! numbers starting at 1 with no gaps) and can fingerprint the event stream
//! so that two runs over the same input can be compared cheaply.

use crate::model::{Frame, Indices, RunId, SortEvent};
use sha2::{Digest, Sha256};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::warn;

/// Errors raised when a frame would break the journal's ordering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// A gap or repeat was detected between expected and found sequence numbers.
    #[error("sequence gap detected: expected {expected}, found {found}")]
    SequenceGap {
        /// The expected next sequence number.
        expected: u64,
        /// The actual sequence number found.
        found: u64,
    },

    /// The frame belongs to a different run than the frames already stored.
    #[error("frame from run {found} appended to journal of run {expected}")]
    RunMismatch {
        /// The run already recorded.
        expected: RunId,
        /// The run of the offending frame.
        found: RunId,
    },

    /// A frame arrived after the terminal `Sorted` frame.
    #[error("frame {sequence_num} appended after the terminal frame")]
    AfterTerminal {
        /// Sequence number of the offending frame.
        sequence_num: u64,
    },
}

/// Append-only frame log for one run.
pub trait Journal {
    /// Appends a new frame.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if the frame is out of order, belongs to
    /// another run, or follows the terminal frame.
    fn append(&mut self, frame: Frame) -> Result<(), JournalError>;

    /// Returns an iterator over all frames with `sequence_num >= from_sequence`.
    fn read_from(&self, from_sequence: u64) -> impl Iterator<Item = &Frame> + '_;

    /// Returns an iterator over frames with `from_sequence <= sequence_num <= to_sequence`.
    fn read_range(&self, from_sequence: u64, to_sequence: u64)
    -> impl Iterator<Item = &Frame> + '_;

    /// Returns the total number of frames stored.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` if no frames have been appended.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sequence number of the last frame, or `None` if empty.
    #[must_use]
    fn last_sequence(&self) -> Option<u64>;

    /// SHA-256 over the events and snapshots, ignoring run ids and timestamps.
    ///
    /// Two runs of the same algorithm over the same input produce the same
    /// digest.
    #[must_use]
    fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for frame in self.read_from(0) {
            hash_event(&mut hasher, &frame.event);
            hasher.update((frame.values.len() as u64).to_le_bytes());
            for value in &frame.values {
                hasher.update(value.to_le_bytes());
            }
        }
        hasher.finalize().into()
    }
}

fn hash_event(hasher: &mut Sha256, event: &SortEvent) {
    let (tag, a, b) = match event {
        SortEvent::Compare(Indices::One(k)) => (0u8, *k, usize::MAX),
        SortEvent::Compare(Indices::Pair(i, j)) => (1, *i, *j),
        SortEvent::Swap(Indices::One(k)) => (2, *k, usize::MAX),
        SortEvent::Swap(Indices::Pair(i, j)) => (3, *i, *j),
        SortEvent::Sorted(range) => (4, range.start, range.end),
    };
    hasher.update([tag]);
    hasher.update((a as u64).to_le_bytes());
    hasher.update((b as u64).to_le_bytes());
}

/// In-memory implementation of [`Journal`].
///
/// # Examples
///
/// ```
/// use sortviz::model::{Frame, RunId, SortEvent};
/// use sortviz::scheduler::journal::{InMemoryJournal, Journal};
///
/// let run_id = RunId::new();
/// let mut journal = InMemoryJournal::new();
/// journal.append(Frame::new(run_id, 1, 0, SortEvent::compare(0, 1), vec![2, 1])).unwrap();
/// journal.append(Frame::new(run_id, 2, 0, SortEvent::swap(0, 1), vec![1, 2])).unwrap();
/// assert!(journal.append(Frame::new(run_id, 4, 0, SortEvent::sorted(2), vec![1, 2])).is_err());
/// assert_eq!(journal.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournal {
    frames: Vec<Frame>,
}

impl InMemoryJournal {
    /// Creates a new empty in-memory journal.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Creates a new in-memory journal with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Returns a slice of all stored frames.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The run recorded so far, if any frame has been appended.
    #[must_use]
    pub fn run_id(&self) -> Option<RunId> {
        self.frames.first().map(|f| f.run_id)
    }

    /// Returns `true` if the terminal `Sorted` frame has been recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames.last().is_some_and(Frame::is_terminal)
    }

    /// Removes every frame so the journal can record another run.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Serializes all frames as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.frames)
    }
}

impl Journal for InMemoryJournal {
    fn append(&mut self, frame: Frame) -> Result<(), JournalError> {
        let expected = self.last_sequence().map_or(1, |last| last + 1);
        if frame.sequence_num != expected {
            return Err(JournalError::SequenceGap {
                expected,
                found: frame.sequence_num,
            });
        }
        if let Some(run_id) = self.run_id() {
            if frame.run_id != run_id {
                return Err(JournalError::RunMismatch {
                    expected: run_id,
                    found: frame.run_id,
                });
            }
        }
        if self.is_complete() {
            return Err(JournalError::AfterTerminal {
                sequence_num: frame.sequence_num,
            });
        }
        self.frames.push(frame);
        Ok(())
    }

    fn read_from(&self, from_sequence: u64) -> impl Iterator<Item = &Frame> + '_ {
        self.frames
            .iter()
            .filter(move |f| f.sequence_num >= from_sequence)
    }

    fn read_range(
        &self,
        from_sequence: u64,
        to_sequence: u64,
    ) -> impl Iterator<Item = &Frame> + '_ {
        self.frames
            .iter()
            .filter(move |f| f.sequence_num >= from_sequence && f.sequence_num <= to_sequence)
    }

    #[inline]
    fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    fn last_sequence(&self) -> Option<u64> {
        self.frames.last().map(|f| f.sequence_num)
    }
}

/// An [`InMemoryJournal`] shared with a scheduler's worker thread.
///
/// # Examples
///
/// ```no_run
/// use sortviz::Scheduler;
/// use sortviz::scheduler::journal::SharedJournal;
///
/// let journal = SharedJournal::new();
/// let mut scheduler = Scheduler::new(vec![3, 2, 1]);
/// scheduler.add_listener(journal.clone().into_listener());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedJournal(Arc<Mutex<InMemoryJournal>>);

impl SharedJournal {
    /// Creates an empty shared journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts this handle into a frame listener that appends every frame.
    ///
    /// Frames that violate ordering are dropped with a warning.
    pub fn into_listener(self) -> impl Fn(&Frame) + Send + Sync + 'static {
        move |frame: &Frame| {
            let mut journal = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(err) = journal.append(frame.clone()) {
                warn!(%err, "frame rejected by journal");
            }
        }
    }

    /// Runs `f` with the locked journal.
    pub fn with<R>(&self, f: impl FnOnce(&InMemoryJournal) -> R) -> R {
        let journal = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&journal)
    }

    /// Copy of all recorded frames.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.with(|j| j.frames().to_vec())
    }

    /// Empties the journal.
    pub fn clear(&self) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
