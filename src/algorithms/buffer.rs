/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! The sorting buffer and its event sink.
//!
//! [`SortingBuffer`] owns the array for the duration of a run and is the only
//! thing allowed to mutate it. Its `compare`, `observe`, `swap` and `write`
//! primitives are the sole producers of [`SortEvent`]s, which lets every
//! algorithm share one event contract without repeating instrumentation.

use crate::model::{EventKind, SortEvent};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Errors that can interrupt an instrumented sort.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The run was cancelled between two events.
    #[error("sort run was cancelled")]
    Cancelled,
}

/// Receives every event a [`SortingBuffer`] produces, in program order.
///
/// `values` is the array immediately after the event took effect. Returning
/// an error aborts the algorithm at that point.
pub trait EventSink<T> {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Cancelled`] to stop the running algorithm.
    fn emit(&mut self, event: SortEvent, values: &[T]) -> Result<(), SortError>;
}

impl<T, F> EventSink<T> for F
where
    F: FnMut(SortEvent, &[T]) -> Result<(), SortError>,
{
    fn emit(&mut self, event: SortEvent, values: &[T]) -> Result<(), SortError> {
        self(event, values)
    }
}

/// An unpaced sink that records every event it receives.
///
/// # Examples
///
/// ```
/// use sortviz::{Algorithm, EventLog, execute};
/// use sortviz::model::{EventKind, SortEvent};
///
/// let mut log = EventLog::new();
/// let sorted = execute(Algorithm::BubbleSort, vec![2, 1], &mut log).unwrap();
/// assert_eq!(sorted, vec![1, 2]);
/// assert_eq!(
///     log.events(),
///     &[SortEvent::compare(0, 1), SortEvent::swap(0, 1), SortEvent::sorted(2)]
/// );
/// assert_eq!(log.count(EventKind::Swap), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<SortEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[SortEvent] {
        &self.events
    }

    /// Consumes the log and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<SortEvent> {
        self.events
    }

    /// Number of recorded events of the given kind.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Total number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> EventSink<T> for EventLog {
    fn emit(&mut self, event: SortEvent, _values: &[T]) -> Result<(), SortError> {
        self.events.push(event);
        Ok(())
    }
}

/// Wraps the array being sorted and routes every observable step to a sink.
pub struct SortingBuffer<'a, T> {
    values: Vec<T>,
    sink: &'a mut dyn EventSink<T>,
}

impl<'a, T: Ord + Clone> SortingBuffer<'a, T> {
    /// Creates a buffer over `values` that reports to `sink`.
    pub fn new(values: Vec<T>, sink: &'a mut dyn EventSink<T>) -> Self {
        Self { values, sink }
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads position `i` without producing an event.
    #[inline]
    #[must_use]
    pub fn value_at(&self, i: usize) -> &T {
        &self.values[i]
    }

    /// Current contents, without producing an event.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Compares positions `i` and `j` and emits `Compare{i, j}`.
    ///
    /// # Errors
    ///
    /// Propagates [`SortError::Cancelled`] from the sink.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, SortError> {
        let ordering = self.values[i].cmp(&self.values[j]);
        self.emit(SortEvent::compare(i, j))?;
        Ok(ordering)
    }

    /// Emits the single-slot observation `Compare{k}`.
    ///
    /// # Errors
    ///
    /// Propagates [`SortError::Cancelled`] from the sink.
    pub fn observe(&mut self, k: usize) -> Result<(), SortError> {
        self.emit(SortEvent::observe(k))
    }

    /// Exchanges positions `i` and `j` and emits `Swap{i, j}`.
    ///
    /// # Errors
    ///
    /// Propagates [`SortError::Cancelled`] from the sink.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        self.values.swap(i, j);
        self.emit(SortEvent::swap(i, j))
    }

    /// Stores `value` at position `k` and emits `Swap{k}`.
    ///
    /// # Errors
    ///
    /// Propagates [`SortError::Cancelled`] from the sink.
    pub fn write(&mut self, k: usize, value: T) -> Result<(), SortError> {
        self.values[k] = value;
        self.emit(SortEvent::write(k))
    }

    /// Emits the terminal `Sorted{0..len}` event.
    ///
    /// # Errors
    ///
    /// Propagates [`SortError::Cancelled`] from the sink.
    pub fn finish(&mut self) -> Result<(), SortError> {
        self.emit(SortEvent::sorted(self.values.len()))
    }

    /// Consumes the buffer and returns the array.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    fn emit(&mut self, event: SortEvent) -> Result<(), SortError> {
        debug_assert!(event.within(self.values.len()));
        self.sink.emit(event, &self.values)
    }
}

impl<T: fmt::Debug> fmt::Debug for SortingBuffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortingBuffer")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
