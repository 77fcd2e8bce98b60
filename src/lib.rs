/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # sortviz
//!
//! An instrumentation and pacing engine for sorting algorithm visualizers.
//!
//! Four textbook algorithms (QuickSort, MergeSort, HeapSort and BubbleSort)
//! are expressed against a [`SortingBuffer`] whose compare, swap and write
//! primitives are the only operations that produce observation events. A
//! [`Scheduler`] runs one algorithm at a time on a dedicated worker thread,
//! delivers each event synchronously to registered listeners as an immutable
//! [`Frame`] snapshot, and pauses for a configurable [`Speed`] after every
//! delivery.
//!
//! # Architecture
//!
//! - [`model`]: the array domain, event vocabulary, frames and pacing speed
//! - [`algorithms`]: the sorting buffer and the four instrumented strategies
//! - [`scheduler`]: the single-run state machine, worker, pacing and journal
//! - [`session`]: a controller facade with configuration and array generation
//!
//! # Examples
//!
//! ```no_run
//! use sortviz::{Algorithm, Session, SessionConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(SessionConfig::default())?;
//! session.add_listener(|frame| {
//!     println!("#{} {:?}", frame.sequence_num, frame.event);
//! });
//! session.set_algorithm(Algorithm::HeapSort);
//!
//! if let Some(handle) = session.start() {
//!     let report = handle.join()?;
//!     println!("delivered {} frames", report.frames);
//! }
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod model;
pub mod scheduler;
pub mod session;

pub use algorithms::{
    Algorithm, BubbleSort, EventLog, EventSink, HeapSort, InstrumentedSort, MergeSort, QuickSort,
    SortError, SortingBuffer, execute,
};
pub use model::{
    ArrayGenerator, EventKind, Frame, Highlight, Indices, RunId, SortEvent, Speed, Value,
};
pub use scheduler::{
    RunConfig, RunHandle, RunOutcome, RunReport, RunState, Scheduler, SchedulerError,
};
pub use session::{ConfigError, Session, SessionConfig};
