/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Execution scheduler for paced sort runs.
//!
//! This module provides a [`Scheduler`] that runs one instrumented algorithm
//! at a time on a dedicated worker thread and delivers its events, in the
//! exact order the algorithm produces them, as [`Frame`](crate::Frame)
//! snapshots to registered listeners.
//!
//! # Architecture
//!
//! - The scheduler is a two-state machine: `Idle -> Running -> Idle`
//! - `start` while running is dropped, not queued
//! - The worker sorts a private copy of the array and hands every listener
//!   an owned snapshot, so nothing outside the worker observes a live array
//! - After each non-terminal frame the worker pauses for the current speed;
//!   a cancel signal cuts the pause short and unwinds the algorithm
//! - On completion one `Sorted` frame covering the whole array is delivered
//!   and the result is committed back before returning to `Idle`
//!
//! # Examples
//!
//! ```no_run
//! use sortviz::{Algorithm, RunConfig, Scheduler, Speed};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scheduler = Scheduler::new(vec![4, 2, 3, 1]);
//! scheduler.add_listener(|frame| {
//!     println!("frame {}: {}", frame.sequence_num, frame.event);
//! });
//!
//! let config = RunConfig::new(Algorithm::BubbleSort, Speed::default(), scheduler.values());
//! if let Some(handle) = scheduler.start(config) {
//!     let report = handle.wait().await?;
//!     assert!(report.is_completed());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod journal;
pub mod pacing;
pub mod run;
pub mod state;

#[cfg(test)]
mod tests;

pub use self::core::{FrameListener, RunHandle, Scheduler, SchedulerError};
pub use journal::{InMemoryJournal, Journal, JournalError, SharedJournal};
pub use pacing::CancelToken;
pub use run::{RunConfig, RunOutcome, RunReport};
pub use state::RunState;
