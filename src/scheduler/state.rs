/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Run state machine.
//!
//! A scheduler is either `Idle` or `Running`. The only transitions are
//! `Idle -> Running` when a run is accepted and `Running -> Idle` when its
//! worker finishes, so the state doubles as a single-permit gate with no
//! queueing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle state of a [`Scheduler`](super::Scheduler).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RunState {
    /// No run is active; the array may be replaced and a run may start.
    #[default]
    Idle = 0,
    /// A worker is executing a run.
    Running = 1,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// Atomic cell holding a [`RunState`].
#[derive(Debug, Default)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    #[inline]
    pub(crate) fn load(&self) -> RunState {
        match self.0.load(Ordering::Acquire) {
            0 => RunState::Idle,
            _ => RunState::Running,
        }
    }

    /// Attempts the `Idle -> Running` transition. Returns `false` if a run
    /// is already active.
    #[inline]
    pub(crate) fn try_begin(&self) -> bool {
        self.0
            .compare_exchange(
                RunState::Idle as u8,
                RunState::Running as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Performs the `Running -> Idle` transition.
    #[inline]
    pub(crate) fn finish(&self) {
        self.0.store(RunState::Idle as u8, Ordering::Release);
    }
}
