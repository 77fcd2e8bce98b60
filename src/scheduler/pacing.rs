/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Pacing and cancellation between events.
//!
//! After each delivered frame the worker waits on its cancel channel for the
//! current delay. A timeout means "keep going"; a cancel signal wakes the
//! worker immediately and unwinds the algorithm.

use crate::algorithms::SortError;
use crate::model::Speed;
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Speed cell shared between the scheduler and its worker.
///
/// The worker reads it fresh before every pause, so changes apply from the
/// next pause onwards.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedSpeed(Arc<AtomicU64>);

impl SharedSpeed {
    pub(crate) fn new(speed: Speed) -> Self {
        Self(Arc::new(AtomicU64::new(speed.as_nanos())))
    }

    #[inline]
    pub(crate) fn load(&self) -> Speed {
        Speed::from_nanos(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn store(&self, speed: Speed) {
        self.0.store(speed.as_nanos(), Ordering::Relaxed);
    }
}

/// Handle used to abort a run between two events.
///
/// Cloning is cheap; every clone signals the same run.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Sender<()>,
}

impl CancelToken {
    /// Requests cancellation. Repeated calls are harmless.
    pub fn cancel(&self) {
        // A full channel already carries a pending cancel.
        let _ = self.tx.try_send(());
    }
}

/// Worker-side half of a [`CancelToken`] that also times the pauses.
#[derive(Debug)]
pub(crate) struct Pacer {
    speed: SharedSpeed,
    cancel_rx: Receiver<()>,
}

impl Pacer {
    /// Creates a pacer and the token that cancels it.
    pub(crate) fn new(speed: SharedSpeed) -> (Self, CancelToken) {
        let (tx, cancel_rx) = channel::bounded(1);
        (Self { speed, cancel_rx }, CancelToken { tx })
    }

    /// Sleeps for the current delay unless cancelled first.
    pub(crate) fn pause(&self) -> Result<(), SortError> {
        match self.cancel_rx.recv_timeout(self.speed.load().delay()) {
            Err(RecvTimeoutError::Timeout) => Ok(()),
            Ok(()) | Err(RecvTimeoutError::Disconnected) => Err(SortError::Cancelled),
        }
    }
}
