/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core Scheduler implementation.
//!
//! The [`Scheduler`] owns the array between runs, gates runs through its
//! [`RunState`], and executes each accepted run on a dedicated worker thread
//! that delivers frames synchronously to listeners and paces them.

use super::pacing::{CancelToken, Pacer, SharedSpeed};
use super::run::{RunConfig, RunOutcome, RunReport};
use super::state::{RunState, StateCell};
use crate::algorithms::{Algorithm, SortError, SortingBuffer};
use crate::model::{Frame, RunId, SortEvent, Speed, Value};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, error, info, trace, warn};

/// Type alias for frame listener functions.
pub type FrameListener = Arc<dyn Fn(&Frame) + Send + Sync>;

/// Runs one instrumented sort at a time and paces its event stream.
///
/// Listeners are called synchronously on the worker thread, in registration
/// order, once per frame. The worker does not resume the algorithm until
/// every listener has returned and the pacing delay has elapsed, so render
/// latency stalls the sort rather than dropping or reordering frames.
///
/// While a run is active, [`start`](Self::start) and
/// [`replace_values`](Self::replace_values) are silently rejected.
///
/// # Examples
///
/// ```no_run
/// use sortviz::{Algorithm, RunConfig, Scheduler, Speed};
///
/// let mut scheduler = Scheduler::new(vec![5, 3, 8, 1, 9, 2]);
/// scheduler.add_listener(|frame| println!("{} {:?}", frame.event, frame.values));
///
/// let config = RunConfig::new(Algorithm::QuickSort, Speed::from_slider(95), scheduler.values());
/// let handle = scheduler.start(config).expect("scheduler is idle");
/// let report = handle.join().unwrap();
/// assert_eq!(report.values, vec![1, 2, 3, 5, 8, 9]);
/// ```
pub struct Scheduler {
    /// Current lifecycle state.
    state: Arc<StateCell>,

    /// Delay read by the worker before every pause.
    speed: SharedSpeed,

    /// The array between runs; committed back by the worker.
    values: Arc<Mutex<Vec<Value>>>,

    /// Listeners called synchronously for each frame.
    listeners: Vec<FrameListener>,

    /// Cancel token of the active run, if any.
    active: Arc<Mutex<Option<CancelToken>>>,

    /// Join handle of the most recent worker.
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Scheduler {
    /// Creates an idle scheduler owning `values`, paced at the default speed.
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            state: Arc::new(StateCell::default()),
            speed: SharedSpeed::new(Speed::default()),
            values: Arc::new(Mutex::new(values)),
            listeners: Vec::new(),
            active: Arc::new(Mutex::new(None)),
            worker: Mutex::new(None),
        }
    }

    /// Sets the initial pacing speed.
    #[must_use]
    pub fn with_speed(self, speed: Speed) -> Self {
        self.speed.store(speed);
        self
    }

    /// Registers a frame listener.
    ///
    /// Listeners registered after a run has started only see later runs.
    ///
    /// # Arguments
    ///
    /// * `listener` - Function to call for each frame
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&Frame) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Current lifecycle state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state.load()
    }

    /// Returns `true` while a run is active.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    /// Current pacing speed.
    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed.load()
    }

    /// Changes the pacing speed. An active run picks it up at its next pause.
    pub fn set_speed(&self, speed: Speed) {
        self.speed.store(speed);
        debug!(%speed, "pacing speed changed");
    }

    /// Copy of the array as last committed.
    ///
    /// During a run this is the array the run started from; the worker
    /// commits its result when it finishes.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        lock(&self.values).clone()
    }

    /// Length of the array.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.values).len()
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the array.
    ///
    /// Returns `false` without changing anything while a run is active.
    pub fn replace_values(&self, values: Vec<Value>) -> bool {
        let mut current = lock(&self.values);
        if self.is_running() {
            debug!(len = values.len(), "array replacement rejected: a run is active");
            return false;
        }
        *current = values;
        true
    }

    /// Starts a run on a new worker thread.
    ///
    /// The configured array becomes the scheduler's array and the configured
    /// speed becomes the current speed. Returns `None` without side effects
    /// if a run is already active.
    #[must_use = "dropping the handle detaches the run; keep it to join or cancel"]
    pub fn start(&self, config: RunConfig) -> Option<RunHandle> {
        let RunConfig {
            algorithm,
            speed,
            values,
        } = config;

        {
            let mut current = lock(&self.values);
            if !self.state.try_begin() {
                debug!(%algorithm, "start rejected: a run is already active");
                return None;
            }
            current.clone_from(&values);
        }

        self.reap_worker();
        self.speed.store(speed);

        let run_id = RunId::new();
        let (pacer, cancel) = Pacer::new(self.speed.clone());
        *lock(&self.active) = Some(cancel.clone());
        let (report_tx, report_rx) = oneshot::channel();

        let worker = Worker {
            run_id,
            algorithm,
            values,
            listeners: self.listeners.clone(),
            pacer,
            guard: RunGuard {
                state: Arc::clone(&self.state),
                active: Arc::clone(&self.active),
            },
            committed: Arc::clone(&self.values),
        };

        let spawned = thread::Builder::new()
            .name("sort-worker".to_string())
            .spawn(move || worker.run(report_tx));

        match spawned {
            Ok(join) => {
                *lock(&self.worker) = Some(join);
                Some(RunHandle {
                    run_id,
                    cancel,
                    report_rx,
                })
            }
            Err(err) => {
                // The unstarted worker, and with it the run guard, was
                // dropped with the closure, so the state is already idle.
                error!(%run_id, %err, "failed to spawn sort worker");
                None
            }
        }
    }

    /// Cancels the active run, if any. Returns `true` if a run was signalled.
    pub fn cancel(&self) -> bool {
        match lock(&self.active).as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancels any active run and waits for its worker thread to exit.
    ///
    /// Must not be called from a frame listener.
    pub fn shutdown(&self) {
        if self.cancel() {
            info!("scheduler shutting down: cancelling active run");
        }
        self.reap_worker();
    }

    fn reap_worker(&self) {
        let join = lock(&self.worker).take();
        if let Some(join) = join {
            if join.join().is_err() {
                warn!("sort worker panicked");
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("state", &self.state())
            .field("speed", &self.speed())
            .field("len", &self.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Handle to a run executing on a worker thread.
#[derive(Debug)]
pub struct RunHandle {
    run_id: RunId,
    cancel: CancelToken,
    report_rx: oneshot::Receiver<RunReport>,
}

impl RunHandle {
    /// Identifier carried by every frame of this run.
    #[must_use]
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Requests cancellation at the next pacing pause.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that can cancel this run from elsewhere.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Blocks the current thread until the run finishes.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::WorkerLost`] if the worker died before
    /// reporting, e.g. because a listener panicked.
    ///
    /// # Panics
    ///
    /// Panics if called within an asynchronous execution context; use
    /// [`wait`](Self::wait) there instead.
    pub fn join(self) -> Result<RunReport, SchedulerError> {
        self.report_rx
            .blocking_recv()
            .map_err(|_| SchedulerError::WorkerLost)
    }

    /// Waits asynchronously for the run to finish.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::WorkerLost`] if the worker died before
    /// reporting.
    pub async fn wait(self) -> Result<RunReport, SchedulerError> {
        self.report_rx.await.map_err(|_| SchedulerError::WorkerLost)
    }
}

/// Errors that can occur when waiting on a run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// The worker thread exited without producing a report.
    #[error("sort worker exited without reporting")]
    WorkerLost,
}

/// Returns the scheduler to `Idle` when a worker exits, including on unwind.
struct RunGuard {
    state: Arc<StateCell>,
    active: Arc<Mutex<Option<CancelToken>>>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        lock(&self.active).take();
        self.state.finish();
    }
}

/// State moved onto the worker thread for a single run.
struct Worker {
    run_id: RunId,
    algorithm: Algorithm,
    values: Vec<Value>,
    listeners: Vec<FrameListener>,
    pacer: Pacer,
    guard: RunGuard,
    committed: Arc<Mutex<Vec<Value>>>,
}

impl Worker {
    fn run(self, report_tx: oneshot::Sender<RunReport>) {
        let Worker {
            run_id,
            algorithm,
            values,
            listeners,
            pacer,
            guard,
            committed,
        } = self;
        info!(%run_id, %algorithm, len = values.len(), "sort run started");

        let mut frames = 0u64;
        let mut deliver = |event: SortEvent, snapshot: &[Value]| -> Result<(), SortError> {
            frames += 1;
            let frame = Frame::new(run_id, frames, nanos_since_epoch(), event, snapshot.to_vec());
            trace!(%run_id, sequence_num = frames, event = %frame.event, "frame");

            for listener in &listeners {
                listener(&frame);
            }

            if frame.is_terminal() {
                Ok(())
            } else {
                pacer.pause()
            }
        };

        let mut buffer = SortingBuffer::new(values, &mut deliver);
        let result = algorithm.run(&mut buffer);
        let values = buffer.into_values();

        let outcome = match result {
            Ok(()) => RunOutcome::Completed,
            Err(SortError::Cancelled) => RunOutcome::Cancelled,
        };

        lock(&committed).clone_from(&values);
        drop(guard);

        match outcome {
            RunOutcome::Completed => info!(%run_id, %algorithm, frames, "sort run completed"),
            RunOutcome::Cancelled => warn!(%run_id, %algorithm, frames, "sort run cancelled"),
        }

        let _ = report_tx.send(RunReport {
            run_id,
            algorithm,
            outcome,
            frames,
            values,
        });
    }
}

/// Locks a mutex, recovering the data if a listener panicked while it was held.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the current time in nanoseconds since the Unix epoch.
#[inline]
fn nanos_since_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
