/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Run configuration and completion reports.

use crate::algorithms::Algorithm;
use crate::model::{RunId, Speed, Value};
use serde::{Deserialize, Serialize};

/// Everything needed to start a run.
///
/// # Examples
///
/// ```
/// use sortviz::{Algorithm, RunConfig, Speed};
///
/// let config = RunConfig::new(Algorithm::MergeSort, Speed::from_slider(90), vec![3, 1, 2]);
/// assert_eq!(config.values.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Algorithm to execute.
    pub algorithm: Algorithm,

    /// Pause applied after each delivered frame.
    pub speed: Speed,

    /// Array to sort. It becomes the scheduler's array when the run starts.
    pub values: Vec<Value>,
}

impl RunConfig {
    /// Creates a new run configuration.
    #[must_use]
    pub fn new(algorithm: Algorithm, speed: Speed, values: Vec<Value>) -> Self {
        Self {
            algorithm,
            speed,
            values,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The algorithm returned and the terminal `Sorted` frame was delivered.
    Completed,
    /// The run was cancelled between two frames; no `Sorted` frame was sent.
    Cancelled,
}

/// Summary returned once a run's worker has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Identifier shared by every frame of the run.
    pub run_id: RunId,

    /// Algorithm that was executed.
    pub algorithm: Algorithm,

    /// How the run ended.
    pub outcome: RunOutcome,

    /// Number of frames delivered to listeners, including the terminal one.
    pub frames: u64,

    /// The array as committed back to the scheduler.
    pub values: Vec<Value>,
}

impl RunReport {
    /// Returns `true` if the run reached its terminal `Sorted` frame.
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }
}
