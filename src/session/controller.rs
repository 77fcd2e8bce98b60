/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! The session controller.

use super::config::{ConfigError, SessionConfig};
use crate::algorithms::Algorithm;
use crate::model::{ArrayGenerator, Frame, SLIDER_MAX, SLIDER_MIN, Speed, Value, is_valid_size};
use crate::scheduler::{RunConfig, RunHandle, RunState, Scheduler};
use tracing::{debug, info};

/// Controller-side state for one visualizer.
///
/// # Examples
///
/// ```no_run
/// use sortviz::{Algorithm, Session, SessionConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = Session::new(SessionConfig { seed: Some(1), ..Default::default() })?;
/// session.set_algorithm(Algorithm::MergeSort);
/// session.set_speed_slider(99)?;
/// session.set_size(30)?;
///
/// let handle = session.start().expect("no run is active");
/// assert!(!session.shuffle(), "shuffling is rejected mid-run");
/// handle.join()?;
/// assert!(session.values().windows(2).all(|w| w[0] <= w[1]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    algorithm: Algorithm,
    size: usize,
    generator: ArrayGenerator,
    scheduler: Scheduler,
}

impl Session {
    /// Creates a session and generates its first array.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut generator = config
            .seed
            .map_or_else(ArrayGenerator::new, ArrayGenerator::from_seed);
        let values = generator.generate(config.size);
        let scheduler = Scheduler::new(values).with_speed(config.speed());
        info!(
            algorithm = %config.algorithm,
            size = config.size,
            speed = %config.speed(),
            "session created"
        );
        Ok(Self {
            algorithm: config.algorithm,
            size: config.size,
            generator,
            scheduler,
        })
    }

    /// Registers a frame listener on the underlying scheduler.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&Frame) + Send + Sync + 'static,
    {
        self.scheduler.add_listener(listener);
    }

    /// Selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current array length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current pacing speed.
    #[must_use]
    pub fn speed(&self) -> Speed {
        self.scheduler.speed()
    }

    /// Copy of the current array.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.scheduler.values()
    }

    /// State of the underlying scheduler.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.scheduler.state()
    }

    /// Returns `true` while a run is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// The underlying scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Selects the algorithm used by the next [`start`](Self::start).
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Changes the array length and regenerates the array.
    ///
    /// Returns `Ok(false)`, leaving size and array untouched, while a run
    /// is active.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SizeOutOfRange`] if `size` is outside
    /// `[MIN_SIZE, MAX_SIZE]`.
    pub fn set_size(&mut self, size: usize) -> Result<bool, ConfigError> {
        if !is_valid_size(size) {
            return Err(ConfigError::size(size));
        }
        if !self.regenerate(size) {
            debug!(size, "resize rejected: a run is active");
            return Ok(false);
        }
        self.size = size;
        Ok(true)
    }

    /// Maps a raw slider position to a pacing delay and applies it.
    ///
    /// Takes effect at the next pause, including during a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SliderOutOfRange`] if `raw` is outside `[1, 100]`.
    pub fn set_speed_slider(&mut self, raw: u8) -> Result<Speed, ConfigError> {
        if !(SLIDER_MIN..=SLIDER_MAX).contains(&raw) {
            return Err(ConfigError::SliderOutOfRange { raw });
        }
        let speed = Speed::from_slider(raw);
        self.scheduler.set_speed(speed);
        Ok(speed)
    }

    /// Applies a pacing speed directly.
    pub fn set_speed(&mut self, speed: Speed) {
        self.scheduler.set_speed(speed);
    }

    /// Regenerates an array of the current size.
    ///
    /// Returns `false` without changing anything while a run is active.
    pub fn shuffle(&mut self) -> bool {
        let accepted = self.regenerate(self.size);
        if !accepted {
            debug!("shuffle rejected: a run is active");
        }
        accepted
    }

    /// Starts a run of the selected algorithm over the current array.
    ///
    /// Returns `None` while another run is active.
    #[must_use = "dropping the handle detaches the run; keep it to join or cancel"]
    pub fn start(&self) -> Option<RunHandle> {
        let config = RunConfig::new(self.algorithm, self.speed(), self.values());
        self.scheduler.start(config)
    }

    /// Cancels the active run, if any.
    pub fn abort(&self) -> bool {
        self.scheduler.cancel()
    }

    fn regenerate(&mut self, size: usize) -> bool {
        if self.scheduler.is_running() {
            return false;
        }
        let values = self.generator.generate(size);
        self.scheduler.replace_values(values)
    }
}
