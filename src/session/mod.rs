/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Controller-side session facade.
//!
//! A [`Session`] holds what a control surface edits (algorithm, size and
//! speed), generates arrays, and forwards runs to its
//! [`Scheduler`](crate::Scheduler). Requests that would disturb an active run (start,
//! resize, shuffle) are dropped silently rather than reported as errors.

pub mod config;
pub mod controller;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, SessionConfig};
pub use controller::Session;
