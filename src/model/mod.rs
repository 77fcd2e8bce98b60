/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Shared data model for sort runs.
//!
//! This module defines the array domain (sizes and value ranges), the event
//! vocabulary emitted by instrumented algorithms, the [`Frame`] snapshots
//! delivered to renderers, and the pacing [`Speed`].

pub mod array;
pub mod event;
pub mod frame;
pub mod speed;

#[cfg(test)]
mod tests;

pub use array::{
    ArrayGenerator, DEFAULT_SIZE, MAX_SIZE, MAX_VALUE, MIN_SIZE, MIN_VALUE, Value, is_valid_size,
};
pub use event::{EventKind, Indices, SortEvent};
pub use frame::{Frame, Highlight, RunId};
pub use speed::{DEFAULT_DELAY, MAX_DELAY, MIN_DELAY, SLIDER_MAX, SLIDER_MIN, Speed};
