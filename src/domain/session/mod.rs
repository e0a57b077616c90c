//! Session domain module.
//!
//! Tracks who is signed in on this client, whether an authentication
//! operation is in flight, and the last error shown to the learner.

mod state;

pub use state::Session;
