//! Course Portal - client for a course-content backend
//!
//! Holds the learner's session, gates protected pages behind a role check,
//! and loads, filters and browses courses and lessons. Pages are presented
//! through a terminal shell.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
