//! Shared REST plumbing for the course backend.
//!
//! `RestClient` owns the configured `reqwest::Client` and knows how to build
//! endpoint URLs and read error bodies. The auth and catalog adapters build
//! on top of it.

mod client;
mod dto;

pub use client::{RestClient, RestClientConfig, DEFAULT_TIMEOUT};
pub use dto::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest};
