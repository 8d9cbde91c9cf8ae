//! Domain types for the animagen generation client.
//!
//! Pure data and logic only: request construction and validation, remote
//! job snapshots, the cosmetic poll-progress ramp, and the static style
//! catalog. Everything that talks to the network lives in
//! `animagen-client`.

pub mod error;
pub mod job;
pub mod progress;
pub mod request;
pub mod styles;
