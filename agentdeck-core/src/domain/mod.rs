//! Core domain types
//!
//! These types mirror the records returned by the agent backend. They are
//! decoded by the client and owned by the controller; nothing here mutates
//! them after decoding.

pub mod health;
pub mod job;
pub mod repository;
pub mod template;
