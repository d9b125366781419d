//! Data Transfer Objects sent to the agent backend
//!
//! Responses decode straight into the domain types; only request bodies
//! live here.

pub mod job;
pub mod repository;
pub mod template;
