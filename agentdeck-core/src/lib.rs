//! Agentdeck Core
//!
//! Core types shared by the agentdeck client and controller.
//!
//! This crate contains:
//! - Domain types: Jobs, repositories, templates and backend health
//! - DTOs: Request bodies sent to the agent backend
//! - Schema: Shape checks applied to payloads after decoding

pub mod domain;
pub mod dto;
pub mod schema;

pub use schema::{SchemaError, Validate};
