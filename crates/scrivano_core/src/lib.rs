//! Core data types for the scrivano article generator.
//!
//! This crate provides the foundation data types used across all scrivano
//! interfaces: conversation roles and messages, and the generic request and
//! response types exchanged with chat-completion backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;
mod telemetry;

pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use telemetry::init_telemetry;
