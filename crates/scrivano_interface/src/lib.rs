//! Trait definitions for chat-completion backends.
//!
//! This crate defines the narrow model-invocation boundary used by the
//! pipeline. Backends implement [`ChatDriver`]; everything above the driver
//! treats the model as an opaque text-in, text-out collaborator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::ChatDriver;
