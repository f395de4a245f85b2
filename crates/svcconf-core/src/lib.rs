//! svcconf core: JSON tree, method path codec, and the shared error surface.
//!
//! This crate knows nothing about method-config tables or policy values. It
//! provides the pieces every table is built from: an order- and
//! duplicate-preserving JSON tree, the canonical `/service/method` path
//! form, and interned path handles.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `SvcConfError`/`Result` so a malformed
//! service config can never take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod json;
pub mod path;

/// Shared result type.
pub use error::{ErrorKind, Result, SvcConfError};
pub use json::JsonNode;
pub use path::{MethodName, MethodPath, PathInterner};
