//! # strata-id
//!
//! Identifier types, parsing, and validation for the strata content
//! repository.
//!
//! ## Design Principles
//!
//! - Identifiers are immutable values: once constructed, nothing about them
//!   can change
//! - All identifiers have a canonical string representation with strict
//!   parsing
//! - Identifiers support roundtrip serialization (parse → format → parse)
//! - Node and property identifiers are distinct types; the closed [`ItemId`]
//!   variant covers both
//!
//! ## Identifier Format
//!
//! A node identifier is a 128-bit value rendered in the standard hyphenated
//! form, e.g. `f81d4fae-7dec-11d0-a765-00a0c91e6bf6`. A property identifier
//! appends the property name: `f81d4fae-7dec-11d0-a765-00a0c91e6bf6/title`.
//!
//! This format provides:
//! - Stability (a node keeps its identifier for its whole lifetime,
//!   independent of its position in the hierarchy)
//! - A lossless binary encoding (16 bytes, big-endian)
//! - A total order over node identifiers (numeric order of the 128-bit
//!   value), usable for sorted containers

mod error;
mod item;
mod node;

pub use error::IdError;
pub use item::{ItemId, PropertyId};
pub use node::{NodeId, CANONICAL_LEN, ENCODED_LEN};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
