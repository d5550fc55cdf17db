//! Typed JSON Pointer (RFC 6901 dialect) utilities.
//!
//! This crate parses pointer text into a structured [`Pointer`] and uses it
//! to navigate and mutate `serde_json::Value` trees. The dialect differs
//! from plain RFC 6901 in three ways:
//!
//! - array indices are **1-based** (`/0` is a parse error unless shift-by-one
//!   compatibility is enabled via [`parse_shifted`]);
//! - the final segment may carry a `::tag` **type constraint** drawn from
//!   `{string, number, object, array, boolean, null}`, enforced on write;
//! - a `\` before a digits-only segment forces a **literal string key**
//!   (`/\5` addresses the member `"5"`, `/5` the fifth array element).
//!
//! URI-fragment form (`#/a/b` with `%XX` escapes) is accepted too.
//!
//! # Example
//!
//! ```
//! use typed_json_pointer::{exists, parse, read, write};
//! use serde_json::json;
//!
//! // Parse a pointer and read through nested containers (1-based indices).
//! let doc = json!({"users": [{"name": "ana"}]});
//! let p = parse("/users/1/name").unwrap();
//! assert_eq!(read(&doc, &p).unwrap(), &json!("ana"));
//!
//! // Writes create missing intermediate containers on demand.
//! let mut doc = json!({});
//! write(&mut doc, &parse("/a/2/b").unwrap(), json!(true)).unwrap();
//! assert_eq!(doc, json!({"a": [null, {"b": true}]}));
//! assert!(exists(&doc, &parse("/a/2").unwrap()));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod get;
pub mod parse;
pub mod types;
pub mod util;
pub mod validate;
pub mod write;

pub use get::{exists, get, read};
pub use parse::{parse, parse_shifted};
pub use types::{Pointer, Token, ValueKind};
pub use util::{dedup_pointers, escape_component, unescape_component};
pub use write::{build_object, write};

/// Everything that can go wrong while parsing or applying a pointer.
///
/// Navigation errors carry the offending token and a clone of the value
/// it could not be applied to, so deep-path failures stay diagnosable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PointerError {
    /// Non-empty text without a leading `/`, or a malformed `%XX` escape.
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
    /// An index token evaluating to zero, or not representable.
    #[error("INVALID_INDEX: {0}")]
    InvalidIndex(String),
    /// A `::tag` suffix outside the six recognized tags.
    #[error("UNSUPPORTED_TYPE: {0}")]
    UnsupportedType(String),
    /// Read: key absent from an object.
    #[error("NOT_FOUND: {token}")]
    NotFound { token: Token, container: Value },
    /// Read: index past the end of an array.
    #[error("OUT_OF_BOUNDS: index {index} exceeds length {len}")]
    OutOfBounds { index: usize, len: usize },
    /// Read: token kind against the wrong container kind.
    #[error("MISMATCH: {token}")]
    Mismatch { token: Token, container: Value },
    /// Write: token kind against the wrong container kind.
    #[error("INVALID_TARGET: {token}")]
    InvalidTarget { token: Token, container: Value },
    /// Write: value conflicts with the pointer's type constraint.
    #[error("TYPE_MISMATCH: {value} does not satisfy {expected} at {pointer}")]
    TypeMismatch {
        expected: ValueKind,
        value: Value,
        pointer: Pointer,
    },
}
