//! Core collection types for a web utility toolbelt.
//!
//! Two small, self-contained abstractions consumed by the rest of the
//! toolbelt (query-string builders, template engines, enumerable helpers):
//!
//! - [`Hash`]: an insertion-ordered associative container over loose
//!   [`Value`]s, with merge/update, query-string and JSON serialization.
//! - [`ObjectRange`]: a lazy range enumerating every value between two
//!   boundaries via a [`Successor`] operation.
//!
//! Both implement [`Enumerable`], a trait deriving `map`/`inject`/`detect`
//! and friends from a single "visit each item" primitive.
//!
//! ```
//! use toolbelt_core::{Hash, ObjectRange, Value};
//!
//! let mut params: Hash = [("q", "rust"), ("page", "2")].into_iter().collect();
//! params.set("tags", vec![Value::from("a"), Value::from("b")]);
//! assert_eq!(params.to_query_string(), "q=rust&page=2&tags=a&tags=b");
//!
//! let digits = ObjectRange::new(1i64, 4).to_vec();
//! assert_eq!(digits, vec![1, 2, 3, 4]);
//! ```
//!
//! Everything here is single-threaded plain data: no locking, no I/O, no
//! shared state between instances.

pub mod enumerable;
pub mod error;
pub mod hash;
pub mod range;
pub mod value;

pub use enumerable::Enumerable;
pub use error::ToolbeltError;
pub use hash::{Hash, Pair};
pub use range::{ObjectRange, Successor};
pub use value::Value;
