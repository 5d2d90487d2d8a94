//! Query-style operations over slices.
//!
//! Every operation is a free function that borrows its input and returns a
//! freshly allocated result. Nothing is lazy and nothing is chained: compose
//! by calling one function on the output of another.
//!
//! ```
//! use slinq::{chunk, first, where_};
//!
//! let evens = where_(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//! assert_eq!(first(&evens, |n| *n > 2), Ok(4));
//! assert_eq!(chunk(&evens, 2), Ok(vec![vec![2, 4], vec![6]]));
//! ```

pub mod error;
mod map;
mod projection;
mod quantifier;
mod reshape;
mod set;

pub use error::{Error, Result};
pub use map::{to_map, to_slice};
pub use projection::{select, select_many, where_};
pub use quantifier::{all, any, count, first, single};
pub use reshape::{aggregate, chunk, repeat, reverse, zip};
pub use set::{distinct, except, intersect};

/// The map type produced by [`to_map`].
pub type HashMap<K, V> = ahash::HashMap<K, V>;
/// The set type used for membership tests in [`distinct`], [`except`] and
/// [`intersect`].
pub type HashSet<T> = ahash::HashSet<T>;
