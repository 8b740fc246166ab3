//! Amort: a growable array with credit-based amortized cost accounting.
//!
//! This is the top-level facade crate that re-exports the public API of
//! `amort-array`. For most users, adding `amort` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use amort::prelude::*;
//!
//! let mut arr = DynamicArray::new();
//! for v in 0..=10 {
//!     arr.append(v).unwrap();
//! }
//! // The eleventh append found the buffer full and doubled it.
//! assert_eq!(arr.capacity(), 20);
//! assert_eq!(arr.get(10), Ok(10));
//!
//! // Draining pays for every shrink copy out of banked credits.
//! while arr.pop().is_ok() {}
//! assert!(arr.ledger().is_solvent());
//! assert_eq!(arr.pop(), Err(ArrayError::EmptyArray));
//! ```
//!
//! # Custom policy
//!
//! ```rust
//! use amort::prelude::*;
//!
//! let config = ArrayConfig {
//!     min_capacity: 4,
//!     ..ArrayConfig::new(16)
//! };
//! let mut arr = DynamicArray::with_config(config).unwrap();
//! arr.try_extend([1, 2]).unwrap();
//! arr.pop().unwrap();
//! assert_eq!(arr.capacity(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`array`] | `DynamicArray`, its configuration, errors, ledger, and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Dynamic array storage and accounting (`amort-array`).
///
/// Most users only need the types in the [`prelude`].
pub use amort_array as array;

/// Common imports for typical Amort usage.
///
/// ```rust
/// use amort::prelude::*;
/// ```
pub mod prelude {
    pub use amort_array::{ArrayConfig, ArrayError, ArrayMetrics, CreditLedger, DynamicArray};
}
