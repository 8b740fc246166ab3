//! Self-managed growable array with credit-based amortized cost accounting.
//!
//! [`DynamicArray`] keeps its own contiguous buffer of fixed capacity and a
//! logical size. It grows the buffer when an append finds it full and shrinks
//! it when a pop would leave it mostly empty. Every operation is charged a
//! constant number of credits and pays one credit per primitive step. A
//! [`CreditLedger`] records the result, so you can check the accounting-method
//! proof of amortized O(1) cost on real operation sequences.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray
//! ├── Buffer        (fixed-size Vec<i64>, replaced wholesale on resize)
//! ├── ArrayConfig   (initial capacity, growth factor, shrink threshold, charges)
//! ├── CreditLedger  (balance, charged, spent, low-water mark)
//! └── ArrayMetrics  (operation, resize, and copy counters)
//! ```
//!
//! # Example
//!
//! ```rust
//! use amort_array::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for v in 0..=10 {
//!     arr.append(v).unwrap();
//! }
//! assert_eq!(arr.capacity(), 20);
//! assert_eq!(arr.pop(), Ok(10));
//! assert!(arr.ledger().is_solvent());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod buffer;
pub mod config;
pub mod error;
pub mod ledger;
pub mod metrics;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use ledger::CreditLedger;
pub use metrics::ArrayMetrics;
