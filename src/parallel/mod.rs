//! Thread-level parallel word counting
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌──────────────────┐    ┌──────────┐
//! │ input bytes  │───▶│  Partitioner   │───▶│ worker-0..N      │───▶│  merge   │
//! │              │    │ N byte ranges  │    │ tokenize + count │    │ (caller) │
//! └──────────────┘    └────────────────┘    └──────────────────┘    └──────────┘
//! ```
//!
//! - Each worker reads only its own slice and owns its [`CountMap`](crate::count::CountMap)
//! - Results travel back over a crossbeam channel by value
//! - The calling thread merges after all workers are joined (no shared mutable state)
//!
//! # Partition policies
//!
//! [`PartitionPolicy::Truncating`] reproduces plain integer-division chunking:
//! trailing bytes can be dropped and words on a boundary are split in two.
//! [`PartitionPolicy::TokenAligned`] moves boundaries to word ends and always
//! agrees with the single-threaded count.
//!
//! # Example
//!
//! ```rust
//! use wordbench::parallel::{ParallelCountEngine, PartitionPolicy};
//!
//! let engine = ParallelCountEngine::new(4, PartitionPolicy::TokenAligned);
//! let counts = engine.count(b"The cat sat. The CAT sat!").unwrap();
//! assert_eq!(counts.get("cat"), 2);
//! ```

pub mod engine;
pub mod partition;

pub use engine::{ParallelCountEngine, WorkerResult};
pub use partition::{Partition, PartitionPolicy, Partitioner};
