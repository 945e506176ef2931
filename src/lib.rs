//! Synthetic workload for stress-testing a memory allocator.
//!
//! A fixed set of [`Bin`]s is repopulated over and over with blocks obtained
//! by a randomly selected [`Strategy`] (aligned, zeroed, resize or plain) and
//! released again. With verification enabled every block carries a sparse
//! address dependent pattern that is checked before each reuse and release.
//!
//! ```
//! use binstress::{Bin, Engine, conf::get_test_config};
//!
//! let engine = Engine::new(get_test_config());
//! let mut bin = Bin::new();
//! engine.bin_alloc(&mut bin, 100, 1030).unwrap();
//! assert_eq!(bin.size(), 100);
//! engine.bin_free(&mut bin).unwrap();
//! assert!(bin.is_empty());
//! ```

pub mod conf;
pub mod engine;
pub mod error;
pub mod heap;
pub mod verify;
pub mod workload;

pub use conf::{AConf, Conf};
pub use engine::{Bin, Engine, Strategy};
pub use error::FatalError;
pub use heap::{Heap, SysHeap};
pub use workload::{Request, Workload};
