//! Concurrent mask matching.
//!
//! The pipeline is: [`mask`] compiles the wildcard mask once, [`partition`]
//! hands out line batches through a shared atomic cursor, [`matcher`] scans
//! individual lines, and [`engine`] ties it together with a fixed worker
//! pool and the final ordering step.

pub mod engine;
pub mod mask;
pub mod matcher;
pub mod partition;

pub use engine::search;
pub use mask::{CompiledMask, MaskSymbol, MAX_MASK_LEN};
pub use matcher::find_matches;
pub use partition::{WorkQueue, DEFAULT_BATCH_SIZE};
