//! Hash collections used throughout the workspace.
//!
//! FxHash is faster than SipHash for the small integer and string keys
//! the engine works with, and no hash-flooding resistance is needed for
//! server-internal data.

pub use rustc_hash::{FxHashMap, FxHashSet};
