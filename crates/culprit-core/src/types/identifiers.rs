//! Newtype identifiers for server-side entities.
//!
//! They exist so a test-run id can never be handed to a problem lookup
//! by accident. All of them serialize as their bare integer.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident, $inner:ty) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$inner> for $name {
            fn from(raw: $inner) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// Server-assigned id of one build.
    BuildId,
    u64
);

id_type!(
    /// Id of one test run inside one build.
    TestRunId,
    i32
);

id_type!(
    /// Id of one build problem inside one build.
    ProblemId,
    i32
);

id_type!(
    /// Server-wide user id.
    UserId,
    u64
);

id_type!(
    /// Stable identity of a test, independent of any particular run.
    TestNameId,
    u64
);
