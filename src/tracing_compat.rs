//! Optional tracing integration.
//!
//! With the `tracing-integration` feature enabled, the macros re-exported
//! here are the `tracing` crate's. Without it they expand to nothing, so
//! call sites need no `cfg` attributes and the default build carries no
//! logging dependency.
//!
//! Key material and MAC bytes are never passed to these macros.

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, trace, warn};

#[doc(hidden)]
#[macro_export]
macro_rules! __node_credentials_tracing_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing-integration"))]
pub use crate::__node_credentials_tracing_noop as debug;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__node_credentials_tracing_noop as trace;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__node_credentials_tracing_noop as warn;
