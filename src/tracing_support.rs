//! Logging support.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! crate uses and can install a `fmt` subscriber.  With it disabled, the same
//! names expand to nothing so call sites need no `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a `fmt` subscriber writing through the test harness.  Safe to
    /// call more than once; later calls and an already-installed global
    /// subscriber are ignored.
    pub fn init_tracing() {
        init_tracing_with_level(Level::TRACE);
    }

    pub fn init_tracing_with_level(level: Level) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_test_writer()
                .try_init();
        });
    }

    pub use tracing::{Level, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn init_tracing_with_level(_level: Level) {}

    /// Stands in for `tracing::Level`.  Every level is ignored.
    #[derive(Clone, Copy, Debug)]
    pub struct Level;

    impl Level {
        pub const TRACE: Level = Level;
        pub const DEBUG: Level = Level;
        pub const INFO: Level = Level;
        pub const WARN: Level = Level;
        pub const ERROR: Level = Level;
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
