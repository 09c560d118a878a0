// Logging hooks that compile away unless `path_logging` is enabled.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "path_logging")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "path_logging")]
        ::tracing::debug!($($arg)*);
    };
}

pub(crate) use debug;
pub(crate) use trace;
