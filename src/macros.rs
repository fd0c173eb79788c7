//! Internal logging macros.
//!
//! With the `tracing` feature these forward to the matching `tracing` macro
//! with structured fields. Without it they only borrow the field values, so
//! call sites compile identically in both configurations.
//!
//! ```ignore
//! debug_event!(vertices = n, edges = m; "floyd-warshall started");
//! ```

macro_rules! debug_event {
    ($($key:ident = $value:expr),* ; $($msg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($key = $value,)* $($msg)+);
        }
        #[cfg(not(feature = "tracing"))]
        {
            $( let _ = &$value; )*
        }
    }};
}

macro_rules! warn_event {
    ($($key:ident = $value:expr),* ; $($msg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::warn!($($key = $value,)* $($msg)+);
        }
        #[cfg(not(feature = "tracing"))]
        {
            $( let _ = &$value; )*
        }
    }};
}

macro_rules! trace_event {
    ($($key:ident = $value:expr),* ; $($msg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($key = $value,)* $($msg)+);
        }
        #[cfg(not(feature = "tracing"))]
        {
            $( let _ = &$value; )*
        }
    }};
}
