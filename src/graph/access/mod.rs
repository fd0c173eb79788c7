//! Per-run scratch state shared by the algorithms.

pub(crate) mod visited;
