//! Small pure helpers used by pages.

pub mod region;
