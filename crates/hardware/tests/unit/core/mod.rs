//! Machine core tests.

/// Property tests for compare, branch and wrapping arithmetic.
pub mod branch_properties;
