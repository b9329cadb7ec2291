//! Public library API for typed hardware inventory properties.

/// Property records, value classification, and canonical string encoding.
pub mod property;
