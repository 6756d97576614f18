//! Small shared utilities that do not belong to a single layer.

pub mod slot_lock;
