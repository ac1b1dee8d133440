//! Shared utilities.

pub mod slug;
