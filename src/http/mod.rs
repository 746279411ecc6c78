//! HTTP layer for the header echo service
//!
//! Holds the root handler and the typed header it reads.

pub mod handlers;
pub mod headers;
