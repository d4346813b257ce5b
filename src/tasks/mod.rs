//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache Clear: Empties every cache region on wall-clock aligned ticks

mod cache_clear;

pub use cache_clear::{duration_until_next_boundary, spawn_cache_clear_task};
