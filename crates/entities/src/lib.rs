//! Core entity definitions for the task list service.
//!
//! This crate defines the data types shared between the HTTP server and the
//! task store.

mod task;

pub use task::*;
