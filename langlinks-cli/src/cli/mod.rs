// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for langlinks
//!
//! Loads a page fixture into an in-memory store and answers lookups through
//! an in-memory or sled-backed cache.

pub mod commands;
pub mod fixture;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_invalidate, handle_language, handle_links, handle_references, handle_stats, Session,
};
