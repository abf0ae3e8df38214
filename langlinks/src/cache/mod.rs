// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Target-link caching
//!
//! This module provides the memoization layer in front of the semantic store:
//! - Resolved target-link maps, keyed by the descriptor's target
//! - Resolved page languages, keyed by page
//!
//! The store stays authoritative. Any backend may be cleared at any time
//! without affecting correctness.

pub mod cache_config;
pub mod error;
pub mod memory_cache;
#[cfg(feature = "sled-backend")]
pub mod sled_cache;
pub mod stats;
pub mod traits;

pub use cache_config::{CacheConfig, EvictionPolicy};
pub use error::{CacheError, CacheResult};
pub use memory_cache::InMemoryTargetLinksCache;
#[cfg(feature = "sled-backend")]
pub use sled_cache::SledTargetLinksCache;
pub use stats::CacheStats;
pub use traits::TargetLinksCache;

use std::time::{Duration, Instant};

/// Cache entry metadata
#[derive(Debug, Clone)]
pub struct CacheEntryMetadata {
    pub created_at: Instant,
    pub last_accessed: Instant,
    pub access_count: u32,
    pub ttl: Option<Duration>,
}

impl CacheEntryMetadata {
    pub fn new(ttl: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            created_at: now,
            last_accessed: now,
            access_count: 0,
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(ttl) = self.ttl {
            self.created_at.elapsed() > ttl
        } else {
            false
        }
    }

    pub fn update_access(&mut self) {
        self.last_accessed = Instant::now();
        self.access_count = self.access_count.saturating_add(1);
    }
}
