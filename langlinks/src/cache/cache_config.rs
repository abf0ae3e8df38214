// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Cache configuration and policies

use super::error::{CacheError, CacheResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Target-link cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable/disable caching entirely; a disabled cache misses every read
    pub enabled: bool,

    /// Maximum number of entries per cached map (target links, page languages)
    pub max_entries: usize,

    /// Number of independently locked shards
    pub shard_count: usize,

    /// Lifetime of an entry; `None` keeps entries until evicted or invalidated
    #[serde(with = "ttl_secs")]
    pub default_ttl: Option<Duration>,

    /// Eviction policy once a shard is full
    pub eviction_policy: EvictionPolicy,
}

/// Eviction policies for when a shard is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvictionPolicy {
    /// Least Recently Used
    Lru,
    /// First In First Out
    Fifo,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 10_000,
            shard_count: 16,
            default_ttl: Some(Duration::from_secs(3600)), // 1 hour
            eviction_policy: EvictionPolicy::Lru,
        }
    }
}

impl CacheConfig {
    /// Configuration for wikis with many more renders than saves
    pub fn read_optimized() -> Self {
        Self {
            max_entries: 50_000,
            shard_count: 64,
            default_ttl: Some(Duration::from_secs(6 * 3600)), // 6 hours
            ..Self::default()
        }
    }

    /// Configuration for memory-constrained environments
    pub fn memory_constrained() -> Self {
        Self {
            max_entries: 1_000,
            shard_count: 4,
            default_ttl: Some(Duration::from_secs(600)), // 10 minutes
            eviction_policy: EvictionPolicy::Fifo,
            ..Self::default()
        }
    }

    /// Pass-through configuration: every lookup goes to the store
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    /// Entry budget of a single shard
    pub fn entries_per_shard(&self) -> usize {
        let shards = self.shard_count.max(1);
        ((self.max_entries + shards - 1) / shards).max(1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CacheResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.max_entries == 0 {
            return Err(CacheError::InvalidConfig(
                "max_entries must be > 0".to_string(),
            ));
        }

        if self.shard_count == 0 {
            return Err(CacheError::InvalidConfig(
                "shard_count must be > 0".to_string(),
            ));
        }

        if self.shard_count > self.max_entries {
            return Err(CacheError::InvalidConfig(format!(
                "shard_count ({}) exceeds max_entries ({})",
                self.shard_count, self.max_entries
            )));
        }

        if self.default_ttl == Some(Duration::ZERO) {
            return Err(CacheError::InvalidConfig(
                "default_ttl must be positive; use null to disable expiry".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> CacheResult<Self> {
        let config: CacheConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CacheResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CacheError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

/// TTL as whole seconds in serialized form
mod ttl_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match ttl {
            Some(ttl) => s.serialize_some(&ttl.as_secs()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_secs))
    }
}
