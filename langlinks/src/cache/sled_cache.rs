// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sled-backed target-link cache
//!
//! Shares cached lookups between processes that open the same directory.
//! Keys and values are bincode-encoded; every value carries an absolute
//! expiry timestamp so the TTL survives restarts.

use super::cache_config::CacheConfig;
use super::error::CacheResult;
use super::stats::{CacheStats, StatsRecorder};
use super::traits::TargetLinksCache;
use crate::types::{LanguageCode, LinkDescriptor, PageIdentity, TargetLinkMap};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const TARGET_LINKS_TREE: &str = "target_links";
const PAGE_LANGUAGES_TREE: &str = "page_languages";

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry<V> {
    expires_at_ms: Option<u64>,
    value: V,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// On-disk implementation of [`TargetLinksCache`]
pub struct SledTargetLinksCache {
    db: sled::Db,
    target_links: sled::Tree,
    page_languages: sled::Tree,
    config: CacheConfig,
    stats: StatsRecorder,
}

impl SledTargetLinksCache {
    /// Open (or create) a cache directory
    pub fn open<P: AsRef<Path>>(path: P, config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;
        let db = sled::open(path)?;
        Self::from_db(db, config)
    }

    /// Cache backed by a temporary sled database, removed on drop
    pub fn temporary(config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db, config)
    }

    fn from_db(db: sled::Db, config: CacheConfig) -> CacheResult<Self> {
        let target_links = db.open_tree(TARGET_LINKS_TREE)?;
        let page_languages = db.open_tree(PAGE_LANGUAGES_TREE)?;
        Ok(Self {
            db,
            target_links,
            page_languages,
            config,
            stats: StatsRecorder::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.target_links.len() + self.page_languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn flush(&self) -> CacheResult<()> {
        self.db.flush()?;
        Ok(())
    }

    fn read<V: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
        key: &PageIdentity,
    ) -> CacheResult<Option<V>> {
        let key = bincode::serialize(key)?;
        let Some(bytes) = tree.get(&key)? else {
            return Ok(None);
        };

        let entry: StoredEntry<V> = bincode::deserialize(&bytes)?;
        match entry.expires_at_ms {
            Some(deadline) if deadline <= now_ms() => {
                tree.remove(&key)?;
                self.stats.expiration();
                Ok(None)
            }
            _ => Ok(Some(entry.value)),
        }
    }

    fn write<V: Serialize>(
        &self,
        tree: &sled::Tree,
        key: &PageIdentity,
        value: V,
    ) -> CacheResult<()> {
        let entry = StoredEntry {
            expires_at_ms: self
                .config
                .default_ttl
                .map(|ttl| now_ms().saturating_add(ttl.as_millis() as u64)),
            value,
        };
        tree.insert(bincode::serialize(key)?, bincode::serialize(&entry)?)?;
        Ok(())
    }

    fn remove(&self, tree: &sled::Tree, key: &PageIdentity) -> CacheResult<bool> {
        let key = bincode::serialize(key)?;
        Ok(tree.remove(key)?.is_some())
    }

    fn lookup<V: DeserializeOwned>(&self, tree: &sled::Tree, key: &PageIdentity) -> Option<V> {
        if !self.config.enabled {
            return None;
        }

        match self.read(tree, key) {
            Ok(Some(value)) => {
                self.stats.hit();
                Some(value)
            }
            Ok(None) => {
                self.stats.miss();
                None
            }
            Err(e) => {
                log::warn!("Cache read for {} failed, treating as miss: {}", key, e);
                self.stats.miss();
                None
            }
        }
    }

    fn store<V: Serialize>(&self, tree: &sled::Tree, key: &PageIdentity, value: V) {
        if !self.config.enabled {
            return;
        }

        match self.write(tree, key, value) {
            Ok(()) => self.stats.insertion(),
            Err(e) => log::warn!("Cache write for {} dropped: {}", key, e),
        }
    }

    fn forget(&self, tree: &sled::Tree, key: &PageIdentity) {
        match self.remove(tree, key) {
            Ok(true) => self.stats.deletions(1),
            Ok(false) => {}
            Err(e) => log::warn!("Cache delete for {} failed: {}", key, e),
        }
    }
}

impl Drop for SledTargetLinksCache {
    fn drop(&mut self) {
        if let Err(e) = self.db.flush() {
            log::warn!("Failed to flush cache on close: {}", e);
        }
    }
}

impl TargetLinksCache for SledTargetLinksCache {
    fn get_language_target_links_from_cache(
        &self,
        descriptor: &LinkDescriptor,
    ) -> Option<TargetLinkMap> {
        self.lookup(&self.target_links, &descriptor.target)
    }

    fn get_page_language_from_cache(&self, target: &PageIdentity) -> Option<LanguageCode> {
        self.lookup(&self.page_languages, target)
    }

    fn save_language_target_links_to_cache(
        &self,
        descriptor: &LinkDescriptor,
        links: &TargetLinkMap,
    ) {
        self.store(&self.target_links, &descriptor.target, links)
    }

    fn save_page_language_to_cache(&self, target: &PageIdentity, language: &LanguageCode) {
        self.store(&self.page_languages, target, language)
    }

    fn delete_language_target_links_from_cache(&self, targets: &[PageIdentity]) {
        for target in targets {
            self.forget(&self.target_links, target);
        }
    }

    fn delete_page_language_for_target_from_cache(&self, target: &PageIdentity) {
        self.forget(&self.page_languages, target)
    }

    fn clear(&self) {
        for tree in [&self.target_links, &self.page_languages] {
            if let Err(e) = tree.clear() {
                log::warn!("Failed to clear cache tree: {}", e);
            }
        }
    }

    fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len() as u64)
    }
}
