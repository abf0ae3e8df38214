// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-process target-link cache
//!
//! Entries live in a fixed number of shards, each behind its own lock, so
//! renders touching different keys rarely contend while all operations on a
//! single key are serialized by that key's shard lock. Each shard enforces its
//! own capacity with LRU or FIFO eviction, and entries optionally expire after
//! the configured TTL.

use super::cache_config::{CacheConfig, EvictionPolicy};
use super::error::CacheResult;
use super::stats::{CacheStats, StatsRecorder};
use super::traits::TargetLinksCache;
use super::CacheEntryMetadata;
use crate::types::{LanguageCode, LinkDescriptor, PageIdentity, TargetLinkMap};
use parking_lot::RwLock;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

/// Recency tracker, most recent at the front
#[derive(Debug)]
struct LruTracker<K> {
    order: VecDeque<K>,
}

impl<K: Clone + Eq> LruTracker<K> {
    fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    fn access(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    fn remove(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    fn remove_lru(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    metadata: CacheEntryMetadata,
}

#[derive(Debug)]
struct Shard<K, V> {
    entries: HashMap<K, Entry<V>>,
    lru: LruTracker<K>,
}

/// One sharded map with its own capacity bookkeeping
struct ShardedMap<K, V> {
    shards: Vec<RwLock<Shard<K, V>>>,
    config: CacheConfig,
}

impl<K, V> ShardedMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn new(config: &CacheConfig) -> Self {
        let shard_count = config.shard_count.max(1);
        let shards = (0..shard_count)
            .map(|_| {
                RwLock::new(Shard {
                    entries: HashMap::new(),
                    lru: LruTracker::new(),
                })
            })
            .collect();

        Self {
            shards,
            config: config.clone(),
        }
    }

    fn shard(&self, key: &K) -> &RwLock<Shard<K, V>> {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let index = (hasher.finish() % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    fn get(&self, key: &K, stats: &StatsRecorder) -> Option<V> {
        let mut guard = self.shard(key).write();
        let shard = &mut *guard;

        let expired = match shard.entries.get_mut(key) {
            Some(entry) if !entry.metadata.is_expired() => {
                entry.metadata.update_access();
                let value = entry.value.clone();
                if self.config.eviction_policy == EvictionPolicy::Lru {
                    shard.lru.access(key);
                }
                stats.hit();
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            shard.entries.remove(key);
            shard.lru.remove(key);
            stats.expiration();
        }
        stats.miss();
        None
    }

    fn insert(&self, key: K, value: V, stats: &StatsRecorder) {
        let capacity = self.config.entries_per_shard();
        let mut guard = self.shard(&key).write();
        let shard = &mut *guard;

        if !shard.entries.contains_key(&key) {
            while shard.entries.len() >= capacity {
                match shard.lru.remove_lru() {
                    Some(victim) => {
                        if shard.entries.remove(&victim).is_some() {
                            stats.eviction();
                        }
                    }
                    None => break,
                }
            }
        }

        shard.entries.insert(
            key.clone(),
            Entry {
                value,
                metadata: CacheEntryMetadata::new(self.config.default_ttl),
            },
        );
        shard.lru.access(&key);
        stats.insertion();
    }

    fn remove(&self, key: &K) -> bool {
        let mut guard = self.shard(key).write();
        let shard = &mut *guard;
        shard.lru.remove(key);
        shard.entries.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().entries.len()).sum()
    }

    fn clear(&self) {
        for shard in &self.shards {
            let mut guard = shard.write();
            let shard = &mut *guard;
            shard.entries.clear();
            shard.lru.clear();
        }
    }
}

/// Sharded in-memory implementation of [`TargetLinksCache`]
pub struct InMemoryTargetLinksCache {
    config: CacheConfig,
    target_links: ShardedMap<PageIdentity, TargetLinkMap>,
    page_languages: ShardedMap<PageIdentity, LanguageCode>,
    stats: StatsRecorder,
}

impl InMemoryTargetLinksCache {
    /// Create a cache, rejecting invalid configurations
    pub fn new(config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: CacheConfig) -> Self {
        Self {
            target_links: ShardedMap::new(&config),
            page_languages: ShardedMap::new(&config),
            stats: StatsRecorder::default(),
            config,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.target_links.len() + self.page_languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTargetLinksCache {
    fn default() -> Self {
        Self::with_valid_config(CacheConfig::default())
    }
}

impl TargetLinksCache for InMemoryTargetLinksCache {
    fn get_language_target_links_from_cache(
        &self,
        descriptor: &LinkDescriptor,
    ) -> Option<TargetLinkMap> {
        if !self.config.enabled {
            return None;
        }
        self.target_links.get(&descriptor.target, &self.stats)
    }

    fn get_page_language_from_cache(&self, target: &PageIdentity) -> Option<LanguageCode> {
        if !self.config.enabled {
            return None;
        }
        self.page_languages.get(target, &self.stats)
    }

    fn save_language_target_links_to_cache(
        &self,
        descriptor: &LinkDescriptor,
        links: &TargetLinkMap,
    ) {
        if !self.config.enabled {
            return;
        }
        self.target_links
            .insert(descriptor.target.clone(), links.clone(), &self.stats);
    }

    fn save_page_language_to_cache(&self, target: &PageIdentity, language: &LanguageCode) {
        if !self.config.enabled {
            return;
        }
        self.page_languages
            .insert(target.clone(), language.clone(), &self.stats);
    }

    fn delete_language_target_links_from_cache(&self, targets: &[PageIdentity]) {
        let removed = targets
            .iter()
            .filter(|target| self.target_links.remove(target))
            .count();
        self.stats.deletions(removed as u64);
    }

    fn delete_page_language_for_target_from_cache(&self, target: &PageIdentity) {
        if self.page_languages.remove(target) {
            self.stats.deletions(1);
        }
    }

    fn clear(&self) {
        self.target_links.clear();
        self.page_languages.clear();
    }

    fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn page(title: &str) -> PageIdentity {
        PageIdentity::main(title).unwrap()
    }

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn descriptor(code: &str, target: &str) -> LinkDescriptor {
        LinkDescriptor::local(lang(code), page(target))
    }

    fn links(pairs: &[(&str, &str)]) -> TargetLinkMap {
        pairs
            .iter()
            .map(|(code, title)| (lang(code), page(title)))
            .collect()
    }

    #[test]
    fn test_save_and_get_target_links() {
        let cache = InMemoryTargetLinksCache::default();
        let map = links(&[("bo", "Bar"), ("en", "Foo")]);

        assert_eq!(
            cache.get_language_target_links_from_cache(&descriptor("en", "Foo")),
            None
        );
        cache.save_language_target_links_to_cache(&descriptor("en", "Foo"), &map);

        // Any descriptor naming the same target shares the entry
        assert_eq!(
            cache.get_language_target_links_from_cache(&descriptor("ja", "Foo")),
            Some(map)
        );
        assert_eq!(
            cache.get_language_target_links_from_cache(&descriptor("en", "Other")),
            None
        );
    }

    #[test]
    fn test_delete_is_visible_to_next_read() {
        let cache = InMemoryTargetLinksCache::default();
        cache.save_page_language_to_cache(&page("Foo"), &lang("en"));
        cache.save_language_target_links_to_cache(&descriptor("en", "Foo"), &links(&[]));

        cache.delete_page_language_for_target_from_cache(&page("Foo"));
        cache.delete_language_target_links_from_cache(&[page("Foo")]);

        assert_eq!(cache.get_page_language_from_cache(&page("Foo")), None);
        assert_eq!(
            cache.get_language_target_links_from_cache(&descriptor("en", "Foo")),
            None
        );
        assert_eq!(cache.stats().deletions, 2);
    }

    #[test]
    fn test_delete_absent_key_is_noop() {
        let cache = InMemoryTargetLinksCache::default();
        cache.save_page_language_to_cache(&page("Bar"), &lang("de"));

        cache.delete_page_language_for_target_from_cache(&page("Foo"));
        cache.delete_language_target_links_from_cache(&[page("Foo"), page("Baz")]);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_page_language_from_cache(&page("Bar")), Some(lang("de")));
        assert_eq!(cache.stats().deletions, 0);
    }

    #[test]
    fn test_disabled_cache_is_pass_through() {
        let cache = InMemoryTargetLinksCache::new(CacheConfig::disabled()).unwrap();
        cache.save_page_language_to_cache(&page("Foo"), &lang("en"));

        assert_eq!(cache.get_page_language_from_cache(&page("Foo")), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_ttl_expiry() {
        let config = CacheConfig::default().with_ttl(Some(Duration::from_millis(20)));
        let cache = InMemoryTargetLinksCache::new(config).unwrap();
        cache.save_page_language_to_cache(&page("Foo"), &lang("en"));
        assert_eq!(cache.get_page_language_from_cache(&page("Foo")), Some(lang("en")));

        thread::sleep(Duration::from_millis(50));

        assert_eq!(cache.get_page_language_from_cache(&page("Foo")), None);
        let stats = cache.stats();
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.entries, 0);
    }

    #[test]
    fn test_lru_eviction_within_shard() {
        let config = CacheConfig::default()
            .with_max_entries(2)
            .with_shard_count(1);
        let cache = InMemoryTargetLinksCache::new(config).unwrap();

        cache.save_page_language_to_cache(&page("A"), &lang("en"));
        cache.save_page_language_to_cache(&page("B"), &lang("de"));
        // Touch A so B becomes least recently used
        assert!(cache.get_page_language_from_cache(&page("A")).is_some());
        cache.save_page_language_to_cache(&page("C"), &lang("fr"));

        assert!(cache.get_page_language_from_cache(&page("A")).is_some());
        assert!(cache.get_page_language_from_cache(&page("B")).is_none());
        assert!(cache.get_page_language_from_cache(&page("C")).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_fifo_eviction_ignores_reads() {
        let config = CacheConfig {
            eviction_policy: EvictionPolicy::Fifo,
            ..CacheConfig::default()
                .with_max_entries(2)
                .with_shard_count(1)
        };
        let cache = InMemoryTargetLinksCache::new(config).unwrap();

        cache.save_page_language_to_cache(&page("A"), &lang("en"));
        cache.save_page_language_to_cache(&page("B"), &lang("de"));
        assert!(cache.get_page_language_from_cache(&page("A")).is_some());
        cache.save_page_language_to_cache(&page("C"), &lang("fr"));

        assert!(cache.get_page_language_from_cache(&page("A")).is_none());
        assert!(cache.get_page_language_from_cache(&page("B")).is_some());
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let config = CacheConfig::default()
            .with_max_entries(1)
            .with_shard_count(1);
        let cache = InMemoryTargetLinksCache::new(config).unwrap();

        cache.save_page_language_to_cache(&page("A"), &lang("en"));
        cache.save_page_language_to_cache(&page("A"), &lang("de"));

        assert_eq!(cache.get_page_language_from_cache(&page("A")), Some(lang("de")));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_concurrent_distinct_keys() {
        let cache = Arc::new(InMemoryTargetLinksCache::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let target = page(&format!("Page {}", i));
                    for _ in 0..100 {
                        cache.save_page_language_to_cache(&target, &lang("en"));
                        assert_eq!(cache.get_page_language_from_cache(&target), Some(lang("en")));
                        cache.delete_page_language_for_target_from_cache(&target);
                        assert_eq!(cache.get_page_language_from_cache(&target), None);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = InMemoryTargetLinksCache::default();
        cache.save_page_language_to_cache(&page("Foo"), &lang("en"));
        cache.save_language_target_links_to_cache(&descriptor("en", "Foo"), &links(&[]));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
