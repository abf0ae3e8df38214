// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Target-link cache trait
//!
//! Backends are pluggable (in-process, on-disk, ...). Every implementation
//! must make a delete visible to the next read on the same instance and must
//! treat deleting an absent key as a no-op.

use super::stats::CacheStats;
use crate::types::{LanguageCode, LinkDescriptor, PageIdentity, TargetLinkMap};
use std::sync::Arc;

pub trait TargetLinksCache: Send + Sync {
    /// Cached target-link map for the descriptor's target
    ///
    /// The store query behind a map does not depend on the descriptor's
    /// language, so every descriptor naming the same target shares one entry.
    fn get_language_target_links_from_cache(
        &self,
        descriptor: &LinkDescriptor,
    ) -> Option<TargetLinkMap>;

    fn get_page_language_from_cache(&self, target: &PageIdentity) -> Option<LanguageCode>;

    fn save_language_target_links_to_cache(
        &self,
        descriptor: &LinkDescriptor,
        links: &TargetLinkMap,
    );

    fn save_page_language_to_cache(&self, target: &PageIdentity, language: &LanguageCode);

    /// Drop the target-link maps recorded for each of `targets`
    fn delete_language_target_links_from_cache(&self, targets: &[PageIdentity]);

    fn delete_page_language_for_target_from_cache(&self, target: &PageIdentity);

    /// Drop every entry
    fn clear(&self) {}

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}

impl<C: TargetLinksCache + ?Sized> TargetLinksCache for Arc<C> {
    fn get_language_target_links_from_cache(
        &self,
        descriptor: &LinkDescriptor,
    ) -> Option<TargetLinkMap> {
        (**self).get_language_target_links_from_cache(descriptor)
    }

    fn get_page_language_from_cache(&self, target: &PageIdentity) -> Option<LanguageCode> {
        (**self).get_page_language_from_cache(target)
    }

    fn save_language_target_links_to_cache(
        &self,
        descriptor: &LinkDescriptor,
        links: &TargetLinkMap,
    ) {
        (**self).save_language_target_links_to_cache(descriptor, links)
    }

    fn save_page_language_to_cache(&self, target: &PageIdentity, language: &LanguageCode) {
        (**self).save_page_language_to_cache(target, language)
    }

    fn delete_language_target_links_from_cache(&self, targets: &[PageIdentity]) {
        (**self).delete_language_target_links_from_cache(targets)
    }

    fn delete_page_language_for_target_from_cache(&self, target: &PageIdentity) {
        (**self).delete_page_language_for_target_from_cache(target)
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }
}
