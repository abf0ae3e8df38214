// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Interlanguage link lookup

use crate::cache::TargetLinksCache;
use crate::store::{Query, SemanticStore, StoreResult, Value};
use crate::types::{
    property::PAGE_CONTENT_LANGUAGE, LanguageCode, LinkDescriptor, LinkKind, PageIdentity,
    TargetLinkMap,
};
use std::sync::Arc;

/// Resolves language links through a cache in front of a semantic store
///
/// Store errors are propagated unchanged. Missing data, ambiguous data and
/// values of the wrong type all resolve to "nothing" (`None` or empty).
pub struct InterlanguageLinksLookup<S, C>
where
    S: SemanticStore + ?Sized,
    C: TargetLinksCache + ?Sized,
{
    store: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> Clone for InterlanguageLinksLookup<S, C>
where
    S: SemanticStore + ?Sized,
    C: TargetLinksCache + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S, C> InterlanguageLinksLookup<S, C>
where
    S: SemanticStore + ?Sized,
    C: TargetLinksCache + ?Sized,
{
    pub fn new(store: Arc<S>, cache: Arc<C>) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Cached target-link map for the descriptor, without touching the store
    pub fn try_cached_language_target_links(
        &self,
        descriptor: &LinkDescriptor,
    ) -> Option<TargetLinkMap> {
        self.cache.get_language_target_links_from_cache(descriptor)
    }

    /// Cached page language for `target`, without touching the store
    pub fn try_cached_page_language_for_target(
        &self,
        target: &PageIdentity,
    ) -> Option<LanguageCode> {
        self.cache.get_page_language_from_cache(target)
    }

    /// Drop every cache entry a new annotation of `target` could invalidate
    ///
    /// Besides `target` itself, this covers the target-link maps of every
    /// page `target` currently links to, local or interwiki, since those maps
    /// list `target`. Must run before the fresh annotation is committed to
    /// the store; pair it with [`Self::invalidate_cached_links_after_save`]
    /// once the commit is done.
    pub fn invalidate_cached_language_target_links(
        &self,
        target: &PageIdentity,
    ) -> StoreResult<()> {
        log::debug!("Invalidating cached language links for {}", target);
        self.forget_declared_links(target)
    }

    /// Drop the target-link maps of the pages `target` links to after a save
    ///
    /// Runs after the fresh annotation is committed, so the references read
    /// here are the new ones. A page that started linking to a target whose
    /// map was already cached would otherwise leave that map without it.
    pub fn invalidate_cached_links_after_save(&self, target: &PageIdentity) -> StoreResult<()> {
        log::debug!("Invalidating cached language links after saving {}", target);
        self.forget_declared_links(target)
    }

    /// Every page linked to the descriptor's target, keyed by language
    ///
    /// Rows are applied in result order, so for a language recorded on more
    /// than one page the last row wins.
    pub fn query_language_target_links(
        &self,
        descriptor: &LinkDescriptor,
    ) -> StoreResult<TargetLinkMap> {
        let language_property = descriptor.kind.language_property();
        let query = Query::new(descriptor.reference_condition()).with_printout(language_property);

        let result = self.store.query_result(&query)?;
        let mut links = TargetLinkMap::new();

        for row in result {
            let language = match row.first_value() {
                Some(Value::Text(text)) => match LanguageCode::new(text) {
                    Ok(language) => language,
                    Err(_) => continue,
                },
                Some(other) => {
                    log::debug!(
                        "Skipping {}: expected a language text value, found {:?}",
                        row.subject,
                        other
                    );
                    continue;
                }
                None => continue,
            };

            links.insert(language, row.subject.page());
        }

        log::debug!(
            "Query {} resolved {} language link(s)",
            query.query_string(),
            links.len()
        );

        self.cache.save_language_target_links_to_cache(descriptor, &links);
        Ok(links)
    }

    /// Language of the last language value recorded for `target`
    pub fn find_last_language_for_target(
        &self,
        target: &PageIdentity,
    ) -> StoreResult<Option<LanguageCode>> {
        let Some(container) = self.first_link_container(target, LinkKind::Local)? else {
            return Ok(None);
        };

        let values = self
            .store
            .property_values(&container, Some(&PAGE_CONTENT_LANGUAGE))?;

        let language = values
            .iter()
            .filter_map(|value| match value {
                Value::Text(text) => LanguageCode::new(text).ok(),
                other => {
                    log::debug!("Ignoring non-text language value {:?} on {}", other, container);
                    None
                }
            })
            .last();

        if let Some(language) = &language {
            self.cache.save_page_language_to_cache(target, language);
        }

        Ok(language)
    }

    /// Targets referenced by the language links recorded for `target`
    pub fn find_link_references_for_target(
        &self,
        target: &PageIdentity,
    ) -> StoreResult<Vec<PageIdentity>> {
        self.link_references(target, LinkKind::Local)
    }

    /// Read-through variant of [`Self::query_language_target_links`]
    pub fn language_target_links(&self, descriptor: &LinkDescriptor) -> StoreResult<TargetLinkMap> {
        match self.try_cached_language_target_links(descriptor) {
            Some(links) => {
                log::debug!("Serving language links for {} from cache", descriptor.target);
                Ok(links)
            }
            None => self.query_language_target_links(descriptor),
        }
    }

    /// Read-through variant of [`Self::find_last_language_for_target`]
    pub fn page_language_for_target(
        &self,
        target: &PageIdentity,
    ) -> StoreResult<Option<LanguageCode>> {
        match self.try_cached_page_language_for_target(target) {
            Some(language) => Ok(Some(language)),
            None => self.find_last_language_for_target(target),
        }
    }

    fn forget_declared_links(&self, target: &PageIdentity) -> StoreResult<()> {
        let targets = self.declared_link_targets(target)?;
        log::trace!("Dropping target-link maps of {} page(s)", targets.len());

        self.cache.delete_language_target_links_from_cache(&targets);
        self.cache.delete_page_language_for_target_from_cache(target);
        Ok(())
    }

    /// `target` followed by every page its local and interwiki links point at
    fn declared_link_targets(&self, target: &PageIdentity) -> StoreResult<Vec<PageIdentity>> {
        let mut targets = vec![target.clone()];
        let local = self.link_references(target, LinkKind::Local)?;
        let interwiki = self.link_references(target, LinkKind::Interwiki)?;

        for reference in local.into_iter().chain(interwiki) {
            if !targets.contains(&reference) {
                targets.push(reference);
            }
        }
        Ok(targets)
    }

    /// Reference values of the first `kind` container recorded for `target`
    fn link_references(
        &self,
        target: &PageIdentity,
        kind: LinkKind,
    ) -> StoreResult<Vec<PageIdentity>> {
        let Some(container) = self.first_link_container(target, kind)? else {
            return Ok(Vec::new());
        };

        let references = self
            .store
            .property_values(&container, Some(kind.reference_property()))?
            .into_iter()
            .filter_map(|value| match value {
                Value::PageRef(page) => Some(page),
                other => {
                    log::debug!("Ignoring non-page reference {:?} on {}", other, container);
                    None
                }
            })
            .collect();

        Ok(references)
    }

    /// First hop: the first `kind` link container recorded for `target`
    fn first_link_container(
        &self,
        target: &PageIdentity,
        kind: LinkKind,
    ) -> StoreResult<Option<PageIdentity>> {
        let containers = self
            .store
            .property_values(target, Some(kind.container_property()))?;

        Ok(containers.into_iter().find_map(|value| match value {
            Value::PageRef(container) => Some(container),
            _ => None,
        }))
    }
}
