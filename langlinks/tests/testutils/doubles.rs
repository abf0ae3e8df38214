//! Store and cache doubles

use langlinks::{
    CacheConfig, CacheStats, InMemoryTargetLinksCache, LanguageCode, LinkDescriptor,
    PageIdentity, Property, Query, QueryResult, SemanticStore, StoreError, StoreResult,
    TargetLinkMap, TargetLinksCache, Value,
};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// A call received by [`ScriptedStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    PropertyValues {
        subject: PageIdentity,
        property: Option<String>,
    },
    Query(String),
}

/// Store answering from scripted responses, consumed in call order
///
/// Property reads with no script left return an empty list; queries with no
/// script left return an empty result.
#[derive(Default)]
pub struct ScriptedStore {
    property_values: Mutex<VecDeque<StoreResult<Vec<Value>>>>,
    query_results: Mutex<VecDeque<StoreResult<QueryResult>>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_values(self, values: Vec<Value>) -> Self {
        self.property_values.lock().push_back(Ok(values));
        self
    }

    pub fn with_property_error(self, error: StoreError) -> Self {
        self.property_values.lock().push_back(Err(error));
        self
    }

    pub fn with_query_result(self, result: QueryResult) -> Self {
        self.query_results.lock().push_back(Ok(result));
        self
    }

    pub fn with_query_error(self, error: StoreError) -> Self {
        self.query_results.lock().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                StoreCall::Query(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SemanticStore for ScriptedStore {
    fn property_values(
        &self,
        subject: &PageIdentity,
        property: Option<&Property>,
    ) -> StoreResult<Vec<Value>> {
        self.calls.lock().push(StoreCall::PropertyValues {
            subject: subject.clone(),
            property: property.map(|p| p.label().to_string()),
        });
        self.property_values
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn query_result(&self, query: &Query) -> StoreResult<QueryResult> {
        self.calls
            .lock()
            .push(StoreCall::Query(query.query_string().to_string()));
        self.query_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(QueryResult::empty()))
    }
}

/// A call received by [`RecordingCache`]
#[derive(Debug, Clone, PartialEq)]
pub enum CacheCall {
    GetLinks(LinkDescriptor),
    GetLanguage(PageIdentity),
    SaveLinks(LinkDescriptor, TargetLinkMap),
    SaveLanguage(PageIdentity, LanguageCode),
    DeleteLinks(Vec<PageIdentity>),
    DeleteLanguage(PageIdentity),
}

/// In-memory cache that records every call before delegating
pub struct RecordingCache {
    inner: InMemoryTargetLinksCache,
    calls: Mutex<Vec<CacheCall>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self {
            inner: InMemoryTargetLinksCache::new(CacheConfig::default())
                .expect("default config is valid"),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CacheCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&CacheCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: CacheCall) {
        self.calls.lock().push(call);
    }
}

impl TargetLinksCache for RecordingCache {
    fn get_language_target_links_from_cache(
        &self,
        descriptor: &LinkDescriptor,
    ) -> Option<TargetLinkMap> {
        self.record(CacheCall::GetLinks(descriptor.clone()));
        self.inner.get_language_target_links_from_cache(descriptor)
    }

    fn get_page_language_from_cache(&self, target: &PageIdentity) -> Option<LanguageCode> {
        self.record(CacheCall::GetLanguage(target.clone()));
        self.inner.get_page_language_from_cache(target)
    }

    fn save_language_target_links_to_cache(
        &self,
        descriptor: &LinkDescriptor,
        links: &TargetLinkMap,
    ) {
        self.record(CacheCall::SaveLinks(descriptor.clone(), links.clone()));
        self.inner.save_language_target_links_to_cache(descriptor, links)
    }

    fn save_page_language_to_cache(&self, target: &PageIdentity, language: &LanguageCode) {
        self.record(CacheCall::SaveLanguage(target.clone(), language.clone()));
        self.inner.save_page_language_to_cache(target, language)
    }

    fn delete_language_target_links_from_cache(&self, targets: &[PageIdentity]) {
        self.record(CacheCall::DeleteLinks(targets.to_vec()));
        self.inner.delete_language_target_links_from_cache(targets)
    }

    fn delete_page_language_for_target_from_cache(&self, target: &PageIdentity) {
        self.record(CacheCall::DeleteLanguage(target.clone()));
        self.inner.delete_page_language_for_target_from_cache(target)
    }

    fn clear(&self) {
        self.inner.clear()
    }

    fn stats(&self) -> CacheStats {
        self.inner.stats()
    }
}
