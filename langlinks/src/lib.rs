// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! langlinks - Cached interlanguage link resolution for semantic wikis
//!
//! A page declares itself the `<lang>` version of a target page; those
//! declarations are stored as semantic facts and read back to answer
//! "what language is this page" and "which pages translate this target".
//!
//! # Features
//!
//! - **Lookup**: two-hop language resolution and per-target link maps
//! - **Caching**: read-through cache with explicit invalidation on save
//! - **Backends**: sharded in-memory cache, sled-backed shared cache
//! - **Annotation**: writes link containers into a page's semantic data
//! - **Reference store**: in-memory semantic store with a small query grammar
//!
//! # Usage
//!
//! ```ignore
//! use langlinks::{InMemoryTargetLinksCache, InterlanguageLinksLookup, MemoryStore};
//!
//! let lookup = InterlanguageLinksLookup::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(InMemoryTargetLinksCache::default()),
//! );
//! let language = lookup.page_language_for_target(&PageIdentity::main("Foo")?)?;
//! ```

pub mod annotator;
pub mod cache;
pub mod lookup;
pub mod store;
pub mod types;

pub use annotator::{LanguageLinkAnnotator, PageOutput};
pub use cache::{
    CacheConfig, CacheError, CacheResult, CacheStats, EvictionPolicy, InMemoryTargetLinksCache,
    TargetLinksCache,
};
#[cfg(feature = "sled-backend")]
pub use cache::SledTargetLinksCache;
pub use lookup::InterlanguageLinksLookup;
pub use store::{
    MemoryStore, Query, QueryResult, ResultRow, SemanticData, SemanticStore, StoreError,
    StoreResult, Value,
};
pub use types::{
    LanguageCode, LinkDescriptor, LinkKind, Namespace, PageIdentity, Property, PropertyType,
    TargetLinkMap, TypeError, TypeResult,
};

/// langlinks version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
