// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers

use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use super::commands::OutputFormat;
use super::fixture::Fixture;
use super::output::LinksFormatter;
use langlinks::{
    CacheConfig, InMemoryTargetLinksCache, InterlanguageLinksLookup, LanguageCode,
    LinkDescriptor, MemoryStore, PageIdentity, SledTargetLinksCache, TargetLinksCache,
};

type Lookup = InterlanguageLinksLookup<MemoryStore, dyn TargetLinksCache>;

/// Store, cache and lookup for one CLI invocation
pub struct Session {
    lookup: Lookup,
}

impl Session {
    /// Load the fixture into a fresh store and open the configured cache
    pub fn open(
        fixture: Option<PathBuf>,
        cache_config: Option<PathBuf>,
        cache_dir: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = match cache_config {
            Some(path) => CacheConfig::from_json_file(&path)?,
            None => CacheConfig::default(),
        };

        let store = Arc::new(MemoryStore::new());
        match fixture {
            Some(path) => {
                let links = Fixture::from_file(&path)?.load_into(&store)?;
                log::info!("Loaded {} language link(s) from {}", links, path.display());
            }
            None => log::warn!("No fixture given, the store is empty"),
        }

        let cache: Arc<dyn TargetLinksCache> = match cache_dir {
            Some(dir) => Arc::new(SledTargetLinksCache::open(dir, config)?),
            None => Arc::new(InMemoryTargetLinksCache::new(config)?),
        };

        Ok(Self {
            lookup: InterlanguageLinksLookup::new(store, cache),
        })
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }
}

/// Handle the language command
pub fn handle_language(session: &Session, page: &str) -> Result<(), Box<dyn std::error::Error>> {
    let page = PageIdentity::parse(page)?;

    match session.lookup().page_language_for_target(&page)? {
        Some(language) => println!("{}", language),
        None => println!("{}", format!("No language recorded for {}", page).yellow()),
    }
    Ok(())
}

/// Handle the references command
pub fn handle_references(session: &Session, page: &str) -> Result<(), Box<dyn std::error::Error>> {
    let page = PageIdentity::parse(page)?;
    let references = session.lookup().find_link_references_for_target(&page)?;

    if references.is_empty() {
        println!("{}", format!("{} declares no language links", page).yellow());
    }
    for reference in references {
        println!("{}", reference.prefixed_text());
    }
    Ok(())
}

/// Handle the links command
pub fn handle_links(
    session: &Session,
    target: &str,
    language: &str,
    interwiki: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let language = LanguageCode::new(language)?;
    let target = PageIdentity::parse(target)?;
    let descriptor = if interwiki {
        LinkDescriptor::interwiki(language, target)?
    } else {
        LinkDescriptor::local(language, target)
    };

    let links = session.lookup().language_target_links(&descriptor)?;

    print!("{}", LinksFormatter::format(&descriptor, &links, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Handle the invalidate command
pub fn handle_invalidate(session: &Session, page: &str) -> Result<(), Box<dyn std::error::Error>> {
    let page = PageIdentity::parse(page)?;
    let references = session.lookup().find_link_references_for_target(&page)?;

    session.lookup().invalidate_cached_language_target_links(&page)?;

    println!(
        "{}",
        format!("Invalidated cached language links for {}", page).green()
    );
    for reference in references {
        println!("  → {}", reference.prefixed_text());
    }
    Ok(())
}

/// Handle the stats command
pub fn handle_stats(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let stats = session.lookup().cache().stats();
    print!("{}", LinksFormatter::format_stats(&stats));
    Ok(())
}
