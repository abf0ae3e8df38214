// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Page fixtures
//!
//! A fixture is a JSON document listing pages and the language links each one
//! declares:
//!
//! ```json
//! {
//!   "pages": [
//!     { "title": "Foo", "links": [{ "language": "en", "target": "Foo" }] },
//!     { "title": "Foo de", "links": [{ "language": "de", "target": "Foo" }] }
//!   ]
//! }
//! ```

use langlinks::{
    LanguageCode, LanguageLinkAnnotator, LinkDescriptor, MemoryStore, PageIdentity, PageOutput,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub pages: Vec<FixturePage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixturePage {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FixtureLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureLink {
    pub language: String,
    pub target: String,
    #[serde(default)]
    pub interwiki: bool,
}

impl FixtureLink {
    pub fn descriptor(&self) -> Result<LinkDescriptor, Box<dyn std::error::Error>> {
        let language = LanguageCode::new(&self.language)?;
        let target = PageIdentity::parse(&self.target)?;
        if self.interwiki {
            Ok(LinkDescriptor::interwiki(language, target)?)
        } else {
            Ok(LinkDescriptor::local(language, target))
        }
    }
}

impl Fixture {
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read fixture {}: {}", path.display(), e))?;
        Self::from_json_str(&contents)
    }

    /// Annotate every page and commit its data to `store`
    ///
    /// Returns the number of links written.
    pub fn load_into(&self, store: &MemoryStore) -> Result<usize, Box<dyn std::error::Error>> {
        let mut written = 0;

        for fixture_page in &self.pages {
            let page = PageIdentity::parse(&fixture_page.title)?;
            let mut output = PageOutput::new(page);
            let mut annotator = LanguageLinkAnnotator::new(&mut output);

            for link in &fixture_page.links {
                annotator.add_annotation_for_link(&link.descriptor()?)?;
                written += 1;
            }

            store.update_data(output.committed().unwrap_or(output.semantic_data()));
        }

        log::debug!(
            "Loaded {} page(s) with {} language link(s)",
            self.pages.len(),
            written
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langlinks::SemanticStore;

    const FIXTURE: &str = r#"{
        "pages": [
            { "title": "Foo", "links": [{ "language": "en", "target": "Foo" }] },
            { "title": "Foo ja", "links": [{ "language": "ja", "target": "Foo", "interwiki": true }] },
            { "title": "Empty" }
        ]
    }"#;

    #[test]
    fn test_load_fixture() {
        let fixture = Fixture::from_json_str(FIXTURE).unwrap();
        assert_eq!(fixture.pages.len(), 3);
        assert!(fixture.pages[1].links[0].interwiki);

        let store = MemoryStore::new();
        assert_eq!(fixture.load_into(&store).unwrap(), 2);

        let foo = PageIdentity::main("Foo").unwrap();
        assert_eq!(store.property_values(&foo, None).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_link_is_rejected() {
        let fixture = Fixture::from_json_str(
            r#"{ "pages": [{ "title": "Foo", "links": [{ "language": " ", "target": "Foo" }] }] }"#,
        )
        .unwrap();

        assert!(fixture.load_into(&MemoryStore::new()).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Fixture::from_json_str("{ pages: ").is_err());
    }
}
