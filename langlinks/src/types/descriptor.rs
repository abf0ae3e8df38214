// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Language link descriptors
//!
//! A [`LinkDescriptor`] states "the page carrying this link is the
//! `language` version of `target`". Local links point at a page on the same
//! wiki; interwiki links point at a page on another wiki and are stored with
//! an interwiki-qualified reference.

use super::language::LanguageCode;
use super::page::PageIdentity;
use super::property::{
    Property, INTERLANGUAGE_LINK, INTERLANGUAGE_REFERENCE, INTERWIKI_LANGUAGE,
    INTERWIKI_LANGUAGE_LINK, INTERWIKI_REFERENCE, PAGE_CONTENT_LANGUAGE,
};
use super::TypeResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Language -> target page, as resolved from the store
pub type TargetLinkMap = BTreeMap<LanguageCode, PageIdentity>;

/// Whether the link target lives on this wiki or another one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    Local,
    Interwiki,
}

impl LinkKind {
    /// Container property the annotator attaches the link under
    pub fn container_property(&self) -> &'static Property {
        match self {
            LinkKind::Local => &INTERLANGUAGE_LINK,
            LinkKind::Interwiki => &INTERWIKI_LANGUAGE_LINK,
        }
    }

    /// Text property holding the link's language
    pub fn language_property(&self) -> &'static Property {
        match self {
            LinkKind::Local => &PAGE_CONTENT_LANGUAGE,
            LinkKind::Interwiki => &INTERWIKI_LANGUAGE,
        }
    }

    /// Page property holding the link's target
    pub fn reference_property(&self) -> &'static Property {
        match self {
            LinkKind::Local => &INTERLANGUAGE_REFERENCE,
            LinkKind::Interwiki => &INTERWIKI_REFERENCE,
        }
    }

    fn container_prefix(&self) -> &'static str {
        match self {
            LinkKind::Local => "ill",
            LinkKind::Interwiki => "iwl",
        }
    }
}

/// One language-link relationship
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub language: LanguageCode,
    pub target: PageIdentity,
    pub kind: LinkKind,
}

impl LinkDescriptor {
    pub fn local(language: LanguageCode, target: PageIdentity) -> Self {
        Self {
            language,
            target,
            kind: LinkKind::Local,
        }
    }

    /// Interwiki link; a target without an interwiki prefix is qualified with
    /// the language code, which is how language interwikis are named.
    pub fn interwiki(language: LanguageCode, target: PageIdentity) -> TypeResult<Self> {
        let target = if target.is_interwiki() {
            target
        } else {
            target.with_interwiki(language.as_str())?
        };

        Ok(Self {
            language,
            target,
            kind: LinkKind::Interwiki,
        })
    }

    /// Subobject name of the container holding this link's facts
    pub fn container_id(&self) -> String {
        format!("{}.{}", self.kind.container_prefix(), self.language)
    }

    /// Query condition selecting every container that references the target
    pub fn reference_condition(&self) -> String {
        format!(
            "[[{}::{}]]",
            self.kind.reference_property().label(),
            self.target.prefixed_text()
        )
    }
}

impl fmt::Display for LinkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            LinkKind::Local => "local",
            LinkKind::Interwiki => "interwiki",
        };
        write!(f, "{} -> {} ({})", self.language, self.target, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    #[test]
    fn test_local_descriptor_condition() {
        let link = LinkDescriptor::local(lang("en"), PageIdentity::main("Foo").unwrap());
        assert_eq!(link.reference_condition(), "[[Interlanguage reference::Foo]]");
        assert_eq!(link.container_id(), "ill.en");
    }

    #[test]
    fn test_interwiki_descriptor_qualifies_target() {
        let link = LinkDescriptor::interwiki(lang("ja"), PageIdentity::main("Foo").unwrap())
            .unwrap();
        assert_eq!(link.target.interwiki(), Some("ja"));
        assert_eq!(link.reference_condition(), "[[Interwiki reference::ja:Foo]]");
        assert_eq!(link.container_id(), "iwl.ja");
    }

    #[test]
    fn test_descriptor_equality_covers_all_fields() {
        let foo = PageIdentity::main("Foo").unwrap();
        let en = LinkDescriptor::local(lang("en"), foo.clone());
        assert_eq!(en, LinkDescriptor::local(lang("EN"), foo.clone()));
        assert_ne!(en, LinkDescriptor::local(lang("de"), foo.clone()));
        assert_ne!(
            en,
            LinkDescriptor {
                kind: LinkKind::Interwiki,
                ..en.clone()
            }
        );
    }
}
