// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Page identities
//!
//! A [`PageIdentity`] names a wiki page by namespace and title, optionally
//! qualified by an interwiki prefix (the page lives on another wiki) or a
//! subobject fragment (a container record attached to the page).

use super::error::{TypeError, TypeResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static TITLE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("title separator pattern is valid"));

/// Wiki namespace number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Namespace(pub i32);

impl Namespace {
    pub const MAIN: Namespace = Namespace(0);
    pub const TALK: Namespace = Namespace(1);
    pub const USER: Namespace = Namespace(2);
    pub const PROJECT: Namespace = Namespace(4);
    pub const FILE: Namespace = Namespace(6);
    pub const TEMPLATE: Namespace = Namespace(10);
    pub const HELP: Namespace = Namespace(12);
    pub const CATEGORY: Namespace = Namespace(14);

    const CANONICAL: [(Namespace, &'static str); 7] = [
        (Namespace::TALK, "Talk"),
        (Namespace::USER, "User"),
        (Namespace::PROJECT, "Project"),
        (Namespace::FILE, "File"),
        (Namespace::TEMPLATE, "Template"),
        (Namespace::HELP, "Help"),
        (Namespace::CATEGORY, "Category"),
    ];

    /// Canonical prefix for this namespace, `None` for main and unknown namespaces
    pub fn canonical_name(&self) -> Option<&'static str> {
        Self::CANONICAL
            .iter()
            .find(|(ns, _)| ns == self)
            .map(|(_, name)| *name)
    }

    fn from_canonical_name(name: &str) -> Option<Namespace> {
        Self::CANONICAL
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(ns, _)| *ns)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace::MAIN
    }
}

/// Value-equality handle to a wiki page or one of its subobjects
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageIdentity {
    namespace: Namespace,
    /// Title in db-key form (underscores, first letter upper-cased)
    title: String,
    interwiki: Option<String>,
    subobject: Option<String>,
}

impl PageIdentity {
    /// Create a page identity, normalizing the title to db-key form
    pub fn new(title: &str, namespace: Namespace) -> TypeResult<Self> {
        Ok(Self {
            namespace,
            title: normalize_title(title)?,
            interwiki: None,
            subobject: None,
        })
    }

    /// Page in the main namespace
    pub fn main(title: &str) -> TypeResult<Self> {
        Self::new(title, Namespace::MAIN)
    }

    /// Parse a prefixed title such as `Help:Contents`
    ///
    /// Only canonical namespace names are recognized; any other prefix stays
    /// part of a main namespace title.
    pub fn parse(text: &str) -> TypeResult<Self> {
        if let Some((prefix, rest)) = text.split_once(':') {
            if let Some(namespace) = Namespace::from_canonical_name(prefix.trim()) {
                return Self::new(rest, namespace);
            }
        }
        Self::main(text)
    }

    pub fn with_interwiki(mut self, prefix: &str) -> TypeResult<Self> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(TypeError::InvalidPage(format!(
                "empty interwiki prefix for '{}'",
                self.title
            )));
        }
        self.interwiki = Some(prefix);
        Ok(self)
    }

    pub fn with_subobject(mut self, name: &str) -> TypeResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TypeError::InvalidPage(format!(
                "empty subobject name for '{}'",
                self.title
            )));
        }
        self.subobject = Some(name.to_string());
        Ok(self)
    }

    /// The owning page, with any subobject fragment removed
    pub fn page(&self) -> PageIdentity {
        Self {
            subobject: None,
            ..self.clone()
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn db_key(&self) -> &str {
        &self.title
    }

    pub fn interwiki(&self) -> Option<&str> {
        self.interwiki.as_deref()
    }

    pub fn subobject(&self) -> Option<&str> {
        self.subobject.as_deref()
    }

    pub fn is_subobject(&self) -> bool {
        self.subobject.is_some()
    }

    pub fn is_interwiki(&self) -> bool {
        self.interwiki.is_some()
    }

    /// Title with spaces instead of underscores, without any prefix
    pub fn text(&self) -> String {
        self.title.replace('_', " ")
    }

    /// Title as written in wiki text: interwiki and namespace prefixes included
    pub fn prefixed_text(&self) -> String {
        let mut out = String::new();
        if let Some(interwiki) = &self.interwiki {
            out.push_str(interwiki);
            out.push(':');
        }
        if let Some(name) = self.namespace.canonical_name() {
            out.push_str(name);
            out.push(':');
        }
        out.push_str(&self.text());
        out
    }
}

impl fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefixed_text())?;
        if let Some(subobject) = &self.subobject {
            write!(f, "#{}", subobject)?;
        }
        Ok(())
    }
}

fn normalize_title(title: &str) -> TypeResult<String> {
    let collapsed = TITLE_SEPARATORS.replace_all(title.trim(), "_");
    let collapsed = collapsed.trim_matches('_');

    let mut chars = collapsed.chars();
    match chars.next() {
        None => Err(TypeError::EmptyTitle),
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_normalization() {
        let page = PageIdentity::main("  foo   bar__baz ").unwrap();
        assert_eq!(page.db_key(), "Foo_bar_baz");
        assert_eq!(page.text(), "Foo bar baz");
        assert_eq!(page, PageIdentity::main("Foo_bar baz").unwrap());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(PageIdentity::main("   "), Err(TypeError::EmptyTitle));
        assert_eq!(PageIdentity::main("__"), Err(TypeError::EmptyTitle));
    }

    #[test]
    fn test_parse_namespace_prefix() {
        let help = PageIdentity::parse("help:Getting started").unwrap();
        assert_eq!(help.namespace(), Namespace::HELP);
        assert_eq!(help.prefixed_text(), "Help:Getting started");

        // Unknown prefixes stay in the title
        let odd = PageIdentity::parse("Star Wars: Episode IV").unwrap();
        assert_eq!(odd.namespace(), Namespace::MAIN);
        assert_eq!(odd.text(), "Star Wars: Episode IV");
    }

    #[test]
    fn test_subobject_owning_page() {
        let page = PageIdentity::main("Foo").unwrap();
        let container = page.clone().with_subobject("ill.en").unwrap();

        assert!(container.is_subobject());
        assert_ne!(container, page);
        assert_eq!(container.page(), page);
        assert_eq!(container.to_string(), "Foo#ill.en");
    }

    #[test]
    fn test_interwiki_prefixed_text() {
        let page = PageIdentity::main("Foo").unwrap().with_interwiki("JA").unwrap();
        assert_eq!(page.interwiki(), Some("ja"));
        assert_eq!(page.prefixed_text(), "ja:Foo");
        assert_ne!(page, PageIdentity::main("Foo").unwrap());
    }
}
