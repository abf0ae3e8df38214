// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Typed values returned by the store

use crate::types::PageIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single property value
///
/// Consumers match on the variant they expect and treat anything else as
/// absent data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    PageRef(PageIdentity),
    /// Any value type the lookup layer does not interpret (numbers, dates, ...)
    Other {
        type_id: String,
        raw: String,
    },
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_page(&self) -> Option<&PageIdentity> {
        match self {
            Value::PageRef(page) => Some(page),
            _ => None,
        }
    }

    /// Whether this value equals the textual form used in a query condition
    pub fn matches_condition(&self, expected: &str) -> bool {
        let expected = expected.trim();
        match self {
            Value::Text(text) => text.trim() == expected,
            Value::PageRef(page) => page_matches(page, expected),
            Value::Other { raw, .. } => raw.trim() == expected,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::PageRef(page) => write!(f, "{}", page),
            Value::Other { raw, .. } => f.write_str(raw),
        }
    }
}

fn page_matches(page: &PageIdentity, expected: &str) -> bool {
    let title = match page.interwiki() {
        Some(prefix) => match expected.split_once(':') {
            Some((candidate, rest)) if candidate.trim().eq_ignore_ascii_case(prefix) => rest,
            _ => return false,
        },
        None => expected,
    };

    match PageIdentity::parse(title) {
        Ok(parsed) => {
            !page.is_subobject()
                && parsed.namespace() == page.namespace()
                && parsed.db_key() == page.db_key()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_value_matches_normalized_title() {
        let value = Value::PageRef(PageIdentity::main("Foo bar").unwrap());
        assert!(value.matches_condition("Foo_bar"));
        assert!(value.matches_condition(" foo bar "));
        assert!(!value.matches_condition("Foo"));
    }

    #[test]
    fn test_interwiki_value_requires_prefix() {
        let page = PageIdentity::main("Foo").unwrap().with_interwiki("ja").unwrap();
        let value = Value::PageRef(page);
        assert!(value.matches_condition("ja:Foo"));
        assert!(!value.matches_condition("Foo"));
        assert!(!value.matches_condition("fr:Foo"));
    }
}
