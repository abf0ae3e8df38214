// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Property vocabulary for interlanguage facts
//!
//! Every fact the annotator writes and every hop the lookup issues is keyed by
//! one of these predefined properties. Each property has a fixed declared type
//! so the store can be asked for, and the lookup can check, typed values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Short text (`_txt`)
    Text,
    /// Page reference (`_wpg`)
    Page,
    /// Subobject container (`__sob`)
    Container,
}

impl PropertyType {
    pub fn type_id(&self) -> &'static str {
        match self {
            PropertyType::Text => "_txt",
            PropertyType::Page => "_wpg",
            PropertyType::Container => "__sob",
        }
    }
}

/// A predefined property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    key: &'static str,
    label: &'static str,
    value_type: PropertyType,
}

impl Property {
    pub const fn new(key: &'static str, label: &'static str, value_type: PropertyType) -> Self {
        Self {
            key,
            label,
            value_type,
        }
    }

    /// Internal key (`__sil_ill`, ...)
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Human readable label, as used in query strings
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value_type(&self) -> PropertyType {
        self.value_type
    }

    /// Resolve a property by label or internal key
    pub fn lookup(name: &str) -> Option<&'static Property> {
        let name = name.trim();
        ALL_PROPERTIES
            .iter()
            .copied()
            .find(|p| p.label.eq_ignore_ascii_case(name) || p.key == name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Container holding one same-wiki language link
pub static INTERLANGUAGE_LINK: Property =
    Property::new("__sil_ill", "Interlanguage link", PropertyType::Container);

/// Language of a page declared through a same-wiki language link
pub static PAGE_CONTENT_LANGUAGE: Property =
    Property::new("__sil_ill_lang", "Page content language", PropertyType::Text);

/// Target page of a same-wiki language link
pub static INTERLANGUAGE_REFERENCE: Property =
    Property::new("__sil_ill_ref", "Interlanguage reference", PropertyType::Page);

/// Container holding one interwiki language link
pub static INTERWIKI_LANGUAGE_LINK: Property =
    Property::new("__sil_iwl", "Interwiki language link", PropertyType::Container);

/// Language of an interwiki language link
pub static INTERWIKI_LANGUAGE: Property =
    Property::new("__sil_iwl_lang", "Interwiki language", PropertyType::Text);

/// Interwiki-qualified target of an interwiki language link
pub static INTERWIKI_REFERENCE: Property =
    Property::new("__sil_iwl_ref", "Interwiki reference", PropertyType::Page);

static ALL_PROPERTIES: [&Property; 6] = [
    &INTERLANGUAGE_LINK,
    &PAGE_CONTENT_LANGUAGE,
    &INTERLANGUAGE_REFERENCE,
    &INTERWIKI_LANGUAGE_LINK,
    &INTERWIKI_LANGUAGE,
    &INTERWIKI_REFERENCE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_label_and_key() {
        assert_eq!(
            Property::lookup("interlanguage reference"),
            Some(&INTERLANGUAGE_REFERENCE)
        );
        assert_eq!(Property::lookup("__sil_iwl_lang"), Some(&INTERWIKI_LANGUAGE));
        assert_eq!(Property::lookup("Has population"), None);
    }

    #[test]
    fn test_language_properties_are_text() {
        assert_eq!(PAGE_CONTENT_LANGUAGE.value_type().type_id(), "_txt");
        assert_eq!(INTERWIKI_LANGUAGE.value_type().type_id(), "_txt");
    }
}
