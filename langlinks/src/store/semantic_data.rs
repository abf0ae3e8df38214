// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Semantic data containers
//!
//! [`SemanticData`] is the unit of writing: the facts recorded for one page,
//! plus the subobject containers attached to it. A page's data is always
//! replaced as a whole when it is committed to a store.

use super::value::Value;
use crate::types::{PageIdentity, Property, TypeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SemanticData {
    subject: PageIdentity,
    facts: Vec<(&'static Property, Value)>,
    subobjects: Vec<SemanticData>,
}

impl SemanticData {
    pub fn new(subject: PageIdentity) -> Self {
        Self {
            subject,
            facts: Vec::new(),
            subobjects: Vec::new(),
        }
    }

    /// Empty container for the subobject `id` of `page`
    pub fn new_container(page: &PageIdentity, id: &str) -> TypeResult<Self> {
        Ok(Self::new(page.page().with_subobject(id)?))
    }

    pub fn subject(&self) -> &PageIdentity {
        &self.subject
    }

    pub fn add_property_value(&mut self, property: &'static Property, value: Value) {
        self.facts.push((property, value));
    }

    /// Attach a container under `property`, replacing a container with the
    /// same subobject id
    pub fn add_subobject(&mut self, property: &'static Property, container: SemanticData) {
        let container_ref = Value::PageRef(container.subject.clone());

        self.facts
            .retain(|(p, v)| !(p.key() == property.key() && *v == container_ref));
        self.subobjects.retain(|s| s.subject != container.subject);

        self.facts.push((property, container_ref));
        self.subobjects.push(container);
    }

    pub fn facts(&self) -> &[(&'static Property, Value)] {
        &self.facts
    }

    pub fn property_values(&self, property: &Property) -> Vec<&Value> {
        self.facts
            .iter()
            .filter(|(p, _)| p.key() == property.key())
            .map(|(_, v)| v)
            .collect()
    }

    pub fn subobjects(&self) -> &[SemanticData] {
        &self.subobjects
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.subobjects.is_empty()
    }
}
